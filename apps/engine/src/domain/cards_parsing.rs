//! Card and suit tokens: "AS", "2C", "TH" (or "10H"), and suit names like "HEARTS".

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, TrumpRejection, ValidationKind};

pub(crate) fn rank_char(rank: Rank) -> char {
    match rank {
        Rank::Six => '6',
        Rank::Seven => '7',
        Rank::Eight => '8',
        Rank::Nine => '9',
        Rank::Ten => 'T',
        Rank::Jack => 'J',
        Rank::Queen => 'Q',
        Rank::King => 'K',
        Rank::Ace => 'A',
        Rank::Two => '2',
    }
}

pub(crate) fn suit_char(suit: Suit) -> char {
    match suit {
        Suit::Hearts => 'H',
        Suit::Diamonds => 'D',
        Suit::Spades => 'S',
        Suit::Clubs => 'C',
    }
}

pub(crate) fn suit_name(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "HEARTS",
        Suit::Diamonds => "DIAMONDS",
        Suit::Spades => "SPADES",
        Suit::Clubs => "CLUBS",
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", rank_char(self.rank), suit_char(self.suit))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(suit_name(*self))
    }
}

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank_part, suit_part) = match s.len() {
            2 | 3 if s.is_char_boundary(s.len() - 1) => s.split_at(s.len() - 1),
            _ => return Err(parse_err(s)),
        };
        let rank = match rank_part {
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            "2" => Rank::Two,
            _ => return Err(parse_err(s)),
        };
        let suit = match suit_part {
            "H" => Suit::Hearts,
            "D" => Suit::Diamonds,
            "S" => Suit::Spades,
            "C" => Suit::Clubs,
            _ => return Err(parse_err(s)),
        };
        Ok(Card { suit, rank })
    }
}

/// Parses a trump token. Accepts the full suit name in any case or the
/// single-letter abbreviation; anything else is an unknown suit.
impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HEARTS" | "H" => Ok(Suit::Hearts),
            "DIAMONDS" | "D" => Ok(Suit::Diamonds),
            "SPADES" | "S" => Ok(Suit::Spades),
            "CLUBS" | "C" => Ok(Suit::Clubs),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidTrumpChoice(TrumpRejection::UnknownSuit),
                format!("Unknown suit: {s}"),
            )),
        }
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
