//! Card game logic: point values, power, checking suits in hands, comparing card strength

use super::cards_types::{Card, Rank, Suit};

/// Point value of a card. The deck sums to 187.
pub fn points(card: Card) -> u16 {
    match card.rank {
        Rank::Ace => 11,
        Rank::Ten => 10,
        Rank::King | Rank::Queen | Rank::Jack => 4,
        Rank::Two if card.suit == Suit::Clubs => 25,
        Rank::Two => 10,
        Rank::Six | Rank::Seven | Rank::Eight | Rank::Nine => 0,
    }
}

/// Comparative power within a suit: 6 is 5, up to 2 at 14.
pub fn power(card: Card) -> u8 {
    match card.rank {
        Rank::Six => 5,
        Rank::Seven => 6,
        Rank::Eight => 7,
        Rank::Nine => 8,
        Rank::Ten => 9,
        Rank::Jack => 10,
        Rank::Queen => 11,
        Rank::King => 12,
        Rank::Ace => 13,
        Rank::Two => 14,
    }
}

pub fn hand_points(hand: &[Card]) -> u16 {
    hand.iter().map(|&c| points(c)).sum()
}

pub fn hand_power(hand: &[Card]) -> u16 {
    hand.iter().map(|&c| u16::from(power(c))).sum()
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

pub fn count_suit(hand: &[Card], suit: Suit) -> usize {
    hand.iter().filter(|c| c.suit == suit).count()
}

/// True when `a` beats the currently winning card `b`.
///
/// Trump beats non-trump. Otherwise only lead-suit cards compete, by power.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a_trump && b_trump {
        return power(a) > power(b);
    }
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return power(a) > power(b);
    }
    false
}
