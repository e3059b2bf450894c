//! Deck construction, shuffling, and the 9-9-9-9 + 4 deal.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::cards_logic::hand_points;
use crate::domain::rules::{DECK_SIZE, HAND_SIZE, MIN_HAND_POINTS, PLAYERS, STOCK_SIZE};
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

/// The 40-card deck in enumeration order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Uniform Fisher-Yates shuffle driven by the injected RNG.
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// Four sorted 9-card hands plus the face-down stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub hands: [Vec<Card>; PLAYERS],
    pub stock: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealOutcome {
    Dealt(Deal),
    /// A hand came out under the point threshold; the whole deal is void.
    RedealRequired { seat: Seat, hand_points: u16 },
}

/// Split a shuffled deck into hands and stock. Hands are sorted for convenience.
pub fn split_deck(deck: &[Card]) -> Deal {
    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, hand_slot) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        let mut hand = deck[start..start + HAND_SIZE].to_vec();
        hand.sort();
        *hand_slot = hand;
    }
    let stock = deck[PLAYERS * HAND_SIZE..PLAYERS * HAND_SIZE + STOCK_SIZE].to_vec();
    Deal { hands, stock }
}

/// First seat (lowest index) whose hand is under the minimum, with its points.
pub fn weak_hand(hands: &[Vec<Card>; PLAYERS]) -> Option<(Seat, u16)> {
    hands
        .iter()
        .enumerate()
        .map(|(seat, hand)| (seat as Seat, hand_points(hand)))
        .find(|&(_, pts)| pts < MIN_HAND_POINTS)
}

/// Shuffle a fresh deck and deal it. Only the hands are checked against the
/// minimum, not the stock.
pub fn deal_round<R: Rng + ?Sized>(rng: &mut R) -> DealOutcome {
    let mut deck = full_deck();
    shuffle_deck(&mut deck, rng);
    let deal = split_deck(&deck);
    match weak_hand(&deal.hands) {
        Some((seat, hand_points)) => DealOutcome::RedealRequired { seat, hand_points },
        None => DealOutcome::Dealt(deal),
    }
}
