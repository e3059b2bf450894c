// Proptest generators for domain types.
// Cards are drawn from a shuffled deck so every generated set is duplicate-free.

use proptest::prelude::*;

use crate::domain::dealing::{full_deck, split_deck, Deal};
use crate::domain::state::Seat;
use crate::domain::{Card, Rank, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Spades),
        Just(Suit::Clubs),
    ]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

pub fn shuffled_deck() -> impl Strategy<Value = Vec<Card>> {
    Just(full_deck()).prop_shuffle()
}

/// `count` distinct cards.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    shuffled_deck().prop_map(move |deck| deck[..count].to_vec())
}

/// A deal from a uniformly shuffled deck (may contain sub-12 hands).
pub fn raw_deal() -> impl Strategy<Value = Deal> {
    shuffled_deck().prop_map(|deck| split_deck(&deck))
}

/// A full trick: (leader, plays in order starting from the leader).
pub fn complete_trick() -> impl Strategy<Value = (Seat, Vec<(Seat, Card)>)> {
    (0u8..4, unique_cards(4)).prop_map(|(leader, cards)| {
        let plays = cards
            .into_iter()
            .enumerate()
            .map(|(i, c)| ((leader + i as u8) % 4, c))
            .collect();
        (leader, plays)
    })
}

/// A hand of `size` cards plus a lead card that is not in it.
pub fn hand_and_lead(size: usize) -> impl Strategy<Value = (Vec<Card>, Card)> {
    unique_cards(size + 1).prop_map(|mut cards| {
        let lead = cards.pop().expect("size + 1 cards");
        (cards, lead)
    })
}
