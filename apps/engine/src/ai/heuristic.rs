//! House AI: the table's default computer player.
//!
//! Bidding reads only hand points and hand power. The exchange dumps the
//! three weakest cards, trump is the longest suit, and card play is greedy:
//! the bid winner plays its strongest legal card, everyone else grabs points
//! when following and leads cheap.

use super::trait_def::{AiError, AiPlayer};
use crate::domain::bidding::BidAction;
use crate::domain::cards_logic::{count_suit, hand_points, hand_power, points, power};
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::rules::{MIN_BID, RETURN_COUNT};
use crate::domain::{Card, Suit};

/// Below this many hand points the house always passes.
const PASS_BELOW_POINTS: u16 = 40;
const STRONG_POINTS: u16 = 80;
const STRONG_POWER: u16 = 70;
const GOOD_POINTS: u16 = 60;
/// A strong hand jumps 10 over the minimum, but not past this.
const JUMP_CAP: u16 = 150;

pub struct HousePlayer;

impl HousePlayer {
    pub const NAME: &'static str = "house";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(_seed: Option<u64>) -> Self {
        Self
    }

    /// Bid the house would like to make, before checking legality.
    fn target_bid(hand: &[Card], min_bid: u16, nobody_has_bid: bool) -> Option<u16> {
        let pts = hand_points(hand);
        let pwr = hand_power(hand);
        if pts < PASS_BELOW_POINTS {
            return None;
        }
        if pts >= STRONG_POINTS && pwr >= STRONG_POWER {
            // Never undercut the standing bid: past the cap, bid the minimum.
            return Some((min_bid + 10).min(JUMP_CAP).max(min_bid));
        }
        if pts >= GOOD_POINTS {
            return Some(min_bid);
        }
        if nobody_has_bid {
            return Some(MIN_BID);
        }
        None
    }
}

impl AiPlayer for HousePlayer {
    fn choose_bid(&self, state: &CurrentRoundInfo) -> Result<BidAction, AiError> {
        let Some(min_bid) = state.min_bid() else {
            return Ok(BidAction::Pass);
        };
        let action = Self::target_bid(&state.hand, min_bid, state.nobody_has_bid())
            .map(BidAction::Bid)
            .filter(|a| state.legal_bids().contains(a))
            .unwrap_or(BidAction::Pass);
        Ok(action)
    }

    fn choose_exchange(&self, state: &CurrentRoundInfo) -> Result<Vec<Card>, AiError> {
        if state.hand.len() < RETURN_COUNT {
            return Err(AiError::InvalidMove(format!(
                "hand has {} cards, need {RETURN_COUNT}",
                state.hand.len()
            )));
        }
        let mut ranked = state.hand.clone();
        ranked.sort_by_key(|&c| (points(c) + u16::from(power(c)), c));
        ranked.truncate(RETURN_COUNT);
        Ok(ranked)
    }

    fn choose_trump(&self, state: &CurrentRoundInfo) -> Result<Suit, AiError> {
        Ok(longest_suit(&state.hand))
    }

    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError> {
        let legal = state.legal_plays();
        let pick = if state.am_bid_winner() {
            legal.iter().copied().max_by_key(|&c| (power(c), std::cmp::Reverse(c)))
        } else if state.lead_suit().is_some() {
            legal
                .iter()
                .copied()
                .max_by_key(|&c| (points(c), std::cmp::Reverse(c)))
        } else {
            legal.iter().copied().min_by_key(|&c| (power(c), c))
        };
        pick.ok_or_else(|| AiError::InvalidMove("no legal plays available".into()))
    }
}

/// Suit with the most cards; ties go to the earlier suit in
/// Hearts, Diamonds, Spades, Clubs order.
pub fn longest_suit(hand: &[Card]) -> Suit {
    let mut best = Suit::Hearts;
    let mut best_count = 0;
    for suit in Suit::ALL {
        let n = count_suit(hand, suit);
        if n > best_count {
            best = suit;
            best_count = n;
        }
    }
    best
}
