//! Random AI player - makes uniformly random legal moves.
//!
//! Useful as a baseline opponent and for fuzzing the engine through the
//! simulator. Seeded players are fully deterministic.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::bidding::BidAction;
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::rules::RETURN_COUNT;
use crate::domain::{Card, Suit};

pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> Option<T>, what: &str) -> Result<T, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        f(&mut rng).ok_or_else(|| AiError::InvalidMove(format!("no legal {what} available")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_bid(&self, state: &CurrentRoundInfo) -> Result<BidAction, AiError> {
        let legal = state.legal_bids();
        self.with_rng(|rng| legal.choose(rng).copied(), "bids")
    }

    fn choose_exchange(&self, state: &CurrentRoundInfo) -> Result<Vec<Card>, AiError> {
        if state.hand.len() < RETURN_COUNT {
            return Err(AiError::InvalidMove(format!(
                "hand has {} cards, need {RETURN_COUNT}",
                state.hand.len()
            )));
        }
        self.with_rng(
            |rng| {
                Some(
                    state
                        .hand
                        .choose_multiple(rng, RETURN_COUNT)
                        .copied()
                        .collect(),
                )
            },
            "exchange",
        )
    }

    fn choose_trump(&self, state: &CurrentRoundInfo) -> Result<Suit, AiError> {
        let options = state.legal_trumps();
        self.with_rng(|rng| options.choose(rng).copied(), "trumps")
    }

    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError> {
        let legal = state.legal_plays();
        self.with_rng(|rng| legal.choose(rng).copied(), "plays")
    }
}
