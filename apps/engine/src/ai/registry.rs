//! Registered automated players.
//!
//! To add one: implement `AiPlayer`, then add an `AiFactory` entry with a
//! stable `name` and `version`. Same seed must give the same behavior.

use crate::ai::{AiPlayer, HousePlayer, RandomPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: HousePlayer::NAME,
        version: HousePlayer::VERSION,
        make: make_house,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_house(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(HousePlayer::new(seed))
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(seed))
}
