//! Automated seats.
//!
//! - [`AiPlayer`]: the decision trait
//! - [`HousePlayer`]: the default table AI
//! - [`RandomPlayer`]: uniform random legal moves (seedable)
//! - [`registry`]: name → factory lookup

pub mod config;
mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use config::AiConfig;
pub use heuristic::{longest_suit, HousePlayer};
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player from a registered name and optional JSON config.
///
/// Returns None if the name is unknown.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let factory = registry::by_name(ai_type)?;
    let config = AiConfig::from_json(config);
    Some((factory.make)(config.seed()))
}
