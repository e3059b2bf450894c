//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod exchange;
pub mod player_view;

pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
#[cfg(test)]
pub(crate) mod test_state_helpers;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_domain_dealing;
#[cfg(test)]
mod tests_exchange;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use bidding::{BidAction, BiddingResult};
pub use cards_logic::{card_beats, hand_has_suit, hand_points, points, power};
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_round, Deal, DealOutcome};
pub use game_transition::GameEvent;
pub use player_view::CurrentRoundInfo;
pub use scoring::{GameOutcome, RoundSettlement, Standing};
pub use seed_derivation::{derive_seed, round_rng, SeedPurpose};
pub use state::{GameState, Phase, PlayerState, Seat, SeatKind};
