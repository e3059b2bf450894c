//! Game flow orchestration: drives the pure domain through deal, bidding,
//! exchange, trump, tricks and settlement, and reports what happened as
//! [`GameEvent`]s.
//!
//! `GameFlow` is synchronous and owns its [`GameState`] outright. Hosting,
//! pacing and fan-out belong to the table actor.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;

#[cfg(test)]
mod tests_game_flow;

pub use ai_coordinator::{ActionType, SeatAis};
pub use player_actions::PlayerAction;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::domain::game_transition::{derive_game_transitions, TurnView};
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::rules::PLAYERS;
use crate::domain::seed_derivation::{derive_u64_seed, SeedPurpose};
use crate::domain::snapshot::{self, GameSnapshot, SeatView};
use crate::domain::state::{check_card_conservation, validate_seat, PlayerState};
use crate::domain::{GameEvent, GameState, Phase, Seat, SeatKind};
use crate::error::AppError;

/// Who sits where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatConfig {
    pub name: String,
    pub kind: SeatKind,
}

impl SeatConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SeatKind::Human,
        }
    }

    pub fn ai(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SeatKind::Ai,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowOptions {
    /// Dealer for round 1; rotates clockwise afterwards.
    pub starting_dealer: Seat,
    /// Deal attempts allowed per round before the flow gives up.
    pub max_redeals: u32,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl FlowOptions {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            starting_dealer: 0,
            max_redeals: config.max_redeals,
        }
    }
}

/// One authoritative game.
#[derive(Debug, Clone)]
pub struct GameFlow {
    state: GameState,
    game_seed: [u8; 32],
    /// Deal attempt within the current round; feeds the per-attempt RNG streams.
    attempt: u32,
    options: FlowOptions,
}

impl GameFlow {
    pub fn new(
        seats: [SeatConfig; PLAYERS],
        game_seed: [u8; 32],
        options: FlowOptions,
    ) -> Result<Self, AppError> {
        validate_seat(options.starting_dealer)?;
        if options.max_redeals == 0 {
            return Err(AppError::config("max_redeals must be at least 1"));
        }
        let players = seats.map(|s| PlayerState::new(s.name, s.kind));
        Ok(Self {
            state: GameState::new(players),
            game_seed,
            attempt: 0,
            options,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::GameOver
    }

    pub fn game_seed(&self) -> &[u8; 32] {
        &self.game_seed
    }

    /// Seed for the automated player at `seat`; stable for the whole game.
    pub fn ai_seed(&self, seat: Seat) -> u64 {
        derive_u64_seed(&self.game_seed, 0, SeedPurpose::Ai(seat))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::snapshot(&self.state)
    }

    pub fn seat_view(&self, seat: Seat) -> Result<SeatView, AppError> {
        validate_seat(seat)?;
        Ok(snapshot::seat_view(&self.state, seat))
    }

    pub fn round_info(&self, seat: Seat) -> Result<CurrentRoundInfo, AppError> {
        validate_seat(seat)?;
        Ok(CurrentRoundInfo::for_seat(&self.state, seat))
    }

    fn turn_view(&self) -> TurnView {
        TurnView {
            phase: self.state.phase,
            turn: self.state.turn,
        }
    }

    /// Append edge-triggered turn events and verify no card went missing.
    fn finish_action(
        &self,
        before: &TurnView,
        mut events: Vec<GameEvent>,
    ) -> Result<Vec<GameEvent>, AppError> {
        if matches!(
            self.state.phase,
            Phase::Bidding | Phase::Exchange | Phase::TrumpSelect | Phase::Trick { .. }
        ) {
            check_card_conservation(&self.state)?;
        }
        events.extend(derive_game_transitions(before, &self.turn_view()));
        Ok(events)
    }
}
