use tracing::debug;

use super::{GameFlow, PlayerAction};
use crate::ai::AiPlayer;
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::rules::PLAYERS;
use crate::domain::{GameEvent, Phase, Seat};
use crate::error::AppError;

/// Type of action needed from a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionType {
    Bid,
    Exchange,
    Trump,
    Play,
}

/// Automated players by seat; `None` for seats driven from outside.
pub type SeatAis = [Option<Box<dyn AiPlayer>>; PLAYERS];

impl GameFlow {
    /// Whose move it is and what kind of move, or None between/after games.
    pub fn pending_action(&self) -> Option<(Seat, ActionType)> {
        let seat = self.state.turn?;
        let kind = match self.state.phase {
            Phase::Bidding => ActionType::Bid,
            Phase::Exchange => ActionType::Exchange,
            Phase::TrumpSelect => ActionType::Trump,
            Phase::Trick { .. } => ActionType::Play,
            _ => return None,
        };
        Some((seat, kind))
    }

    /// Ask `ai` for its move as `seat`.
    pub fn ai_decision(
        &self,
        ai: &dyn AiPlayer,
        seat: Seat,
        kind: ActionType,
    ) -> Result<PlayerAction, AppError> {
        let info = CurrentRoundInfo::for_seat(&self.state, seat);
        let action = match kind {
            ActionType::Bid => PlayerAction::Bid(ai.choose_bid(&info)?),
            ActionType::Exchange => PlayerAction::Exchange(ai.choose_exchange(&info)?),
            ActionType::Trump => PlayerAction::Trump(ai.choose_trump(&info)?),
            ActionType::Play => PlayerAction::Play(ai.choose_play(&info)?),
        };
        Ok(action)
    }

    /// Take one automated move if the seat to act has an AI.
    ///
    /// Returns None when nobody is to act or the seat is external.
    pub fn step_ai(&mut self, ais: &SeatAis) -> Result<Option<Vec<GameEvent>>, AppError> {
        let Some((seat, kind)) = self.pending_action() else {
            return Ok(None);
        };
        let Some(ai) = ais[seat as usize].as_deref() else {
            return Ok(None);
        };
        let action = self.ai_decision(ai, seat, kind)?;
        debug!(seat, ?action, "ai action");
        self.apply(seat, action).map(Some)
    }

    /// Keep taking automated moves until an external seat must act or the
    /// game ends. An AI that submits a rejected move aborts the run.
    pub fn run_ais(&mut self, ais: &SeatAis) -> Result<Vec<GameEvent>, AppError> {
        let mut events = Vec::new();
        while let Some(step) = self.step_ai(ais)? {
            events.extend(step);
        }
        Ok(events)
    }
}
