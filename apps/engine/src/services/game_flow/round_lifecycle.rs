use tracing::{info, warn};

use super::GameFlow;
use crate::domain::dealing::{deal_round, DealOutcome};
use crate::domain::game_transition::SeatInfo;
use crate::domain::scoring::{apply_round_scoring, final_standings, game_outcome};
use crate::domain::seed_derivation::{round_rng, SeedPurpose};
use crate::domain::state::{next_player, require_dealer};
use crate::domain::{GameEvent, Phase};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlow {
    /// Seat everyone and deal round 1.
    pub fn start(&mut self) -> Result<Vec<GameEvent>, AppError> {
        if self.state.phase != Phase::Init {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "game already started",
            )
            .into());
        }
        let before = self.turn_view();
        let dealer = self.options.starting_dealer;
        let seats = self
            .state
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| SeatInfo {
                seat: i as u8,
                name: p.name.clone(),
                kind: p.kind,
            })
            .collect();
        info!(dealer, "game started");

        let mut events = vec![GameEvent::GameStarted { seats, dealer }];
        self.attempt = 0;
        events.extend(self.deal(1, dealer)?);
        self.finish_action(&before, events)
    }

    /// Throw the current round away and redeal with the same dealer.
    /// Cumulative scores and non-bid accumulators are untouched.
    pub fn abort_round(&mut self) -> Result<Vec<GameEvent>, AppError> {
        if !matches!(
            self.state.phase,
            Phase::Bidding | Phase::Exchange | Phase::TrumpSelect | Phase::Trick { .. }
        ) {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "no round in progress",
            )
            .into());
        }
        let before = self.turn_view();
        let dealer = require_dealer(&self.state, "abort_round")?;
        let round_no = self.state.round_no;
        warn!(round_no, dealer, "round aborted");

        self.state.discard_round();
        let mut events = vec![GameEvent::RoundAborted { round_no, dealer }];
        // Keep counting so the redeal draws a fresh shuffle.
        self.attempt += 1;
        events.extend(self.deal(round_no, dealer)?);
        self.finish_action(&before, events)
    }

    /// Shuffle and deal until every hand holds at least 12 points.
    fn deal(&mut self, round_no: u16, dealer: u8) -> Result<Vec<GameEvent>, AppError> {
        let mut events = Vec::new();
        for _ in 0..self.options.max_redeals {
            let attempt = self.attempt;
            let mut rng = round_rng(&self.game_seed, round_no, attempt, SeedPurpose::Deal);
            match deal_round(&mut rng) {
                DealOutcome::Dealt(deal) => {
                    self.state.begin_round(round_no, dealer, deal);
                    info!(round_no, dealer, attempt, "round dealt");
                    events.push(GameEvent::RoundDealt {
                        round_no,
                        dealer,
                        attempt,
                    });
                    return Ok(events);
                }
                DealOutcome::RedealRequired { seat, hand_points } => {
                    info!(round_no, seat, hand_points, attempt, "weak hand, redealing");
                    events.push(GameEvent::RedealRequired {
                        round_no,
                        dealer,
                        attempt,
                        seat,
                        hand_points,
                    });
                    self.attempt += 1;
                }
            }
        }
        Err(DomainError::invariant(format!(
            "round {round_no}: no playable deal after {} attempts",
            self.options.max_redeals
        ))
        .into())
    }

    /// Settle the finished round, then end the game or deal the next round.
    pub(super) fn settle_round(&mut self) -> Result<Vec<GameEvent>, AppError> {
        let settlement = apply_round_scoring(&mut self.state)?;
        let mut events = vec![GameEvent::RoundEnded(settlement)];

        if let Some(outcome) = game_outcome(&self.state.scores()) {
            let standings = final_standings(&self.state);
            info!(?outcome, round_no = self.state.round_no, "game over");
            self.state.phase = Phase::GameOver;
            self.state.turn = None;
            events.push(GameEvent::GameEnded {
                outcome,
                standings,
            });
            return Ok(events);
        }

        let dealer = next_player(require_dealer(&self.state, "settle_round")?);
        let round_no = self.state.round_no + 1;
        self.attempt = 0;
        events.extend(self.deal(round_no, dealer)?);
        Ok(events)
    }
}
