//! In-memory game runner for evaluating AI policies.
//!
//! Drives a [`GameFlow`] with one automated player per seat and keeps the
//! parts of the event stream the metrics need.

use engine::ai::create_ai;
use engine::domain::{GameEvent, GameOutcome, RoundSettlement, Standing};
use engine::services::game_flow::SeatAis;
use engine::{AppError, FlowOptions, GameFlow, SeatConfig};
use tracing::debug;

/// Rounds after which a game is abandoned; real games end long before.
const MAX_ROUNDS: u16 = 1000;

#[derive(Debug, Clone)]
pub struct GameResult {
    pub final_scores: [i32; 4],
    pub outcome: GameOutcome,
    pub standings: Vec<Standing>,
    pub rounds: Vec<RoundSettlement>,
    /// Deals thrown back for a sub-12-point hand.
    pub redeals: u32,
}

pub struct Simulator {
    game_seed: [u8; 32],
    game_id: u32,
    options: FlowOptions,
}

impl Simulator {
    pub fn new(game_seed: [u8; 32], game_id: u32) -> Self {
        Self {
            game_seed,
            game_id,
            options: FlowOptions::default(),
        }
    }

    pub fn with_starting_dealer(mut self, dealer: u8) -> Self {
        self.options.starting_dealer = dealer;
        self
    }

    /// Play one game to the end. AI seeds derive from the game seed, so a
    /// seed replays the same game.
    pub fn simulate_game(&self, ai_types: &[String; 4]) -> Result<GameResult, AppError> {
        let seats = [0, 1, 2, 3].map(|seat| SeatConfig::ai(format!("{}-{seat}", ai_types[seat])));
        let mut flow = GameFlow::new(seats, self.game_seed, self.options)?;

        let mut ais: SeatAis = Default::default();
        for (seat, name) in ai_types.iter().enumerate() {
            let config = serde_json::json!({ "seed": flow.ai_seed(seat as u8) });
            let ai = create_ai(name, Some(&config))
                .ok_or_else(|| AppError::config(format!("unknown AI type {name:?}")))?;
            ais[seat] = Some(ai);
        }

        let mut collector = Collector::default();
        collector.absorb(flow.start()?);
        while !flow.is_over() {
            if flow.state().round_no > MAX_ROUNDS {
                return Err(AppError::internal(format!(
                    "game {} still running after {MAX_ROUNDS} rounds",
                    self.game_id
                )));
            }
            match flow.step_ai(&ais)? {
                Some(events) => collector.absorb(events),
                None => return Err(AppError::internal("no automated seat to act")),
            }
        }

        let (outcome, standings) = collector
            .ended
            .ok_or_else(|| AppError::internal("game over without a result"))?;
        debug!(game_id = self.game_id, rounds = collector.rounds.len(), "game simulated");

        Ok(GameResult {
            final_scores: flow.state().scores(),
            outcome,
            standings,
            rounds: collector.rounds,
            redeals: collector.redeals,
        })
    }
}

#[derive(Default)]
struct Collector {
    rounds: Vec<RoundSettlement>,
    redeals: u32,
    ended: Option<(GameOutcome, Vec<Standing>)>,
}

impl Collector {
    fn absorb(&mut self, events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::RoundEnded(settlement) => self.rounds.push(settlement),
                GameEvent::RedealRequired { .. } => self.redeals += 1,
                GameEvent::GameEnded { outcome, standings } => {
                    self.ended = Some((outcome, standings))
                }
                _ => {}
            }
        }
    }
}
