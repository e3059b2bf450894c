//! Round settlement and game-end detection.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::rules::{LOSE_SCORE, NON_BIDDER_CAP, PLAYERS, WIN_SCORE};
use crate::domain::state::{require_bid_winner, require_trump, GameState, Phase, Seat};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSettlement {
    pub seat: Seat,
    pub round_score: u16,
    /// Change applied to the cumulative score.
    pub delta: i32,
    pub score: i32,
    pub accumulated_non_bid_points: u16,
}

/// Everything needed to record a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSettlement {
    pub round_no: u16,
    pub bid_winner: Seat,
    pub bid: u16,
    pub trump: Suit,
    pub walkover: bool,
    pub bid_made: bool,
    pub seats: [SeatSettlement; PLAYERS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameOutcome {
    Won { seat: Seat, score: i32 },
    Lost { seat: Seat, score: i32 },
}

impl GameOutcome {
    pub fn seat(&self) -> Seat {
        match self {
            GameOutcome::Won { seat, .. } | GameOutcome::Lost { seat, .. } => *seat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based.
    pub position: u8,
    pub seat: Seat,
    pub name: String,
    pub score: i32,
}

/// Credit a non-bidder may still bank this round.
pub fn non_bidder_credit(round_score: u16, accumulated: u16) -> u16 {
    round_score.min(NON_BIDDER_CAP.saturating_sub(accumulated))
}

/// Settle the round and transition to Complete.
///
/// Bid winner: made → `+round_score`, failed → `-bid`; the accumulator resets
/// either way. Everyone else banks up to the 50-point cap.
pub fn apply_round_scoring(state: &mut GameState) -> Result<RoundSettlement, DomainError> {
    if state.phase != Phase::Scoring {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "round is not ready for settlement",
        ));
    }
    let bid_winner = require_bid_winner(state, "apply_round_scoring")?;
    let trump = require_trump(state, "apply_round_scoring")?;
    let bid = state.round.bidding.current_bid;
    let walkover = state.round.bidding.walkover;

    let winner_round = state.players[bid_winner as usize].round_score;
    let bid_made = winner_round >= bid;

    let seats = [0u8, 1, 2, 3].map(|seat| {
        let player = &mut state.players[seat as usize];
        let delta = if seat == bid_winner {
            player.accumulated_non_bid_points = 0;
            if bid_made {
                i32::from(player.round_score)
            } else {
                -i32::from(bid)
            }
        } else {
            let credit =
                non_bidder_credit(player.round_score, player.accumulated_non_bid_points);
            player.accumulated_non_bid_points += credit;
            i32::from(credit)
        };
        player.score += delta;
        SeatSettlement {
            seat,
            round_score: player.round_score,
            delta,
            score: player.score,
            accumulated_non_bid_points: player.accumulated_non_bid_points,
        }
    });

    info!(
        round_no = state.round_no,
        bid_winner,
        bid,
        bid_made,
        points = winner_round,
        "round settled"
    );

    state.phase = Phase::Complete;
    state.turn = None;
    Ok(RoundSettlement {
        round_no: state.round_no,
        bid_winner,
        bid,
        trump,
        walkover,
        bid_made,
        seats,
    })
}

/// Winner-first: the lowest-indexed seat at or above +302 wins; only if none
/// did, the lowest-indexed seat at or below -302 loses.
pub fn game_outcome(scores: &[i32; PLAYERS]) -> Option<GameOutcome> {
    let mut seats = (0..PLAYERS as u8).map(|s| (s, scores[s as usize]));

    if let Some((seat, score)) = seats.clone().find(|&(_, score)| score >= WIN_SCORE) {
        return Some(GameOutcome::Won { seat, score });
    }

    seats
        .find(|&(_, score)| score <= LOSE_SCORE)
        .map(|(seat, score)| GameOutcome::Lost { seat, score })
}

/// Seats by score descending, ties by seat ascending.
pub fn final_standings(state: &GameState) -> Vec<Standing> {
    let mut order: Vec<Seat> = (0..PLAYERS as u8).collect();
    order.sort_by_key(|&s| (std::cmp::Reverse(state.players[s as usize].score), s));
    order
        .into_iter()
        .enumerate()
        .map(|(i, seat)| Standing {
            position: (i + 1) as u8,
            seat,
            name: state.players[seat as usize].name.clone(),
            score: state.players[seat as usize].score,
        })
        .collect()
}
