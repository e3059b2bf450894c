//! Events the engine emits for collaborators (relays, UIs, recorders).

use serde::{Deserialize, Serialize};

use crate::domain::bidding::BidAction;
use crate::domain::scoring::{GameOutcome, RoundSettlement, Standing};
use crate::domain::state::{Phase, Seat, SeatKind};
use crate::domain::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInfo {
    pub seat: Seat,
    pub name: String,
    pub kind: SeatKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    GameStarted {
        seats: Vec<SeatInfo>,
        dealer: Seat,
    },
    /// A deal was voided because `seat` held fewer than 12 points.
    RedealRequired {
        round_no: u16,
        dealer: Seat,
        attempt: u32,
        seat: Seat,
        hand_points: u16,
    },
    RoundDealt {
        round_no: u16,
        dealer: Seat,
        attempt: u32,
    },
    BidAccepted {
        seat: Seat,
        action: BidAction,
        current_bid: u16,
    },
    BiddingClosed {
        winner: Seat,
        bid: u16,
        walkover: bool,
    },
    /// The four stock cards moved to the bid winner.
    StockTaken {
        seat: Seat,
    },
    /// Three cards went out, one to each listed seat in order. Which card went
    /// where is only visible in the receiving seats' hands.
    ExchangeApplied {
        winner: Seat,
        recipients: Vec<Seat>,
    },
    TrumpSet {
        seat: Seat,
        trump: Suit,
    },
    CardAccepted {
        seat: Seat,
        card: Card,
        trick_no: u8,
    },
    TrickResolved {
        trick_no: u8,
        winner: Seat,
        points: u16,
    },
    RoundEnded(RoundSettlement),
    GameEnded {
        outcome: GameOutcome,
        standings: Vec<Standing>,
    },
    RoundAborted {
        round_no: u16,
        dealer: Seat,
    },
    /// An automated seat failed to produce an accepted move. Play stays on
    /// that seat until the round is aborted.
    AiFailed {
        seat: Seat,
        code: String,
        detail: String,
    },
    /// Edge-triggered: the turn became a specific seat.
    TurnBecame {
        seat: Seat,
        phase: Phase,
    },
}

/// The slice of state that edge-triggered events are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnView {
    pub phase: Phase,
    pub turn: Option<Seat>,
}

/// Derive edge-triggered events from before/after views.
///
/// A turn event fires when the acting seat changes or when the same seat
/// starts acting in a new phase (e.g. the bid winner moving from exchange to
/// trump selection).
pub fn derive_game_transitions(before: &TurnView, after: &TurnView) -> Vec<GameEvent> {
    let mut transitions = Vec::new();
    if let Some(seat) = after.turn {
        if before.turn != Some(seat) || before.phase != after.phase {
            transitions.push(GameEvent::TurnBecame {
                seat,
                phase: after.phase,
            });
        }
    }
    transitions
}
