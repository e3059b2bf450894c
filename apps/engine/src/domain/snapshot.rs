//! Public snapshot API for observing game state without exposing hidden cards.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{legal_bids, BidAction};
use crate::domain::rules::{min_bid_above, MAX_BID, PLAYERS};
use crate::domain::state::{GameState, Phase, Seat, SeatKind};
use crate::domain::tricks::legal_moves;
use crate::domain::{Card, Suit};

/// Public info about a single seat in the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatPublic {
    pub seat: Seat,
    pub name: String,
    pub kind: SeatKind,
    pub score: i32,
    pub round_score: u16,
    pub accumulated_non_bid_points: u16,
    pub hand_size: usize,
}

/// Game-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    pub round_no: u16,
    pub dealer: Option<Seat>,
    pub turn: Option<Seat>,
    pub seating: Vec<SeatPublic>,
}

/// Top-level snapshot combining header and phase-specific data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub phase: PhaseSnapshot,
}

/// Adjacently tagged union of phase-specific snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseSnapshot {
    Init,
    Bidding(BiddingSnapshot),
    Exchange(ExchangeSnapshot),
    TrumpSelect(TrumpSelectSnapshot),
    Trick(TrickSnapshot),
    Scoring(RoundPublic),
    Complete(RoundPublic),
    GameOver(RoundPublic),
}

/// Shared public round facts (no private hands).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundPublic {
    pub current_bid: u16,
    pub bid_winner: Option<Seat>,
    pub walkover: bool,
    pub trump: Option<Suit>,
    pub tricks_won: [u8; PLAYERS],
    pub stock_size: usize,
    /// Last completed trick, for display.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BiddingSnapshot {
    pub round: RoundPublic,
    pub to_act: Option<Seat>,
    pub last_actions: [Option<BidAction>; PLAYERS],
    pub consecutive_passes: u8,
    pub turns_taken: u16,
    /// Lowest bid that would be accepted now; None at the top of the grid.
    pub min_bid: Option<u16>,
    pub max_bid: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExchangeSnapshot {
    pub round: RoundPublic,
    pub to_act: Option<Seat>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrumpSelectSnapshot {
    pub round: RoundPublic,
    pub to_act: Option<Seat>,
    pub allowed_trumps: Vec<Suit>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrickSnapshot {
    pub round: RoundPublic,
    pub trick_no: u8,
    pub leader: Option<Seat>,
    pub current_trick: Vec<(Seat, Card)>,
    pub to_act: Option<Seat>,
}

/// What one seat may see: the public snapshot plus its own hand and options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: Seat,
    pub snapshot: GameSnapshot,
    pub hand: Vec<Card>,
    pub legal_bids: Vec<BidAction>,
    pub playable: Vec<Card>,
}

/// Entry point: produce a snapshot of the current game state.
/// Never panics; produces safe defaults for inconsistent states.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let seating = state
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| SeatPublic {
            seat: i as Seat,
            name: p.name.clone(),
            kind: p.kind,
            score: p.score,
            round_score: p.round_score,
            accumulated_non_bid_points: p.accumulated_non_bid_points,
            hand_size: state.hands[i].len(),
        })
        .collect();
    let game = GameHeader {
        round_no: state.round_no,
        dealer: state.dealer,
        turn: state.turn,
        seating,
    };

    let round = build_round_public(state);
    let phase = match state.phase {
        Phase::Init => PhaseSnapshot::Init,
        Phase::Bidding => {
            let bidding = &state.round.bidding;
            PhaseSnapshot::Bidding(BiddingSnapshot {
                round,
                to_act: state.turn,
                last_actions: bidding.last_action,
                consecutive_passes: bidding.consecutive_passes,
                turns_taken: bidding.turns_taken,
                min_bid: min_bid_above(bidding.current_bid),
                max_bid: MAX_BID,
            })
        }
        Phase::Exchange => PhaseSnapshot::Exchange(ExchangeSnapshot {
            round,
            to_act: state.turn,
        }),
        Phase::TrumpSelect => PhaseSnapshot::TrumpSelect(TrumpSelectSnapshot {
            round,
            to_act: state.turn,
            allowed_trumps: Suit::ALL.to_vec(),
        }),
        Phase::Trick { trick_no } => PhaseSnapshot::Trick(TrickSnapshot {
            round,
            trick_no,
            leader: state.leader,
            current_trick: state.round.trick_plays.clone(),
            to_act: state.turn,
        }),
        Phase::Scoring => PhaseSnapshot::Scoring(round),
        Phase::Complete => PhaseSnapshot::Complete(round),
        Phase::GameOver => PhaseSnapshot::GameOver(round),
    };

    GameSnapshot { game, phase }
}

/// Snapshot as seen from `seat`. Out-of-range seats get an empty hand.
pub fn seat_view(state: &GameState, seat: Seat) -> SeatView {
    SeatView {
        seat,
        snapshot: snapshot(state),
        hand: state.hands.get(seat as usize).cloned().unwrap_or_default(),
        legal_bids: legal_bids(state, seat),
        playable: if state.turn == Some(seat) {
            legal_moves(state, seat)
        } else {
            Vec::new()
        },
    }
}

fn build_round_public(state: &GameState) -> RoundPublic {
    RoundPublic {
        current_bid: state.round.bidding.current_bid,
        bid_winner: state.round.bidding.bid_winner,
        walkover: state.round.bidding.walkover,
        trump: state.round.trump,
        tricks_won: state.round.tricks_won,
        stock_size: state.round.stock.len(),
        last_trick: state.round.last_trick.clone(),
    }
}
