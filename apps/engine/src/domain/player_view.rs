//! Player view of game state - what information is visible to one seat.
//!
//! [`CurrentRoundInfo`] is the interface between the rules engine and
//! automated players: it carries everything a seat can see at its decision
//! point, plus helpers that answer "what may I do right now" without the
//! caller re-implementing the rules.

use crate::domain::bidding::{legal_bids, BidAction};
use crate::domain::rules::{min_bid_above, PLAYERS};
use crate::domain::state::{GameState, Phase, Seat};
use crate::domain::tricks::legal_moves;
use crate::domain::{Card, Suit};

/// Information visible to a player at a decision point for the current round.
///
/// Built from the authoritative [`GameState`] with [`CurrentRoundInfo::for_seat`].
/// Other seats' hands and the face-down stock are never included.
///
/// ## Helper Methods
///
/// **Always use these** instead of implementing game rules yourself:
///
/// - [`legal_bids()`](Self::legal_bids) - pass plus every bid above the standing one
/// - [`legal_plays()`](Self::legal_plays) - valid cards to play (handles follow-suit rule)
/// - [`legal_trumps()`](Self::legal_trumps) - the four suits
#[derive(Debug, Clone)]
pub struct CurrentRoundInfo {
    /// Your seat position (0-3).
    pub player_seat: Seat,

    pub phase: Phase,

    /// 1-based round number.
    pub round_no: u16,

    pub dealer: Seat,

    /// Your current hand. 9 cards while bidding, 13 for the bid winner during
    /// the exchange, 10 at the start of trick play.
    pub hand: Vec<Card>,

    /// Standing bid, 0 while nobody has bid.
    pub current_bid: u16,

    /// Seat holding the standing bid (or the contract once bidding closed).
    pub bid_winner: Option<Seat>,

    /// Last bid/pass per seat this round.
    pub last_actions: [Option<BidAction>; PLAYERS],

    /// Trump once chosen.
    pub trump: Option<Suit>,

    /// Current trick number (1-10) during trick play.
    pub trick_no: Option<u8>,

    /// Cards played in the current trick so far; the first entry is the lead.
    pub current_trick_plays: Vec<(Seat, Card)>,

    /// Cumulative scores, indexed by seat.
    pub scores: [i32; PLAYERS],

    /// Trick points taken this round, indexed by seat.
    pub round_scores: [u16; PLAYERS],

    pub accumulated_non_bid_points: [u16; PLAYERS],

    /// True when it is this seat's move.
    pub is_my_turn: bool,

    legal_bids: Vec<BidAction>,
    legal_plays: Vec<Card>,
}

impl CurrentRoundInfo {
    pub fn for_seat(state: &GameState, seat: Seat) -> Self {
        let idx = seat as usize;
        Self {
            player_seat: seat,
            phase: state.phase,
            round_no: state.round_no,
            dealer: state.dealer.unwrap_or(0),
            hand: state.hands.get(idx).cloned().unwrap_or_default(),
            current_bid: state.round.bidding.current_bid,
            bid_winner: state.round.bidding.bid_winner,
            last_actions: state.round.bidding.last_action,
            trump: state.round.trump,
            trick_no: state.trick_no,
            current_trick_plays: state.round.trick_plays.clone(),
            scores: state.scores(),
            round_scores: state.round_scores(),
            accumulated_non_bid_points: [0, 1, 2, 3]
                .map(|i| state.players[i].accumulated_non_bid_points),
            is_my_turn: state.turn == Some(seat),
            legal_bids: legal_bids(state, seat),
            legal_plays: if state.turn == Some(seat) {
                legal_moves(state, seat)
            } else {
                Vec::new()
            },
        }
    }

    pub fn legal_bids(&self) -> &[BidAction] {
        &self.legal_bids
    }

    pub fn legal_plays(&self) -> &[Card] {
        &self.legal_plays
    }

    pub fn legal_trumps(&self) -> [Suit; 4] {
        Suit::ALL
    }

    /// Lowest bid that would currently be accepted.
    pub fn min_bid(&self) -> Option<u16> {
        min_bid_above(self.current_bid)
    }

    pub fn nobody_has_bid(&self) -> bool {
        self.current_bid == 0
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.current_trick_plays.first().map(|(_, c)| c.suit)
    }

    pub fn am_bid_winner(&self) -> bool {
        self.bid_winner == Some(self.player_seat)
    }
}
