use serde::{Deserialize, Serialize};

use crate::domain::bidding::BidAction;
use crate::domain::dealing::Deal;
use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Game created but no round dealt yet.
    Init,
    /// Seats bid or pass in clockwise order from the left of the dealer.
    Bidding,
    /// Bid winner holds the stock and must return three cards.
    Exchange,
    /// Bid winner picks trump.
    TrumpSelect,
    /// Playing tricks within the round; `trick_no` is 1-based.
    Trick { trick_no: u8 },
    /// All hands empty, round awaiting settlement.
    Scoring,
    /// Round settled.
    Complete,
    /// A seat crossed +302 or -302.
    GameOver,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatKind {
    Human,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub kind: SeatKind,
    /// Cumulative across rounds.
    pub score: i32,
    /// Trick points taken this round.
    pub round_score: u16,
    /// Points banked as a non-bidder since this seat last won a bid. Capped at 50.
    pub accumulated_non_bid_points: u16,
}

impl PlayerState {
    pub fn new(name: impl Into<String>, kind: SeatKind) -> Self {
        Self {
            name: name.into(),
            kind,
            score: 0,
            round_score: 0,
            accumulated_non_bid_points: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiddingState {
    /// 0 until someone bids.
    pub current_bid: u16,
    /// Seat holding `current_bid`, or the walkover seat once closed.
    pub bid_winner: Option<Seat>,
    pub last_action: [Option<BidAction>; PLAYERS],
    pub consecutive_passes: u8,
    /// Total bid/pass turns taken this round.
    pub turns_taken: u16,
    pub walkover: bool,
    pub closed: bool,
}

/// Per-round state that is relevant from the deal through the last trick.
#[derive(Debug, Clone, Default)]
pub struct RoundState {
    /// Face-down cards until the bid winner takes them.
    pub stock: Vec<Card>,
    pub bidding: BiddingState,
    /// Trump for this round (set by the bid winner after the exchange).
    pub trump: Option<Suit>,
    /// Ordered plays for the current trick (who, card).
    pub trick_plays: Vec<(Seat, Card)>,
    /// Lead suit for the current trick.
    pub trick_lead: Option<Suit>,
    pub tricks_won: [u8; PLAYERS],
    /// Last completed trick, for display.
    pub last_trick: Option<Vec<(Seat, Card)>>,
}

impl RoundState {
    pub fn empty() -> Self {
        Self {
            trick_plays: Vec::with_capacity(PLAYERS),
            ..Self::default()
        }
    }

    /// Number of tricks already resolved this round.
    pub fn tricks_played(&self) -> u8 {
        self.tricks_won.iter().sum()
    }
}

/// Entire game/round container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    /// 1-based; 0 before the first deal.
    pub round_no: u16,
    /// Dealer seat for the current round.
    pub dealer: Option<Seat>,
    /// Player whose turn it is to act.
    /// - Some(seat) when someone is expected to act
    /// - None when nobody can act (Init, Scoring, Complete, GameOver)
    pub turn: Option<Seat>,
    /// Player who leads the current trick (only meaningful in Trick phase).
    pub leader: Option<Seat>,
    /// Current trick number (1-based, only meaningful in Trick phase).
    pub trick_no: Option<u8>,
    pub hands: [Vec<Card>; PLAYERS],
    pub players: [PlayerState; PLAYERS],
    pub round: RoundState,
}

impl GameState {
    pub fn new(players: [PlayerState; PLAYERS]) -> Self {
        Self {
            phase: Phase::Init,
            round_no: 0,
            dealer: None,
            turn: None,
            leader: None,
            trick_no: None,
            hands: Default::default(),
            players,
            round: RoundState::empty(),
        }
    }

    /// Install a fresh deal and open bidding at the left of the dealer.
    /// Cumulative scores and non-bid accumulators carry over untouched.
    pub fn begin_round(&mut self, round_no: u16, dealer: Seat, deal: Deal) {
        self.round_no = round_no;
        self.dealer = Some(dealer);
        self.hands = deal.hands;
        self.round = RoundState::empty();
        self.round.stock = deal.stock;
        for p in &mut self.players {
            p.round_score = 0;
        }
        self.phase = Phase::Bidding;
        self.turn = Some(round_start_seat(dealer));
        self.leader = None;
        self.trick_no = None;
    }

    /// Drop all in-progress round state. Cumulative scores are untouched.
    pub fn discard_round(&mut self) {
        self.hands = Default::default();
        self.round = RoundState::empty();
        for p in &mut self.players {
            p.round_score = 0;
        }
        self.turn = None;
        self.leader = None;
        self.trick_no = None;
    }

    pub fn scores(&self) -> [i32; PLAYERS] {
        [0, 1, 2, 3].map(|i| self.players[i].score)
    }

    pub fn round_scores(&self) -> [u16; PLAYERS] {
        [0, 1, 2, 3].map(|i| self.players[i].round_score)
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: Seat) -> Seat {
    seat_offset(p, 1)
}

/// Round-start seat (player to the left of the dealer). Opens bidding and
/// leads the first trick.
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_player(dealer)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}

pub fn validate_seat(seat: Seat) -> Result<Seat, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("seat {seat} is not 0..=3"),
        ))
    }
}

pub fn require_dealer(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .dealer
        .ok_or_else(|| DomainError::invariant(format!("dealer must be set ({ctx})")))
}

pub fn require_turn(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::invariant(format!("turn must be set ({ctx})")))
}

pub fn require_trick_no(state: &GameState, ctx: &'static str) -> Result<u8, DomainError> {
    state
        .trick_no
        .ok_or_else(|| DomainError::invariant(format!("trick_no must be set ({ctx})")))
}

pub fn require_bid_winner(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .round
        .bidding
        .bid_winner
        .ok_or_else(|| DomainError::invariant(format!("bid winner must be set ({ctx})")))
}

pub fn require_trump(state: &GameState, ctx: &'static str) -> Result<Suit, DomainError> {
    state
        .round
        .trump
        .ok_or_else(|| DomainError::invariant(format!("trump must be set ({ctx})")))
}

/// Card conservation: hands + stock + cards on the table account for every
/// card not yet swept into a completed trick, with no card held twice.
pub fn check_card_conservation(state: &GameState) -> Result<(), DomainError> {
    let in_play: Vec<Card> = state
        .hands
        .iter()
        .flatten()
        .chain(state.round.stock.iter())
        .chain(state.round.trick_plays.iter().map(|(_, c)| c))
        .copied()
        .collect();
    let expected = DECK_SIZE - PLAYERS * state.round.tricks_played() as usize;
    if in_play.len() != expected {
        return Err(DomainError::invariant(format!(
            "card count mismatch: {} in play, expected {expected}",
            in_play.len()
        )));
    }
    let mut sorted = in_play;
    sorted.sort();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return Err(DomainError::invariant("a card is held twice"));
    }
    Ok(())
}
