//! Bidding protocol and trump selection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::exchange::take_stock;
use crate::domain::rules::{bid_grid, is_on_grid, MAX_BID, MIN_BID, PLAYERS, WALKOVER_BID};
use crate::domain::state::{
    next_player, require_bid_winner, require_dealer, require_turn, round_start_seat,
    validate_seat, GameState, Phase, Seat,
};
use crate::domain::Suit;
use crate::errors::domain::{BidRejection, DomainError, TrumpRejection, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidAction {
    Pass,
    Bid(u16),
}

/// How bidding ended for the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BiddingResult {
    pub winner: Seat,
    pub bid: u16,
    /// Every seat passed; the left of the dealer holds the contract at 100.
    pub walkover: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BidPlaced {
    pub seat: Seat,
    pub action: BidAction,
    /// Standing bid after this action (0 while nobody has bid).
    pub current_bid: u16,
    pub closed: Option<BiddingResult>,
}

fn bid_error(reason: BidRejection, detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidBid(reason), detail)
}

/// Check a bid value against the grid and the standing bid.
pub fn validate_bid_value(value: u16, current_bid: u16) -> Result<(), DomainError> {
    if !(MIN_BID..=MAX_BID).contains(&value) {
        return Err(bid_error(
            BidRejection::OutOfRange,
            format!("bid {value} outside {MIN_BID}..={MAX_BID}"),
        ));
    }
    if !is_on_grid(value) {
        return Err(bid_error(
            BidRejection::OffStep,
            format!("bid {value} is not on the 5-point grid"),
        ));
    }
    if value <= current_bid {
        return Err(bid_error(
            BidRejection::NotAboveCurrent,
            format!("bid {value} does not beat {current_bid}"),
        ));
    }
    Ok(())
}

/// Legal actions for `who` right now; empty unless it is their bidding turn.
pub fn legal_bids(state: &GameState, who: Seat) -> Vec<BidAction> {
    if state.phase != Phase::Bidding || state.turn != Some(who) {
        return Vec::new();
    }
    let current = state.round.bidding.current_bid;
    std::iter::once(BidAction::Pass)
        .chain(bid_grid().filter(|&v| v > current).map(BidAction::Bid))
        .collect()
}

/// Apply a bid or pass, closing bidding when the termination rule fires.
pub fn place_bid(
    state: &mut GameState,
    who: Seat,
    action: BidAction,
) -> Result<BidPlaced, DomainError> {
    validate_seat(who)?;
    if state.phase != Phase::Bidding || state.round.bidding.closed {
        return Err(bid_error(
            BidRejection::BiddingClosed,
            "bidding is not open for this round",
        ));
    }
    let turn = require_turn(state, "place_bid")?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("seat {who} bid out of turn; seat {turn} is to act"),
        ));
    }

    let bidding = &mut state.round.bidding;
    match action {
        BidAction::Bid(value) => {
            validate_bid_value(value, bidding.current_bid)?;
            bidding.current_bid = value;
            bidding.bid_winner = Some(who);
            bidding.consecutive_passes = 0;
        }
        BidAction::Pass => {
            bidding.consecutive_passes = bidding.consecutive_passes.saturating_add(1);
        }
    }
    bidding.last_action[who as usize] = Some(action);
    bidding.turns_taken = bidding.turns_taken.saturating_add(1);
    debug!(seat = who, ?action, current_bid = bidding.current_bid, "bid placed");

    let (standing, passes) = (bidding.bid_winner, bidding.consecutive_passes as usize);
    let closed = match standing {
        Some(winner) if passes >= PLAYERS - 1 => Some(BiddingResult {
            winner,
            bid: state.round.bidding.current_bid,
            walkover: false,
        }),
        None if passes >= PLAYERS => {
            let dealer = require_dealer(state, "place_bid walkover")?;
            Some(BiddingResult {
                winner: round_start_seat(dealer),
                bid: WALKOVER_BID,
                walkover: true,
            })
        }
        _ => None,
    };

    let current_bid = match closed {
        Some(result) => {
            close_bidding(state, result)?;
            result.bid
        }
        None => {
            state.turn = Some(next_player(who));
            state.round.bidding.current_bid
        }
    };

    Ok(BidPlaced {
        seat: who,
        action,
        current_bid,
        closed,
    })
}

fn close_bidding(state: &mut GameState, result: BiddingResult) -> Result<(), DomainError> {
    let bidding = &mut state.round.bidding;
    bidding.current_bid = result.bid;
    bidding.bid_winner = Some(result.winner);
    bidding.walkover = result.walkover;
    bidding.closed = true;
    state.phase = Phase::Exchange;
    state.turn = Some(result.winner);
    take_stock(state)
}

/// Bid winner names trump; trick play opens at the left of the dealer.
pub fn set_trump(state: &mut GameState, who: Seat, trump: Suit) -> Result<(), DomainError> {
    validate_seat(who)?;
    if state.phase != Phase::TrumpSelect {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "trump can only be chosen after the exchange",
        ));
    }
    let winner = require_bid_winner(state, "set_trump")?;
    if who != winner {
        return Err(DomainError::validation(
            ValidationKind::InvalidTrumpChoice(TrumpRejection::WrongSeat),
            format!("seat {who} is not the bid winner"),
        ));
    }
    let dealer = require_dealer(state, "set_trump")?;
    let leader = round_start_seat(dealer);

    state.round.trump = Some(trump);
    state.phase = Phase::Trick { trick_no: 1 };
    state.trick_no = Some(1);
    state.leader = Some(leader);
    state.turn = Some(leader);
    Ok(())
}
