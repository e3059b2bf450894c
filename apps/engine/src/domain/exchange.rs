//! Stock pickup and the three-card hand-back.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::rules::{PLAYERS, RETURN_COUNT};
use crate::domain::state::{nth_from, require_bid_winner, validate_seat, GameState, Phase, Seat};
use crate::domain::Card;
use crate::errors::domain::{DomainError, ExchangeRejection, ValidationKind};

/// Where each returned card landed, clockwise from the seat after the winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeApplied {
    pub winner: Seat,
    pub deliveries: [(Seat, Card); RETURN_COUNT],
}

fn exchange_error(reason: ExchangeRejection, detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidExchangeSelection(reason), detail)
}

/// Move the whole stock into the bid winner's hand.
pub fn take_stock(state: &mut GameState) -> Result<(), DomainError> {
    let winner = require_bid_winner(state, "take_stock")?;
    let stock = std::mem::take(&mut state.round.stock);
    let hand = &mut state.hands[winner as usize];
    hand.extend(stock);
    hand.sort();
    Ok(())
}

/// Validate a selection without touching state.
pub fn validate_selection(hand: &[Card], cards: &[Card]) -> Result<(), DomainError> {
    if cards.len() != RETURN_COUNT {
        return Err(exchange_error(
            ExchangeRejection::WrongCount,
            format!("expected {RETURN_COUNT} cards, got {}", cards.len()),
        ));
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(exchange_error(
                ExchangeRejection::DuplicateCard,
                format!("{card} selected twice"),
            ));
        }
    }
    if let Some(card) = cards.iter().find(|c| !hand.contains(c)) {
        return Err(exchange_error(
            ExchangeRejection::NotOwned,
            format!("{card} is not in hand"),
        ));
    }
    Ok(())
}

/// Bid winner returns three cards. They are shuffled and dealt one each to
/// the other seats, clockwise from the winner's left.
pub fn return_cards<R: Rng + ?Sized>(
    state: &mut GameState,
    who: Seat,
    cards: &[Card],
    rng: &mut R,
) -> Result<ExchangeApplied, DomainError> {
    validate_seat(who)?;
    if state.phase != Phase::Exchange {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "no exchange is pending",
        ));
    }
    let winner = require_bid_winner(state, "return_cards")?;
    if who != winner {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("seat {who} is not the bid winner"),
        ));
    }
    validate_selection(&state.hands[winner as usize], cards)?;

    state.hands[winner as usize].retain(|c| !cards.contains(c));

    let mut outgoing = cards.to_vec();
    outgoing.shuffle(rng);

    let mut deliveries = [(0, outgoing[0]); RETURN_COUNT];
    for (i, card) in outgoing.into_iter().enumerate() {
        let seat = nth_from(winner, (i + 1) as u8);
        let hand = &mut state.hands[seat as usize];
        hand.push(card);
        hand.sort();
        deliveries[i] = (seat, card);
    }

    debug_assert!(state.hands.iter().all(|h| h.len() == 10));
    debug_assert_eq!(deliveries.len(), PLAYERS - 1);

    state.phase = Phase::TrumpSelect;
    state.turn = Some(winner);
    Ok(ExchangeApplied { winner, deliveries })
}
