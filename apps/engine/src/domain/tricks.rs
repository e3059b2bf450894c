use crate::domain::cards_logic::{card_beats, hand_has_suit, points};
use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::state::{
    next_player, require_trick_no, require_trump, require_turn, validate_seat, GameState, Phase,
    RoundState, Seat,
};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, PlayRejection, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Trick the card was played into.
    pub trick_no: u8,
    pub trick_completed: bool,
    /// Winner and points of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    pub trick_points: u16,
    /// Phase transitioned to, if any (None means still in Trick phase).
    pub phase_transitioned: Option<Phase>,
}

/// Compute legal cards the player may play, independent of turn enforcement.
pub fn legal_moves(state: &GameState, who: Seat) -> Vec<Card> {
    let Phase::Trick { .. } = state.phase else {
        return Vec::new();
    };
    let Some(hand) = state.hands.get(who as usize) else {
        return Vec::new();
    };

    if let Some(lead) = state.round.trick_lead {
        if hand_has_suit(hand, lead) {
            let mut v: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
            v.sort();
            return v;
        }
    }

    let mut any = hand.clone();
    any.sort();
    any
}

/// Play a card into the current trick, enforcing turn, suit-following, and phase.
pub fn play_card(
    state: &mut GameState,
    who: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    validate_seat(who)?;
    let Phase::Trick {
        trick_no: trick_no_phase,
    } = state.phase
    else {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "cards can only be played during trick play",
        ));
    };

    let trick_no = require_trick_no(state, "play_card")?;
    if trick_no != trick_no_phase {
        return Err(DomainError::invariant(
            "state.trick_no must match Phase::Trick.trick_no",
        ));
    }

    let turn = require_turn(state, "play_card")?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("seat {who} played out of turn; seat {turn} is to act"),
        ));
    }

    let Some(pos) = state.hands[who as usize].iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay(PlayRejection::CardNotInHand),
            format!("{card} is not in hand"),
        ));
    };

    if !legal_moves(state, who).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay(PlayRejection::MustFollowSuit),
            format!("{card} does not follow the lead suit"),
        ));
    }

    if state.round.trick_plays.is_empty() {
        state.round.trick_lead = Some(card.suit);
        state.leader = Some(who);
    }

    let removed = state.hands[who as usize].remove(pos);
    state.round.trick_plays.push((who, removed));
    state.turn = Some(next_player(who));

    let mut result = PlayCardResult {
        trick_no,
        trick_completed: false,
        trick_winner: None,
        trick_points: 0,
        phase_transitioned: None,
    };

    if state.round.trick_plays.len() < PLAYERS {
        return Ok(result);
    }

    let trump = require_trump(state, "play_card trick_complete")?;
    let winner = resolve_current_trick(&state.round, trump)
        .ok_or_else(|| DomainError::invariant("complete trick has no winner"))?;
    let trick_points = trick_points(&state.round.trick_plays);

    state.round.tricks_won[winner as usize] += 1;
    state.players[winner as usize].round_score += trick_points;
    state.round.last_trick = Some(std::mem::take(&mut state.round.trick_plays));
    state.round.trick_lead = None;
    state.leader = Some(winner);
    state.turn = Some(winner);

    result.trick_completed = true;
    result.trick_winner = Some(winner);
    result.trick_points = trick_points;

    if state.hands.iter().all(Vec::is_empty) {
        if trick_no != TRICKS_PER_ROUND {
            return Err(DomainError::invariant(format!(
                "hands ran out after trick {trick_no} of {TRICKS_PER_ROUND}"
            )));
        }
        state.phase = Phase::Scoring;
        state.turn = None;
        state.leader = None;
        state.trick_no = None;
        result.phase_transitioned = Some(Phase::Scoring);
        return Ok(result);
    }

    let next_trick_no = trick_no.saturating_add(1);
    state.trick_no = Some(next_trick_no);
    state.phase = Phase::Trick {
        trick_no: next_trick_no,
    };
    Ok(result)
}

pub fn trick_points(plays: &[(Seat, Card)]) -> u16 {
    plays.iter().map(|&(_, c)| points(c)).sum()
}

/// Resolve the current trick winner if complete.
pub fn resolve_current_trick(round: &RoundState, trump: Suit) -> Option<Seat> {
    if round.trick_plays.len() < PLAYERS {
        return None;
    }
    let lead = round.trick_lead?;
    trick_winner(&round.trick_plays, lead, trump)
}

/// Highest trump if any trump was played, else highest card of the lead suit.
pub fn trick_winner(plays: &[(Seat, Card)], lead: Suit, trump: Suit) -> Option<Seat> {
    let (first, rest) = plays.split_first()?;
    let mut best = *first;
    for &(seat, card) in rest {
        if card_beats(card, best.1, lead, trump) {
            best = (seat, card);
        }
    }
    Some(best.0)
}
