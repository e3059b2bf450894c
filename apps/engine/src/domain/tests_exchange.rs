use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::exchange::return_cards;
use crate::domain::state::{check_card_conservation, Phase};
use crate::domain::test_state_helpers::{exchange_state, parse_hand};
use crate::errors::domain::{ExchangeRejection, ValidationKind};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn winner_holds_thirteen_before_returning() {
    let state = exchange_state(0, 1, 100);
    assert_eq!(state.hands[1].len(), 13);
    for seat in [0, 2, 3] {
        assert_eq!(state.hands[seat].len(), 9);
    }
    check_card_conservation(&state).unwrap();
}

#[test]
fn three_cards_go_out_one_per_other_seat() {
    let mut state = exchange_state(0, 1, 100);
    // seat 1 holds H2 D6..DK plus the clubs stock
    let give = parse_hand(&["D6", "D7", "D8"]);
    let applied = return_cards(&mut state, 1, &give, &mut rng()).unwrap();

    assert_eq!(applied.winner, 1);
    let recipients: Vec<u8> = applied.deliveries.iter().map(|(s, _)| *s).collect();
    assert_eq!(recipients, vec![2, 3, 0]);
    let mut delivered: Vec<_> = applied.deliveries.iter().map(|(_, c)| *c).collect();
    delivered.sort();
    assert_eq!(delivered, give);

    for (seat, card) in applied.deliveries {
        assert!(state.hands[seat as usize].contains(&card));
    }
    assert!(state.hands.iter().all(|h| h.len() == 10));
    assert!(give.iter().all(|c| !state.hands[1].contains(c)));
    assert_eq!(state.phase, Phase::TrumpSelect);
    assert_eq!(state.turn, Some(1));
    check_card_conservation(&state).unwrap();
}

#[test]
fn wrong_count_is_rejected() {
    let mut state = exchange_state(0, 1, 100);
    let two = parse_hand(&["D6", "D7"]);
    let err = return_cards(&mut state, 1, &two, &mut rng()).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(ValidationKind::InvalidExchangeSelection(
            ExchangeRejection::WrongCount
        ))
    );
    assert_eq!(state.hands[1].len(), 13);
    assert_eq!(state.phase, Phase::Exchange);
}

#[test]
fn duplicate_selection_is_rejected() {
    let mut state = exchange_state(0, 1, 100);
    let dup = parse_hand(&["D6", "D6", "D7"]);
    let err = return_cards(&mut state, 1, &dup, &mut rng()).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(ValidationKind::InvalidExchangeSelection(
            ExchangeRejection::DuplicateCard
        ))
    );
}

#[test]
fn card_not_owned_is_rejected() {
    let mut state = exchange_state(0, 1, 100);
    // AH belongs to seat 0
    let sel = parse_hand(&["D6", "D7", "AH"]);
    let err = return_cards(&mut state, 1, &sel, &mut rng()).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(ValidationKind::InvalidExchangeSelection(
            ExchangeRejection::NotOwned
        ))
    );
    assert_eq!(state.hands[1].len(), 13);
}

#[test]
fn only_the_winner_may_exchange() {
    let mut state = exchange_state(0, 1, 100);
    let sel = parse_hand(&["AH", "KH", "QH"]);
    let err = return_cards(&mut state, 0, &sel, &mut rng()).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));
}

#[test]
fn winner_may_return_stock_cards() {
    let mut state = exchange_state(3, 0, 150);
    // C2 came from the stock
    let sel = parse_hand(&["C2", "H6", "H7"]);
    let applied = return_cards(&mut state, 0, &sel, &mut rng()).unwrap();
    assert_eq!(applied.deliveries.len(), 3);
    assert!(!state.hands[0].contains(&sel[0]));
}
