use crate::domain::state::{check_card_conservation, Phase};
use crate::domain::test_state_helpers::{parse_hand, suit_block_hands, trick_state};
use crate::domain::tricks::{legal_moves, play_card, trick_points};
use crate::domain::{Card, Suit};
use crate::errors::domain::{PlayRejection, ValidationKind};

fn c(token: &str) -> Card {
    token.parse().unwrap()
}

#[test]
fn must_follow_lead_when_holding_it() {
    let hands = [
        parse_hand(&["AH", "6S"]),
        parse_hand(&["KH", "2S"]),
        parse_hand(&["6D", "7D"]),
        parse_hand(&["QH", "6C"]),
    ];
    let mut state = trick_state(3, 0, 100, hands, Suit::Spades);
    assert_eq!(state.turn, Some(0));

    play_card(&mut state, 0, c("AH")).unwrap();
    assert_eq!(legal_moves(&state, 1), vec![c("KH")]);

    let err = play_card(&mut state, 1, c("2S")).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(ValidationKind::IllegalPlay(PlayRejection::MustFollowSuit))
    );
    assert_eq!(state.turn, Some(1));

    // void in hearts: anything goes
    assert_eq!(legal_moves(&state, 2).len(), 2);
}

#[test]
fn card_not_in_hand_and_out_of_turn() {
    let mut state = trick_state(0, 1, 100, suit_block_hands(), Suit::Hearts);
    let err = play_card(&mut state, 1, c("AH")).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(ValidationKind::IllegalPlay(PlayRejection::CardNotInHand))
    );
    let err = play_card(&mut state, 2, c("AS")).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));
}

#[test]
fn trump_beats_lead_and_points_go_to_winner() {
    // seat 0 hearts, 1 diamonds, 2 spades, 3 clubs; dealer 3 so seat 0 leads
    let mut state = trick_state(3, 0, 100, suit_block_hands(), Suit::Clubs);
    play_card(&mut state, 0, c("AH")).unwrap();
    play_card(&mut state, 1, c("2D")).unwrap();
    play_card(&mut state, 2, c("TS")).unwrap();
    let res = play_card(&mut state, 3, c("6C")).unwrap();

    assert!(res.trick_completed);
    assert_eq!(res.trick_winner, Some(3));
    assert_eq!(res.trick_points, 31);
    assert_eq!(state.players[3].round_score, 31);
    assert_eq!(state.round.tricks_won[3], 1);
    assert_eq!(state.turn, Some(3));
    assert_eq!(state.leader, Some(3));
    assert_eq!(state.phase, Phase::Trick { trick_no: 2 });
    assert_eq!(state.round.last_trick.as_ref().map(Vec::len), Some(4));
    assert!(state.round.trick_plays.is_empty());
    check_card_conservation(&state).unwrap();
}

#[test]
fn no_trump_played_lead_suit_wins() {
    let hands = [
        parse_hand(&["6H", "7S"]),
        parse_hand(&["2H", "8S"]),
        parse_hand(&["AH", "9S"]),
        parse_hand(&["2D", "TS"]),
    ];
    let mut state = trick_state(3, 0, 100, hands, Suit::Clubs);
    play_card(&mut state, 0, c("6H")).unwrap();
    play_card(&mut state, 1, c("2H")).unwrap();
    play_card(&mut state, 2, c("AH")).unwrap();
    let res = play_card(&mut state, 3, c("2D")).unwrap();
    assert_eq!(res.trick_winner, Some(1));
    assert_eq!(res.trick_points, 31);
}

#[test]
fn round_ends_after_ten_tricks() {
    let mut state = trick_state(3, 0, 100, suit_block_hands(), Suit::Hearts);
    let mut last = None;
    for _ in 0..10 {
        for _ in 0..4 {
            let seat = state.turn.unwrap();
            let card = legal_moves(&state, seat)[0];
            last = Some(play_card(&mut state, seat, card).unwrap());
        }
    }
    let last = last.unwrap();
    assert_eq!(last.trick_no, 10);
    assert_eq!(last.phase_transitioned, Some(Phase::Scoring));
    assert_eq!(state.phase, Phase::Scoring);
    assert_eq!(state.turn, None);
    assert!(state.hands.iter().all(Vec::is_empty));
    // hearts are trump and seat 0 holds all of them
    assert_eq!(state.round.tricks_won, [10, 0, 0, 0]);
    assert_eq!(state.players[0].round_score, 187);
}

#[test]
fn hands_emptying_before_the_tenth_trick_is_an_invariant_violation() {
    let hands = [
        parse_hand(&["AH"]),
        parse_hand(&["KH"]),
        parse_hand(&["QH"]),
        parse_hand(&["JH"]),
    ];
    let mut state = trick_state(3, 0, 100, hands, Suit::Hearts);
    for card in ["AH", "KH", "QH"] {
        let seat = state.turn.unwrap();
        play_card(&mut state, seat, c(card)).unwrap();
    }
    let err = play_card(&mut state, 3, c("JH")).unwrap_err();
    assert!(err.is_invariant());
}

#[test]
fn trick_points_sum() {
    let plays = [
        (0, c("2C")),
        (1, c("AH")),
        (2, c("TD")),
        (3, c("KS")),
    ];
    assert_eq!(trick_points(&plays), 50);
}

#[test]
fn play_outside_trick_phase_is_phase_mismatch() {
    let mut state = crate::domain::test_state_helpers::bidding_state(0);
    let card = state.hands[1][0];
    let err = play_card(&mut state, 1, card).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}
