use crate::domain::bidding::{legal_bids, place_bid, set_trump, BidAction, BiddingResult};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{bidding_state, exchange_state};
use crate::domain::Suit;
use crate::errors::domain::{BidRejection, TrumpRejection, ValidationKind};
use crate::errors::ErrorCode;

#[test]
fn bidding_opens_left_of_dealer() {
    let state = bidding_state(0);
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.turn, Some(1));
    assert_eq!(state.round.stock.len(), 4);
}

#[test]
fn bid_then_three_passes_closes() {
    let mut state = bidding_state(0);
    let placed = place_bid(&mut state, 1, BidAction::Bid(100)).unwrap();
    assert_eq!(placed.current_bid, 100);
    assert!(placed.closed.is_none());
    place_bid(&mut state, 2, BidAction::Pass).unwrap();
    place_bid(&mut state, 3, BidAction::Pass).unwrap();
    let last = place_bid(&mut state, 0, BidAction::Pass).unwrap();

    assert_eq!(
        last.closed,
        Some(BiddingResult {
            winner: 1,
            bid: 100,
            walkover: false
        })
    );
    assert_eq!(state.phase, Phase::Exchange);
    assert_eq!(state.turn, Some(1));
    // stock went to the winner
    assert!(state.round.stock.is_empty());
    assert_eq!(state.hands[1].len(), 13);
}

#[test]
fn four_passes_is_a_walkover_for_left_of_dealer() {
    let mut state = bidding_state(2);
    for seat in [3, 0, 1] {
        let placed = place_bid(&mut state, seat, BidAction::Pass).unwrap();
        assert!(placed.closed.is_none());
    }
    let last = place_bid(&mut state, 2, BidAction::Pass).unwrap();
    assert_eq!(
        last.closed,
        Some(BiddingResult {
            winner: 3,
            bid: 100,
            walkover: true
        })
    );
    assert!(state.round.bidding.walkover);
    assert_eq!(state.hands[3].len(), 13);
}

#[test]
fn a_pass_is_not_permanent() {
    let mut state = bidding_state(0);
    place_bid(&mut state, 1, BidAction::Pass).unwrap();
    place_bid(&mut state, 2, BidAction::Bid(100)).unwrap();
    place_bid(&mut state, 3, BidAction::Pass).unwrap();
    place_bid(&mut state, 0, BidAction::Pass).unwrap();
    // seat 1 passed earlier and may come back in
    place_bid(&mut state, 1, BidAction::Bid(110)).unwrap();
    assert_eq!(state.round.bidding.bid_winner, Some(1));
    assert_eq!(state.round.bidding.consecutive_passes, 0);
    assert_eq!(state.phase, Phase::Bidding);
    assert_eq!(state.round.bidding.turns_taken, 5);
    assert_eq!(
        state.round.bidding.last_action,
        [
            Some(BidAction::Pass),
            Some(BidAction::Bid(110)),
            Some(BidAction::Bid(100)),
            Some(BidAction::Pass)
        ]
    );
}

#[test]
fn bid_value_rejections() {
    let mut state = bidding_state(0);
    let cases = [
        (95, BidRejection::OutOfRange),
        (190, BidRejection::OutOfRange),
        (102, BidRejection::OffStep),
        (187, BidRejection::OffStep),
    ];
    for (value, reason) in cases {
        let err = place_bid(&mut state, 1, BidAction::Bid(value)).unwrap_err();
        assert_eq!(err.kind(), Some(ValidationKind::InvalidBid(reason)), "bid {value}");
        // rejected action keeps the turn
        assert_eq!(state.turn, Some(1));
    }

    place_bid(&mut state, 1, BidAction::Bid(120)).unwrap();
    let err = place_bid(&mut state, 2, BidAction::Bid(120)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BidNotAboveCurrent);
    assert_eq!(state.round.bidding.current_bid, 120);
}

#[test]
fn out_of_turn_is_rejected() {
    let mut state = bidding_state(0);
    let err = place_bid(&mut state, 3, BidAction::Bid(100)).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));
    assert_eq!(state.round.bidding.turns_taken, 0);
}

#[test]
fn bid_after_close_is_bidding_closed() {
    let mut state = exchange_state(0, 1, 100);
    let err = place_bid(&mut state, 1, BidAction::Bid(105)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BiddingClosed);
}

#[test]
fn invalid_seat_is_rejected() {
    let mut state = bidding_state(0);
    let err = place_bid(&mut state, 7, BidAction::Pass).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::InvalidSeat));
}

#[test]
fn at_185_only_pass_is_legal() {
    let mut state = bidding_state(0);
    place_bid(&mut state, 1, BidAction::Bid(185)).unwrap();
    assert_eq!(legal_bids(&state, 2), vec![BidAction::Pass]);
    let err = place_bid(&mut state, 2, BidAction::Bid(190)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BidOutOfRange);
}

#[test]
fn legal_bids_empty_for_waiting_seat() {
    let state = bidding_state(0);
    assert!(legal_bids(&state, 2).is_empty());
    let bids = legal_bids(&state, 1);
    assert_eq!(bids.first(), Some(&BidAction::Pass));
    assert_eq!(bids.get(1), Some(&BidAction::Bid(100)));
    assert_eq!(bids.last(), Some(&BidAction::Bid(185)));
}

#[test]
fn trump_only_from_bid_winner_after_exchange() {
    let mut state = exchange_state(0, 2, 100);
    // exchange still pending
    let err = set_trump(&mut state, 2, Suit::Spades).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));

    state.phase = Phase::TrumpSelect;
    let err = set_trump(&mut state, 1, Suit::Spades).unwrap_err();
    assert_eq!(
        err.kind(),
        Some(ValidationKind::InvalidTrumpChoice(TrumpRejection::WrongSeat))
    );

    set_trump(&mut state, 2, Suit::Spades).unwrap();
    assert_eq!(state.round.trump, Some(Suit::Spades));
    assert_eq!(state.phase, Phase::Trick { trick_no: 1 });
    // left of dealer leads, not the bid winner
    assert_eq!(state.turn, Some(1));
    assert_eq!(state.leader, Some(1));
}
