//! Test-only game state builders for domain unit tests.

use crate::domain::bidding::{place_bid, BidAction};
use crate::domain::dealing::{full_deck, split_deck, Deal};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{
    round_start_seat, GameState, Phase, PlayerState, RoundState, Seat, SeatKind,
};
use crate::domain::{Card, Suit};

pub fn parse_hand(tokens: &[&str]) -> Vec<Card> {
    let mut hand: Vec<Card> = tokens
        .iter()
        .map(|t| t.parse::<Card>().expect("valid card token"))
        .collect();
    hand.sort();
    hand
}

pub fn players() -> [PlayerState; PLAYERS] {
    ["North", "East", "South", "West"].map(|n| PlayerState::new(n, SeatKind::Human))
}

/// The unshuffled deck split 9-9-9-9 + 4. Every hand clears 12 points:
/// 33, 32, 39, 39 with 44 in the stock.
pub fn fixed_deal() -> Deal {
    split_deck(&full_deck())
}

/// Round 1 open for bidding with the fixed deal.
pub fn bidding_state(dealer: Seat) -> GameState {
    let mut state = GameState::new(players());
    state.begin_round(1, dealer, fixed_deal());
    state
}

/// Drive bidding so `winner` takes the contract at `bid` and everyone else passes.
pub fn exchange_state(dealer: Seat, winner: Seat, bid: u16) -> GameState {
    let mut state = bidding_state(dealer);
    let mut bid_placed = false;
    while state.phase == Phase::Bidding {
        let seat = state.turn.expect("turn during bidding");
        let action = if seat == winner && !bid_placed {
            bid_placed = true;
            BidAction::Bid(bid)
        } else {
            BidAction::Pass
        };
        place_bid(&mut state, seat, action).expect("scripted bid is legal");
    }
    assert_eq!(state.phase, Phase::Exchange);
    state
}

/// Trick 1 ready to lead, with explicit 10-card hands and trump.
pub fn trick_state(
    dealer: Seat,
    winner: Seat,
    bid: u16,
    hands: [Vec<Card>; PLAYERS],
    trump: Suit,
) -> GameState {
    let mut state = GameState::new(players());
    let leader = round_start_seat(dealer);
    state.round_no = 1;
    state.dealer = Some(dealer);
    state.hands = hands;
    state.round = RoundState::empty();
    state.round.bidding.current_bid = bid;
    state.round.bidding.bid_winner = Some(winner);
    state.round.bidding.closed = true;
    state.round.trump = Some(trump);
    state.phase = Phase::Trick { trick_no: 1 };
    state.trick_no = Some(1);
    state.leader = Some(leader);
    state.turn = Some(leader);
    state
}

/// The whole deck dealt 10-10-10-10 in suit blocks: seat 0 all hearts,
/// seat 1 all diamonds, seat 2 all spades, seat 3 all clubs.
pub fn suit_block_hands() -> [Vec<Card>; PLAYERS] {
    let deck = full_deck();
    [0, 1, 2, 3].map(|i| deck[i * 10..(i + 1) * 10].to_vec())
}
