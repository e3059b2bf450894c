use super::*;
use crate::ai::{create_ai, AiPlayer, HousePlayer};
use crate::domain::bidding::BidAction;
use crate::domain::seed_derivation::game_seed_from_u64;
use crate::domain::state::round_start_seat;
use crate::domain::Suit;
use crate::errors::ErrorCode;

fn seats() -> [SeatConfig; PLAYERS] {
    [
        SeatConfig::human("North"),
        SeatConfig::ai("East"),
        SeatConfig::ai("South"),
        SeatConfig::ai("West"),
    ]
}

fn started(seed: u64) -> GameFlow {
    let mut flow = GameFlow::new(seats(), game_seed_from_u64(seed), FlowOptions::default()).unwrap();
    flow.start().unwrap();
    flow
}

fn house_everywhere() -> SeatAis {
    [0, 1, 2, 3].map(|_| Some(Box::new(HousePlayer::new(None)) as Box<dyn AiPlayer>))
}

fn pass_round(flow: &mut GameFlow) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..PLAYERS {
        let seat = flow.state().turn.unwrap();
        events.extend(flow.submit_bid(seat, BidAction::Pass).unwrap());
    }
    events
}

#[test]
fn start_deals_round_one_and_hands_turn_to_dealer_left() {
    let mut flow = GameFlow::new(seats(), game_seed_from_u64(1), FlowOptions::default()).unwrap();
    let events = flow.start().unwrap();

    assert!(matches!(events[0], GameEvent::GameStarted { dealer: 0, .. }));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::RoundDealt { round_no: 1, dealer: 0, .. })));
    assert_eq!(
        events.last(),
        Some(&GameEvent::TurnBecame {
            seat: 1,
            phase: Phase::Bidding
        })
    );
    assert!(flow.state().hands.iter().all(|h| h.len() == 9));
    assert_eq!(flow.state().round.stock.len(), 4);
    assert_eq!(flow.pending_action(), Some((1, ActionType::Bid)));
}

#[test]
fn start_twice_is_rejected() {
    let mut flow = started(2);
    let err = flow.start().unwrap_err();
    assert_eq!(err.code(), ErrorCode::PhaseMismatch);
}

#[test]
fn same_seed_same_deal() {
    let a = started(42);
    let b = started(42);
    assert_eq!(a.state().hands, b.state().hands);
    assert_eq!(a.state().round.stock, b.state().round.stock);
}

#[test]
fn walkover_goes_to_dealer_left_at_one_hundred() {
    let mut flow = started(3);
    let events = pass_round(&mut flow);

    assert!(events.contains(&GameEvent::BiddingClosed {
        winner: 1,
        bid: 100,
        walkover: true
    }));
    assert!(events.contains(&GameEvent::StockTaken { seat: 1 }));
    assert_eq!(flow.pending_action(), Some((1, ActionType::Exchange)));
    assert_eq!(flow.state().hands[1].len(), 13);
}

#[test]
fn rejection_keeps_the_turn() {
    let mut flow = started(4);
    let err = flow.submit_bid(2, BidAction::Bid(100)).unwrap_err();
    assert!(err.is_rejection());
    assert_eq!(err.code(), ErrorCode::OutOfTurn);
    assert_eq!(flow.state().turn, Some(1));

    let err = flow.submit_bid(1, BidAction::Bid(103)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::BidOffStep);
    assert_eq!(flow.state().turn, Some(1));
}

#[test]
fn exchange_then_trump_opens_trick_one() {
    let mut flow = started(5);
    pass_round(&mut flow);

    let giveaway: Vec<_> = flow.state().hands[1][..3].to_vec();
    let events = flow.submit_exchange(1, &giveaway).unwrap();
    assert_eq!(
        events[0],
        GameEvent::ExchangeApplied {
            winner: 1,
            recipients: vec![2, 3, 0]
        }
    );
    assert!(events.contains(&GameEvent::TurnBecame {
        seat: 1,
        phase: Phase::TrumpSelect
    }));
    assert!(flow.state().hands.iter().all(|h| h.len() == 10));

    let err = flow.submit_trump_token(1, "stars").unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownSuit);

    let events = flow.submit_trump_token(1, "spades").unwrap();
    assert_eq!(events[0], GameEvent::TrumpSet { seat: 1, trump: Suit::Spades });
    assert_eq!(flow.phase(), Phase::Trick { trick_no: 1 });
    assert_eq!(flow.state().turn, Some(round_start_seat(0)));
}

#[test]
fn abort_keeps_scores_dealer_and_round() {
    let mut flow = started(6);
    let ais = house_everywhere();
    // Finish round 1 so there is a score to keep.
    while flow.state().round_no == 1 && !flow.is_over() {
        flow.step_ai(&ais).unwrap();
    }
    let scores = flow.state().scores();
    let dealer = flow.state().dealer;
    let round_no = flow.state().round_no;
    let hands = flow.state().hands.clone();

    let events = flow.abort_round().unwrap();
    assert_eq!(
        events[0],
        GameEvent::RoundAborted {
            round_no,
            dealer: dealer.unwrap()
        }
    );
    assert_eq!(flow.state().scores(), scores);
    assert_eq!(flow.state().dealer, dealer);
    assert_eq!(flow.state().round_no, round_no);
    assert_eq!(flow.phase(), Phase::Bidding);
    assert_ne!(flow.state().hands, hands);
}

#[test]
fn abort_outside_a_round_is_rejected() {
    let mut flow = GameFlow::new(seats(), game_seed_from_u64(7), FlowOptions::default()).unwrap();
    let err = flow.abort_round().unwrap_err();
    assert_eq!(err.code(), ErrorCode::PhaseMismatch);
}

#[test]
fn house_players_finish_a_game() {
    let mut flow = started(8);
    let events = flow.run_ais(&house_everywhere()).unwrap();

    assert!(flow.is_over());
    assert_eq!(flow.pending_action(), None);
    let ended: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::GameEnded { outcome, standings } => Some((outcome, standings)),
            _ => None,
        })
        .collect();
    assert_eq!(ended.len(), 1);
    let (outcome, standings) = ended[0];
    let score = flow.state().players[outcome.seat() as usize].score;
    assert!(score >= 302 || score <= -302);
    assert_eq!(standings.len(), 4);
    assert!(standings.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn every_round_end_reports_four_seats() {
    let mut flow = started(9);
    let events = flow.run_ais(&house_everywhere()).unwrap();
    let rounds: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::RoundEnded(s) => Some(s),
            _ => None,
        })
        .collect();
    assert!(!rounds.is_empty());
    for (i, settlement) in rounds.iter().enumerate() {
        assert_eq!(settlement.round_no as usize, i + 1);
        assert!(settlement.seats.iter().all(|s| s.accumulated_non_bid_points <= 50));
    }
}

#[test]
fn random_players_finish_a_game() {
    let mut flow = started(10);
    let ais = [0u8, 1, 2, 3].map(|seat| {
        create_ai(
            "random",
            Some(&serde_json::json!({"seed": flow.ai_seed(seat)})),
        )
    });
    flow.run_ais(&ais).unwrap();
    assert!(flow.is_over());
}

#[test]
fn run_ais_stops_at_external_seat() {
    let mut flow = started(11);
    let mut ais = house_everywhere();
    ais[3] = None;
    flow.run_ais(&ais).unwrap();
    assert!(!flow.is_over());
    assert_eq!(flow.pending_action().map(|(seat, _)| seat), Some(3));
}

#[test]
fn zero_redeals_is_a_config_error() {
    let options = FlowOptions {
        starting_dealer: 0,
        max_redeals: 0,
    };
    let err = GameFlow::new(seats(), [0; 32], options).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigError);
}

#[test]
fn exhausted_redeals_are_an_invariant_violation() {
    let options = FlowOptions {
        starting_dealer: 0,
        max_redeals: 1,
    };
    let mut failures = 0;
    for seed in 0..2000 {
        let mut flow = GameFlow::new(seats(), game_seed_from_u64(seed), options).unwrap();
        if let Err(err) = flow.start() {
            assert_eq!(err.code(), ErrorCode::InvariantViolation);
            failures += 1;
        }
    }
    assert!(failures > 0);
}
