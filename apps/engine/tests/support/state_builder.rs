//! Build `GameState`s at interesting points without playing up to them.

use engine::domain::state::{GameState, Phase, PlayerState};
use engine::domain::{SeatKind, Suit};

pub fn players() -> [PlayerState; 4] {
    ["North", "East", "South", "West"].map(|n| PlayerState::new(n, SeatKind::Human))
}

/// A round that has played out all ten tricks and waits for settlement.
pub struct ScoringStateBuilder {
    dealer: u8,
    bid_winner: u8,
    bid: u16,
    trump: Suit,
    round_scores: [u16; 4],
    scores: [i32; 4],
    accumulated: [u16; 4],
}

impl ScoringStateBuilder {
    pub fn new(bid_winner: u8, bid: u16) -> Self {
        Self {
            dealer: 0,
            bid_winner,
            bid,
            trump: Suit::Hearts,
            round_scores: [0; 4],
            scores: [0; 4],
            accumulated: [0; 4],
        }
    }

    pub fn dealer(mut self, dealer: u8) -> Self {
        self.dealer = dealer;
        self
    }

    /// Trick points per seat; should add up to 187.
    pub fn round_scores(mut self, round_scores: [u16; 4]) -> Self {
        self.round_scores = round_scores;
        self
    }

    pub fn scores(mut self, scores: [i32; 4]) -> Self {
        self.scores = scores;
        self
    }

    pub fn accumulated(mut self, accumulated: [u16; 4]) -> Self {
        self.accumulated = accumulated;
        self
    }

    pub fn build(self) -> GameState {
        let mut state = GameState::new(players());
        state.round_no = 1;
        state.dealer = Some(self.dealer);
        state.phase = Phase::Scoring;
        state.round.bidding.current_bid = self.bid;
        state.round.bidding.bid_winner = Some(self.bid_winner);
        state.round.bidding.closed = true;
        state.round.trump = Some(self.trump);
        state.round.tricks_won = [3, 3, 2, 2];
        for seat in 0..4 {
            let p = &mut state.players[seat];
            p.round_score = self.round_scores[seat];
            p.score = self.scores[seat];
            p.accumulated_non_bid_points = self.accumulated[seat];
        }
        state
    }
}
