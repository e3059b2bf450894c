use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::GameFlow;
use crate::domain::bidding::{place_bid, set_trump, BidAction};
use crate::domain::exchange::return_cards;
use crate::domain::seed_derivation::{round_rng, SeedPurpose};
use crate::domain::tricks::play_card;
use crate::domain::{Card, GameEvent, Phase, Seat, Suit};
use crate::error::AppError;

/// Anything a seat can submit, in one serializable shape for relays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerAction {
    Bid(BidAction),
    Exchange(Vec<Card>),
    Trump(Suit),
    Play(Card),
}

impl GameFlow {
    pub fn apply(&mut self, seat: Seat, action: PlayerAction) -> Result<Vec<GameEvent>, AppError> {
        match action {
            PlayerAction::Bid(bid) => self.submit_bid(seat, bid),
            PlayerAction::Exchange(cards) => self.submit_exchange(seat, &cards),
            PlayerAction::Trump(suit) => self.submit_trump(seat, suit),
            PlayerAction::Play(card) => self.submit_play(seat, card),
        }
    }

    pub fn submit_bid(&mut self, seat: Seat, action: BidAction) -> Result<Vec<GameEvent>, AppError> {
        let before = self.turn_view();
        let placed = place_bid(&mut self.state, seat, action)?;

        let mut events = vec![GameEvent::BidAccepted {
            seat,
            action,
            current_bid: placed.current_bid,
        }];
        if let Some(result) = placed.closed {
            info!(
                round_no = self.state.round_no,
                seat = result.winner,
                bid = result.bid,
                walkover = result.walkover,
                "bidding closed"
            );
            events.push(GameEvent::BiddingClosed {
                winner: result.winner,
                bid: result.bid,
                walkover: result.walkover,
            });
            events.push(GameEvent::StockTaken {
                seat: result.winner,
            });
        }
        self.finish_action(&before, events)
    }

    pub fn submit_exchange(
        &mut self,
        seat: Seat,
        cards: &[Card],
    ) -> Result<Vec<GameEvent>, AppError> {
        let before = self.turn_view();
        let mut rng = round_rng(
            &self.game_seed,
            self.state.round_no,
            self.attempt,
            SeedPurpose::Exchange,
        );
        let applied = return_cards(&mut self.state, seat, cards, &mut rng)?;
        debug!(round_no = self.state.round_no, seat, "exchange applied");

        let events = vec![GameEvent::ExchangeApplied {
            winner: applied.winner,
            recipients: applied.deliveries.iter().map(|(s, _)| *s).collect(),
        }];
        self.finish_action(&before, events)
    }

    pub fn submit_trump(&mut self, seat: Seat, trump: Suit) -> Result<Vec<GameEvent>, AppError> {
        let before = self.turn_view();
        set_trump(&mut self.state, seat, trump)?;
        info!(round_no = self.state.round_no, seat, %trump, "trump set");
        self.finish_action(&before, vec![GameEvent::TrumpSet { seat, trump }])
    }

    /// Trump from a relay token such as `"hearts"` or `"S"`.
    pub fn submit_trump_token(&mut self, seat: Seat, token: &str) -> Result<Vec<GameEvent>, AppError> {
        let trump: Suit = token.parse()?;
        self.submit_trump(seat, trump)
    }

    pub fn submit_play(&mut self, seat: Seat, card: Card) -> Result<Vec<GameEvent>, AppError> {
        let before = self.turn_view();
        let result = play_card(&mut self.state, seat, card)?;

        let mut events = vec![GameEvent::CardAccepted {
            seat,
            card,
            trick_no: result.trick_no,
        }];
        if let Some(winner) = result.trick_winner {
            debug!(
                trick_no = result.trick_no,
                seat = winner,
                points = result.trick_points,
                "trick resolved"
            );
            events.push(GameEvent::TrickResolved {
                trick_no: result.trick_no,
                winner,
                points: result.trick_points,
            });
        }
        if result.phase_transitioned == Some(Phase::Scoring) {
            events.extend(self.settle_round()?);
        }
        self.finish_action(&before, events)
    }
}
