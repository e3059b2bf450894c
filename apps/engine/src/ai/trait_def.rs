//! AI player trait definition.

use std::fmt;

use crate::domain::bidding::BidAction;
use crate::domain::player_view::CurrentRoundInfo;
use crate::domain::{Card, Suit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    Internal(String),
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Decision interface for automated seats.
///
/// Each method is called only when it is this seat's turn in the matching
/// phase. Implementations must answer with an action the engine will accept;
/// use the `legal_*` helpers on [`CurrentRoundInfo`] rather than re-deriving
/// the rules.
pub trait AiPlayer: Send + Sync {
    /// Bid or pass during bidding.
    fn choose_bid(&self, state: &CurrentRoundInfo) -> Result<BidAction, AiError>;

    /// Pick exactly three cards from the 13-card hand to hand back.
    fn choose_exchange(&self, state: &CurrentRoundInfo) -> Result<Vec<Card>, AiError>;

    /// Name trump after the exchange.
    fn choose_trump(&self, state: &CurrentRoundInfo) -> Result<Suit, AiError>;

    /// Play a card into the current trick.
    fn choose_play(&self, state: &CurrentRoundInfo) -> Result<Card, AiError>;
}
