//! Error codes for the 187 engine.
//!
//! Every rejection and service failure maps to one of these codes. Add new
//! codes here; never pass ad-hoc strings as error codes.
//!
//! All codes are SCREAMING_SNAKE_CASE and are the exact strings a relay layer
//! sends to clients for localization.

use core::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rejection families
    /// Bid or pass refused
    InvalidBid,
    /// Exchange selection refused
    InvalidExchangeSelection,
    /// Trump choice refused
    InvalidTrumpChoice,
    /// Card play refused
    IllegalPlay,

    // Bidding
    BidOutOfRange,
    BidOffStep,
    BidNotAboveCurrent,
    BiddingClosed,

    // Exchange
    ExchangeWrongCount,
    ExchangeCardNotOwned,
    ExchangeDuplicateCard,

    // Trump
    UnknownSuit,
    TrumpWrongSeat,

    // Play
    CardNotInHand,
    MustFollowSuit,

    // Turn and phase
    OutOfTurn,
    PhaseMismatch,
    InvalidSeat,
    ParseCard,

    // Service
    /// Engine state is inconsistent
    InvariantViolation,
    /// No table with that id
    TableNotFound,
    /// The table actor has shut down
    TableClosed,
    /// Automated seat failed to decide
    AiError,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBid => "INVALID_BID",
            Self::InvalidExchangeSelection => "INVALID_EXCHANGE_SELECTION",
            Self::InvalidTrumpChoice => "INVALID_TRUMP_CHOICE",
            Self::IllegalPlay => "ILLEGAL_PLAY",

            Self::BidOutOfRange => "BID_OUT_OF_RANGE",
            Self::BidOffStep => "BID_OFF_STEP",
            Self::BidNotAboveCurrent => "BID_NOT_ABOVE_CURRENT",
            Self::BiddingClosed => "BIDDING_CLOSED",

            Self::ExchangeWrongCount => "EXCHANGE_WRONG_COUNT",
            Self::ExchangeCardNotOwned => "EXCHANGE_CARD_NOT_OWNED",
            Self::ExchangeDuplicateCard => "EXCHANGE_DUPLICATE_CARD",

            Self::UnknownSuit => "UNKNOWN_SUIT",
            Self::TrumpWrongSeat => "TRUMP_WRONG_SEAT",

            Self::CardNotInHand => "CARD_NOT_IN_HAND",
            Self::MustFollowSuit => "MUST_FOLLOW_SUIT",

            Self::OutOfTurn => "OUT_OF_TURN",
            Self::PhaseMismatch => "PHASE_MISMATCH",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::ParseCard => "PARSE_CARD",

            Self::InvariantViolation => "INVARIANT_VIOLATION",
            Self::TableNotFound => "TABLE_NOT_FOUND",
            Self::TableClosed => "TABLE_CLOSED",
            Self::AiError => "AI_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
