//! Domain-level error type used by the rules engine and everything above it.
//!
//! Rejections are structured: every recoverable failure carries a
//! [`ValidationKind`] that a relay or UI can map to a stable [`ErrorCode`]
//! without parsing the human-readable detail. Broken internal state is kept
//! apart in [`DomainError::Invariant`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::error_code::ErrorCode;

/// Why a bid or pass was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidRejection {
    /// Below 100 or above the 187 ceiling.
    OutOfRange,
    /// Inside the range but not on the 5-point grid starting at 100.
    OffStep,
    /// Not strictly greater than the standing bid.
    NotAboveCurrent,
    /// Bidding for this round has already closed (or never opened).
    BiddingClosed,
}

/// Why an exchange selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExchangeRejection {
    /// Exactly three cards must be returned.
    WrongCount,
    /// A selected card is not in the bid winner's hand.
    NotOwned,
    /// The same card was selected more than once.
    DuplicateCard,
}

/// Why a trump choice was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrumpRejection {
    /// The token does not name one of the four suits.
    UnknownSuit,
    /// Only the bid winner picks trump.
    WrongSeat,
}

/// Why a card play was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayRejection {
    CardNotInHand,
    MustFollowSuit,
}

/// Structured reason attached to every recoverable rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    InvalidBid(BidRejection),
    InvalidExchangeSelection(ExchangeRejection),
    InvalidTrumpChoice(TrumpRejection),
    IllegalPlay(PlayRejection),
    OutOfTurn,
    PhaseMismatch,
    InvalidSeat,
    ParseCard,
}

impl ValidationKind {
    /// Fine-grained code for this rejection.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidBid(BidRejection::OutOfRange) => ErrorCode::BidOutOfRange,
            Self::InvalidBid(BidRejection::OffStep) => ErrorCode::BidOffStep,
            Self::InvalidBid(BidRejection::NotAboveCurrent) => ErrorCode::BidNotAboveCurrent,
            Self::InvalidBid(BidRejection::BiddingClosed) => ErrorCode::BiddingClosed,
            Self::InvalidExchangeSelection(ExchangeRejection::WrongCount) => {
                ErrorCode::ExchangeWrongCount
            }
            Self::InvalidExchangeSelection(ExchangeRejection::NotOwned) => {
                ErrorCode::ExchangeCardNotOwned
            }
            Self::InvalidExchangeSelection(ExchangeRejection::DuplicateCard) => {
                ErrorCode::ExchangeDuplicateCard
            }
            Self::InvalidTrumpChoice(TrumpRejection::UnknownSuit) => ErrorCode::UnknownSuit,
            Self::InvalidTrumpChoice(TrumpRejection::WrongSeat) => ErrorCode::TrumpWrongSeat,
            Self::IllegalPlay(PlayRejection::CardNotInHand) => ErrorCode::CardNotInHand,
            Self::IllegalPlay(PlayRejection::MustFollowSuit) => ErrorCode::MustFollowSuit,
            Self::OutOfTurn => ErrorCode::OutOfTurn,
            Self::PhaseMismatch => ErrorCode::PhaseMismatch,
            Self::InvalidSeat => ErrorCode::InvalidSeat,
            Self::ParseCard => ErrorCode::ParseCard,
        }
    }

    /// Coarse family the rejection belongs to (`INVALID_BID`, `ILLEGAL_PLAY`, ...).
    pub const fn family(&self) -> ErrorCode {
        match self {
            Self::InvalidBid(_) => ErrorCode::InvalidBid,
            Self::InvalidExchangeSelection(_) => ErrorCode::InvalidExchangeSelection,
            Self::InvalidTrumpChoice(_) => ErrorCode::InvalidTrumpChoice,
            Self::IllegalPlay(_) => ErrorCode::IllegalPlay,
            Self::OutOfTurn => ErrorCode::OutOfTurn,
            Self::PhaseMismatch => ErrorCode::PhaseMismatch,
            Self::InvalidSeat => ErrorCode::InvalidSeat,
            Self::ParseCard => ErrorCode::ParseCard,
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Caller input broke a rule; the same seat keeps the turn.
    Validation(ValidationKind, String),
    /// Engine state is inconsistent. Never caused by caller input.
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "{}: {d}", kind.code()),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Validation(kind, _) => kind.code(),
            DomainError::Invariant(_) => ErrorCode::InvariantViolation,
        }
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, DomainError::Invariant(_))
    }
}
