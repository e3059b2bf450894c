pub mod domain;
pub mod error_code;

pub use domain::{
    BidRejection, DomainError, ExchangeRejection, PlayRejection, TrumpRejection, ValidationKind,
};
pub use error_code::ErrorCode;
