use thiserror::Error;

use crate::ai::AiError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

/// Service-layer error: everything a table, registry, or the simulator can
/// hand back to a caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Caller input broke a rule. The acting seat keeps the turn.
    #[error("Rejected: {0}")]
    Rejected(DomainError),
    #[error("Invariant violated: {detail}")]
    Invariant { detail: String },
    #[error("Table not found: {detail}")]
    TableNotFound { detail: String },
    #[error("Table closed: {detail}")]
    TableClosed { detail: String },
    #[error("AI error: {detail}")]
    Ai { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Rejected(err) => err.code(),
            AppError::Invariant { .. } => ErrorCode::InvariantViolation,
            AppError::TableNotFound { .. } => ErrorCode::TableNotFound,
            AppError::TableClosed { .. } => ErrorCode::TableClosed,
            AppError::Ai { .. } => ErrorCode::AiError,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// True for rejections the caller can correct and retry.
    pub fn is_rejection(&self) -> bool {
        matches!(self, AppError::Rejected(_))
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn table_not_found(detail: impl Into<String>) -> Self {
        Self::TableNotFound {
            detail: detail.into(),
        }
    }

    pub fn table_closed(detail: impl Into<String>) -> Self {
        Self::TableClosed {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Invariant(detail) => AppError::Invariant { detail },
            other => AppError::Rejected(other),
        }
    }
}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::Ai {
            detail: err.to_string(),
        }
    }
}
