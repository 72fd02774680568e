//! Application layer errors.
//!
//! These errors represent failures in orchestration and in talking to the
//! API, not business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::domain::{HotelId, RoomId};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The referenced hotel does not exist (broken reference).
    #[error("Hotel {id} does not exist")]
    HotelNotFound { id: HotelId },

    /// The referenced room does not exist.
    #[error("Room {id} does not exist")]
    RoomNotFound { id: RoomId },

    /// The API could not be reached or answered with an error status.
    #[error("Request '{operation}' failed: {reason}")]
    Transport {
        operation: &'static str,
        reason: String,
    },

    /// The API answered but the body did not match the expected records.
    #[error("Unexpected response for '{operation}': {reason}")]
    InvalidResponse {
        operation: &'static str,
        reason: String,
    },

    /// A request did not resolve within the configured timeout.
    #[error("Request '{operation}' timed out after {after_ms} ms")]
    Timeout {
        operation: &'static str,
        after_ms: u128,
    },

    /// Store access failed (lock poisoned, etc.).
    #[error("Backend store error")]
    StoreLockError,
}

impl ApplicationError {
    pub fn transport(operation: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::Transport {
            operation,
            reason: reason.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::HotelNotFound { id } => vec![
                format!("No hotel with id {id}"),
                "Try: innkeep hotels list".into(),
            ],
            Self::RoomNotFound { id } => vec![
                format!("No room with id {id}"),
                "Try: innkeep rooms list --hotel <id>".into(),
            ],
            Self::Transport { .. } | Self::Timeout { .. } => vec![
                "Check that the API is running and reachable".into(),
                "Verify api.base_url: innkeep config get api.base_url".into(),
                "Retry once the API answers again".into(),
            ],
            Self::InvalidResponse { .. } => vec![
                "The API returned data in an unexpected shape".into(),
                "Check that api.base_url points at the hotel API".into(),
            ],
            Self::StoreLockError => vec![
                "The backend store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HotelNotFound { .. } | Self::RoomNotFound { .. } => ErrorCategory::NotFound,
            Self::Transport { .. } | Self::Timeout { .. } => ErrorCategory::Transport,
            Self::InvalidResponse { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
