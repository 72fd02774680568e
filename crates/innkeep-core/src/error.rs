//! Unified error handling for Innkeep Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with user-actionable suggestions and the view the
//! caller should move to after the failure.

use thiserror::Error;

use crate::application::{ApplicationError, View};
use crate::domain::DomainError;

/// Root error type for Innkeep Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InnkeepError {
    /// Errors from the domain layer (validation and business rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (lookups and transport).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl InnkeepError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in Innkeep".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::BusinessRule => ErrorCategory::BusinessRule,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(
                ApplicationError::Transport { .. }
                    | ApplicationError::Timeout { .. }
                    | ApplicationError::StoreLockError
            )
        )
    }

    /// Where the caller should go after this failure.
    ///
    /// A missing hotel is a broken reference: the current form cannot be
    /// completed, so the caller leaves for the hotel list. Everything else
    /// keeps the user on the form.
    pub fn next_view(&self) -> View {
        match self {
            Self::Application(ApplicationError::HotelNotFound { .. }) => View::HotelList,
            _ => View::Form,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A field was blank or malformed; no request was made.
    Validation,
    /// Uniqueness or capacity rejected the submission after a fresh read.
    BusinessRule,
    NotFound,
    /// The API could not be reached, or answered with an error.
    Transport,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type InnkeepResult<T> = Result<T, InnkeepError>;
