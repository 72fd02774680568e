// ============================================================================
// domain/error.rs - VALIDATION AND BUSINESS RULE ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

/// Whether a room submission creates a new room or replaces an existing one.
///
/// Both the uniqueness and the capacity messages are worded per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Create,
    Update,
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("created"),
            Self::Update => f.write_str("updated"),
        }
    }
}

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the form keeps the last rejection around)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("accommodation {accommodation_id} is not offered for room type {type_id}")]
    IncompatibleAccommodation {
        type_id: u64,
        accommodation_id: u64,
    },

    #[error("a room stays with its hotel: it belongs to hotel {owner}, not hotel {requested}")]
    HotelReassignment { owner: u64, requested: u64 },

    // ========================================================================
    // Business Rule Violations (409-level equivalent)
    // ========================================================================
    #[error(
        "{existing_room} already has the same type and accommodation ({type_label} - {accommodation_label}). {candidate} cannot be {kind}"
    )]
    DuplicateRoomConfiguration {
        existing_room: String,
        type_label: String,
        accommodation_label: String,
        candidate: String,
        kind: MutationKind,
    },

    #[error("{}", capacity_message(*capacity, *remaining))]
    CapacityExceeded {
        capacity: u32,
        /// Slots still free; only reported when creating.
        remaining: Option<u32>,
    },

    #[error(
        "capacity {requested} is lower than the {allocated} rooms already created for this hotel"
    )]
    CapacityBelowAllocated { requested: u32, allocated: u32 },
}

fn capacity_message(capacity: u32, remaining: Option<u32>) -> String {
    match remaining {
        Some(remaining) => format!(
            "the requested count exceeds the hotel capacity ({capacity}). {remaining} rooms are still available to create"
        ),
        None => format!("the requested count exceeds the hotel capacity ({capacity})"),
    }
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                "All fields are required".into(),
                format!("Provide a value for '{field}'"),
            ],
            Self::InvalidField { field, reason } => vec![
                format!("Check the value of '{field}'"),
                format!("Details: {reason}"),
            ],
            Self::IncompatibleAccommodation { type_id, .. } => vec![
                format!("Room type {type_id} only offers some accommodations"),
                format!("Try: innkeep catalog accommodations --type {type_id}"),
            ],
            Self::HotelReassignment { owner, .. } => vec![
                format!("Edit the room without changing its hotel ({owner})"),
                "To move it, delete it and create it in the other hotel".into(),
            ],
            Self::DuplicateRoomConfiguration { existing_room, .. } => vec![
                "Each type and accommodation pair can be used once per hotel".into(),
                format!("Pick another type or accommodation, or edit '{existing_room}' instead"),
            ],
            Self::CapacityExceeded { remaining, .. } => match remaining {
                Some(0) => vec![
                    "The hotel has no free room slots left".into(),
                    "Raise the hotel capacity first: innkeep hotels edit <id> --capacity <n>"
                        .into(),
                ],
                Some(n) => vec![format!("Request {n} rooms or fewer")],
                None => vec!["Lower the room count or raise the hotel capacity".into()],
            },
            Self::CapacityBelowAllocated { allocated, .. } => vec![
                format!("Set the capacity to at least {allocated}"),
                "Or delete rooms of this hotel first".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingRequiredField { .. }
            | Self::InvalidField { .. }
            | Self::IncompatibleAccommodation { .. }
            | Self::HotelReassignment { .. } => ErrorCategory::Validation,
            Self::DuplicateRoomConfiguration { .. }
            | Self::CapacityExceeded { .. }
            | Self::CapacityBelowAllocated { .. } => ErrorCategory::BusinessRule,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    BusinessRule,
}
