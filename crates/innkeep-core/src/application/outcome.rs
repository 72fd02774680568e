//! What the caller shows and where it goes after a use case finishes.

use std::fmt;

use crate::domain::{HotelId, MutationKind, Room};
use crate::error::InnkeepError;

/// The screen a caller should present next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Stay on the form and let the user correct it.
    Form,
    /// The list of all hotels.
    HotelList,
    /// The room list of one hotel.
    RoomList(HotelId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A user-visible message. Every outcome carries one; nothing is silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

impl From<&InnkeepError> for Notification {
    fn from(err: &InnkeepError) -> Self {
        Self::error(err.to_string())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A room that was written, plus what to tell the user and where to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomMutation {
    pub room: Room,
    pub kind: MutationKind,
    pub notification: Notification,
    pub next: View,
}

impl RoomMutation {
    pub(crate) fn new(room: Room, kind: MutationKind) -> Self {
        let message = match kind {
            MutationKind::Create => format!("Room '{}' created", room.name),
            MutationKind::Update => format!("Room '{}' updated", room.name),
        };
        let next = View::RoomList(room.hotel_id);
        Self {
            room,
            kind,
            notification: Notification::success(message),
            next,
        }
    }
}
