//! Application layer - use cases and port definitions.
//!
//! This layer orchestrates domain logic and defines interfaces (ports)
//! that infrastructure must implement.

pub mod error;
pub mod form;
pub mod outcome;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use form::{EditTarget, RoomForm};
pub use outcome::{Notification, NotificationLevel, RoomMutation, View};
pub use services::{CatalogService, HotelRooms, HotelService, RoomService, WorkflowStage};
