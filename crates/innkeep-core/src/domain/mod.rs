//! Core domain layer for Innkeep.
//!
//! This module contains pure business logic. All network and storage
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable records**: `Hotel` and `Room` are plain data, Clone + PartialEq
//! - **Explicit rules**: compatibility, capacity and uniqueness each live in
//!   their own module and are pure functions over records

pub mod capacity;
pub mod compatibility;
pub mod entities;
pub mod error;
pub mod uniqueness;
pub mod value_objects;

mod validation;

pub use entities::{
    catalog::{Accommodation, RoomType},
    hotel::{Hotel, HotelDraft, HotelPayload},
    room::{Room, RoomDraft, RoomPayload},
};

pub use capacity::RoomCapacity;
pub use compatibility::{
    COMPATIBILITY_REGISTRY, CompatibilityDef, allowed_accommodations, filter_accommodations,
    is_compatible,
};
pub use error::{DomainError, ErrorCategory, MutationKind};
pub use uniqueness::{RoomSlot, ensure_unique, find_conflict};
pub use validation::DomainValidator;
pub use value_objects::{AccommodationId, HotelId, RoomId, TypeId};
