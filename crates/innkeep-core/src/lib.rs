//! Innkeep Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Innkeep
//! hotel administration client, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           innkeep-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (RoomService, HotelService, Catalog...) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: HotelGateway, RoomGateway,    │
//! │           CatalogGateway)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    innkeep-adapters (Infrastructure)    │
//! │     (HttpBackend, InMemoryBackend)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Compatibility, Capacity, Uniqueness)   │
//! │              No I/O                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use innkeep_core::{
//!     application::RoomService,
//!     domain::{AccommodationId, HotelId, RoomDraft, TypeId},
//! };
//!
//! # async fn demo(service: RoomService) -> innkeep_core::error::InnkeepResult<()> {
//! let draft = RoomDraft {
//!     hotel_id: Some(HotelId::new(1)),
//!     name: "Ocean view".into(),
//!     description: "Balcony facing the bay".into(),
//!     count: Some(3),
//!     type_id: Some(TypeId::new(1)),
//!     accommodation_id: Some(AccommodationId::new(2)),
//! };
//! let created = service.create(draft).await?;
//! println!("{}", created.notification.message);
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, HotelService, Notification, RoomForm, RoomMutation, RoomService, View,
        ports::{CatalogGateway, HotelGateway, RoomGateway},
    };
    pub use crate::domain::{
        Accommodation, AccommodationId, Hotel, HotelDraft, HotelId, HotelPayload, Room,
        RoomDraft, RoomId, RoomPayload, RoomType, TypeId,
    };
    pub use crate::error::{InnkeepError, InnkeepResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
