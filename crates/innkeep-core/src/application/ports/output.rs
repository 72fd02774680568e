//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the remote API.
//! The `innkeep-adapters` crate provides implementations.
//!
//! ## Contract
//!
//! - "Absent" is `Ok(None)` (single records) or `Ok(vec![])` (lists).
//! - A request that fails is always `Err`, never an empty result. The room
//!   workflow relies on this: a failed room-list read must not look like a
//!   hotel without rooms.

use async_trait::async_trait;

use crate::domain::{
    Accommodation, Hotel, HotelId, HotelPayload, Room, RoomId, RoomPayload, RoomType,
};
use crate::error::InnkeepResult;

/// Port for hotel records.
///
/// Implemented by:
/// - `innkeep_adapters::HttpBackend` (production)
/// - `innkeep_adapters::InMemoryBackend` (testing)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelGateway: Send + Sync {
    /// List every hotel.
    async fn list_hotels(&self) -> InnkeepResult<Vec<Hotel>>;

    /// Fetch one hotel, including its server-maintained room total.
    async fn fetch_hotel(&self, id: HotelId) -> InnkeepResult<Option<Hotel>>;

    async fn create_hotel(&self, payload: &HotelPayload) -> InnkeepResult<Hotel>;

    async fn update_hotel(&self, id: HotelId, payload: &HotelPayload) -> InnkeepResult<Hotel>;

    async fn delete_hotel(&self, id: HotelId) -> InnkeepResult<()>;
}

/// Port for room records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomGateway: Send + Sync {
    /// All rooms of a hotel; empty when the hotel has none.
    async fn rooms_by_hotel(&self, hotel_id: HotelId) -> InnkeepResult<Vec<Room>>;

    async fn fetch_room(&self, id: RoomId) -> InnkeepResult<Option<Room>>;

    async fn create_room(&self, payload: &RoomPayload) -> InnkeepResult<Room>;

    async fn update_room(&self, id: RoomId, payload: &RoomPayload) -> InnkeepResult<Room>;

    async fn delete_room(&self, id: RoomId) -> InnkeepResult<()>;
}

/// Port for the type and accommodation catalogs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn list_types(&self) -> InnkeepResult<Vec<RoomType>>;

    async fn list_accommodations(&self) -> InnkeepResult<Vec<Accommodation>>;
}
