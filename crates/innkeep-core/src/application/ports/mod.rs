//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `innkeep-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `HotelGateway`: hotel CRUD against the API
//!   - `RoomGateway`: room CRUD and per-hotel room listing
//!   - `CatalogGateway`: room type and accommodation catalogs
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CatalogGateway, HotelGateway, RoomGateway};

#[cfg(test)]
pub use output::{MockCatalogGateway, MockHotelGateway, MockRoomGateway};
