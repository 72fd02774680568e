pub mod catalog;
pub mod hotel;
pub mod room;

pub use catalog::{Accommodation, RoomType};
pub use hotel::{Hotel, HotelDraft, HotelPayload};
pub use room::{Room, RoomDraft, RoomPayload};
