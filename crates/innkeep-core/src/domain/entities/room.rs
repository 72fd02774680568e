use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    validation::DomainValidator,
    value_objects::{AccommodationId, HotelId, RoomId, TypeId},
};

/// A room configuration of a hotel as returned by the API.
///
/// `count` is how many physical units share this configuration. The
/// `hotel`, `type_label` and `accommodation_label` fields are display names
/// denormalized by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    #[serde(rename = "habitacion")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "cantidad")]
    pub count: u32,
    pub hotel_id: HotelId,
    #[serde(rename = "hotel", default)]
    pub hotel_name: String,
    #[serde(rename = "tipo_id")]
    pub type_id: TypeId,
    #[serde(rename = "tipo", default)]
    pub type_label: String,
    #[serde(rename = "acomodacion_id")]
    pub accommodation_id: AccommodationId,
    #[serde(rename = "acomodacion", default)]
    pub accommodation_label: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Unvalidated room fields as submitted by the user.
///
/// `None` and blank strings both count as "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomDraft {
    pub hotel_id: Option<HotelId>,
    pub name: String,
    pub description: String,
    pub count: Option<u32>,
    pub type_id: Option<TypeId>,
    pub accommodation_id: Option<AccommodationId>,
}

impl RoomDraft {
    /// Check required fields, count and type/accommodation compatibility.
    pub fn validate(&self) -> Result<RoomPayload, DomainError> {
        DomainValidator::validate_room_draft(self)
    }
}

/// Request body for room create/update. Only built from a validated draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPayload {
    pub hotel_id: HotelId,
    pub habitacion: String,
    pub descripcion: String,
    pub cantidad: u32,
    pub tipo_id: TypeId,
    pub acomodacion_id: AccommodationId,
}

#[cfg(test)]
impl Room {
    pub(crate) fn fixture(
        id: RoomId,
        hotel_id: HotelId,
        type_id: TypeId,
        accommodation_id: AccommodationId,
        count: u32,
    ) -> Self {
        Self {
            id,
            name: format!("Room {id}"),
            description: "Test room".into(),
            count,
            hotel_id,
            hotel_name: format!("Hotel {hotel_id}"),
            type_id,
            type_label: format!("Type {type_id}"),
            accommodation_id,
            accommodation_label: format!("Accommodation {accommodation_id}"),
            created_at: None,
            updated_at: None,
        }
    }
}
