use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, validation::DomainValidator, value_objects::HotelId};

/// A hotel as returned by the API.
///
/// `total_rooms` is an aggregate the API maintains (the sum of `cantidad`
/// over the hotel's rooms). The client only ever compares against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: HotelId,
    #[serde(rename = "hotel")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    pub email: String,
    #[serde(rename = "pagina_web")]
    pub website: String,
    #[serde(rename = "calificacion", default)]
    pub rating: f64,
    /// Declared room capacity.
    #[serde(rename = "numero_habitaciones")]
    pub capacity: u32,
    /// Rooms actually created so far.
    #[serde(rename = "total_habitaciones", default)]
    pub total_rooms: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Hotel {
    /// Free room slots, never negative.
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.total_rooms)
    }
}

/// Unvalidated hotel fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelDraft {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub capacity: Option<u32>,
}

impl HotelDraft {
    /// Prefill a draft from an existing hotel (edit flow).
    pub fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            description: hotel.description.clone(),
            address: hotel.address.clone(),
            phone: hotel.phone.clone(),
            email: hotel.email.clone(),
            website: hotel.website.clone(),
            capacity: Some(hotel.capacity),
        }
    }

    /// Validate every field and produce the request body.
    pub fn validate(&self) -> Result<HotelPayload, DomainError> {
        DomainValidator::validate_hotel_draft(self)
    }
}

/// Request body for hotel create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelPayload {
    pub hotel: String,
    pub descripcion: String,
    pub direccion: String,
    pub telefono: String,
    pub email: String,
    pub pagina_web: String,
    pub numero_habitaciones: u32,
}

#[cfg(test)]
impl Hotel {
    pub(crate) fn fixture(id: HotelId, capacity: u32, total_rooms: u32) -> Self {
        Self {
            id,
            name: format!("Hotel {id}"),
            description: "Seaside hotel".into(),
            address: "Calle 1 #2-3".into(),
            phone: "3001234567".into(),
            email: "front@hotel.test".into(),
            website: "https://hotel.test".into(),
            rating: 0.0,
            capacity,
            total_rooms,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_api_record() {
        let json = r#"{
            "id": 1,
            "hotel": "Decameron",
            "descripcion": "All inclusive",
            "direccion": "Av. 1",
            "telefono": "555",
            "email": "info@decameron.test",
            "pagina_web": "https://decameron.test",
            "calificacion": 4.5,
            "numero_habitaciones": 42,
            "total_habitaciones": 40,
            "created_at": "2024-05-01T12:00:00.000000Z",
            "updated_at": "2024-05-02T12:00:00.000000Z"
        }"#;
        let hotel: Hotel = serde_json::from_str(json).unwrap();
        assert_eq!(hotel.name, "Decameron");
        assert_eq!(hotel.capacity, 42);
        assert_eq!(hotel.remaining_capacity(), 2);
        assert!(hotel.created_at.is_some());
    }

    #[test]
    fn remaining_capacity_saturates() {
        let hotel = Hotel::fixture(HotelId::new(1), 3, 5);
        assert_eq!(hotel.remaining_capacity(), 0);
    }

    #[test]
    fn draft_from_hotel_round_trips_capacity() {
        let hotel = Hotel::fixture(HotelId::new(1), 12, 0);
        let draft = HotelDraft::from_hotel(&hotel);
        assert_eq!(draft.capacity, Some(12));
        assert_eq!(draft.validate().unwrap().numero_habitaciones, 12);
    }
}
