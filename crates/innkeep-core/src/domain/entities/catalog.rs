//! Catalog records: room types and accommodations.
//!
//! Both catalogs are small and closed. They are fetched from the API but the
//! relation between them is fixed policy, see `domain::compatibility`.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AccommodationId, TypeId};

/// A room type (`tipo`), e.g. standard or suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: TypeId,
    #[serde(rename = "tipo")]
    pub label: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

/// An accommodation (`acomodacion`), i.e. how many guests a room sleeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: AccommodationId,
    #[serde(rename = "acomodacion")]
    pub label: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

impl RoomType {
    pub fn new(id: u64, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: TypeId::new(id),
            label: label.into(),
            description: description.into(),
        }
    }
}

impl Accommodation {
    pub fn new(id: u64, label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: AccommodationId::new(id),
            label: label.into(),
            description: description.into(),
        }
    }
}
