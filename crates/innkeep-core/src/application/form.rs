//! Room form state.
//!
//! The form holds what the user has entered so far. The accommodation
//! options are always derived from the selected type and the catalog, and
//! rejections reset the fields they concern.

use crate::domain::{
    Accommodation, AccommodationId, DomainError, HotelId, Room, RoomDraft, RoomId, TypeId,
    filter_accommodations, is_compatible,
};
use crate::error::InnkeepError;

/// The room being edited, with the hotel and count it had when the form was
/// opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTarget {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub previous_count: u32,
}

impl EditTarget {
    pub fn of(room: &Room) -> Self {
        Self {
            room_id: room.id,
            hotel_id: room.hotel_id,
            previous_count: room.count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomForm {
    hotel_id: Option<HotelId>,
    pub name: String,
    pub description: String,
    pub count: Option<u32>,
    selected_type: Option<TypeId>,
    selected_accommodation: Option<AccommodationId>,
    editing: Option<EditTarget>,
}

impl RoomForm {
    /// An empty form for a new room of `hotel_id`.
    pub fn for_create(hotel_id: HotelId) -> Self {
        Self {
            hotel_id: Some(hotel_id),
            ..Self::default()
        }
    }

    /// A form prefilled from `room`.
    pub fn for_edit(room: &Room) -> Self {
        Self {
            hotel_id: Some(room.hotel_id),
            name: room.name.clone(),
            description: room.description.clone(),
            count: Some(room.count),
            selected_type: Some(room.type_id),
            selected_accommodation: Some(room.accommodation_id),
            editing: Some(EditTarget::of(room)),
        }
    }

    pub fn hotel_id(&self) -> Option<HotelId> {
        self.hotel_id
    }

    /// Choose the hotel of a new room. An edited room keeps its hotel.
    pub fn set_hotel(&mut self, hotel_id: HotelId) -> Result<(), DomainError> {
        match self.editing {
            Some(target) if target.hotel_id != hotel_id => Err(DomainError::HotelReassignment {
                owner: target.hotel_id.get(),
                requested: hotel_id.get(),
            }),
            _ => {
                self.hotel_id = Some(hotel_id);
                Ok(())
            }
        }
    }

    pub fn selected_type(&self) -> Option<TypeId> {
        self.selected_type
    }

    pub fn selected_accommodation(&self) -> Option<AccommodationId> {
        self.selected_accommodation
    }

    pub fn editing(&self) -> Option<EditTarget> {
        self.editing
    }

    /// Change the room type. A selected accommodation that the new type does
    /// not offer is cleared.
    pub fn select_type(&mut self, room_type: Option<TypeId>) {
        self.selected_type = room_type;
        if let (Some(ty), Some(acc)) = (room_type, self.selected_accommodation) {
            if !is_compatible(ty, acc) {
                self.selected_accommodation = None;
            }
        }
    }

    pub fn select_accommodation(&mut self, accommodation: Option<AccommodationId>) {
        self.selected_accommodation = accommodation;
    }

    /// Accommodations offered for the current type.
    pub fn accommodation_options(&self, catalog: &[Accommodation]) -> Vec<Accommodation> {
        filter_accommodations(self.selected_type, catalog)
    }

    /// Reset the fields a rejected submission was about.
    pub fn apply_rejection(&mut self, err: &InnkeepError) {
        match err {
            InnkeepError::Domain(DomainError::DuplicateRoomConfiguration { .. }) => {
                self.selected_type = None;
                self.selected_accommodation = None;
            }
            InnkeepError::Domain(DomainError::CapacityExceeded { .. }) => {
                self.count = None;
            }
            _ => {}
        }
    }

    pub fn to_draft(&self) -> RoomDraft {
        RoomDraft {
            hotel_id: self.hotel_id,
            name: self.name.clone(),
            description: self.description.clone(),
            count: self.count,
            type_id: self.selected_type,
            accommodation_id: self.selected_accommodation,
        }
    }
}
