//! Per-hotel uniqueness of the (type, accommodation) pair.
//!
//! Two rooms of the same hotel may not share both a type and an
//! accommodation. A room is always compatible with its own slot, so the
//! edited room is excluded from the scan.

use crate::domain::{
    entities::Room,
    error::{DomainError, MutationKind},
    value_objects::{AccommodationId, RoomId, TypeId},
};

/// The (type, accommodation) pair a room occupies within its hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomSlot {
    pub type_id: TypeId,
    pub accommodation_id: AccommodationId,
}

impl RoomSlot {
    pub const fn new(type_id: TypeId, accommodation_id: AccommodationId) -> Self {
        Self {
            type_id,
            accommodation_id,
        }
    }

    pub fn of(room: &Room) -> Self {
        Self::new(room.type_id, room.accommodation_id)
    }
}

/// First room of `rooms` occupying `slot`, ignoring `editing`.
pub fn find_conflict(rooms: &[Room], slot: RoomSlot, editing: Option<RoomId>) -> Option<&Room> {
    rooms
        .iter()
        .filter(|room| Some(room.id) != editing)
        .find(|room| RoomSlot::of(room) == slot)
}

/// Reject `candidate` when another room of the hotel already holds `slot`.
pub fn ensure_unique(
    rooms: &[Room],
    slot: RoomSlot,
    editing: Option<RoomId>,
    candidate: &str,
) -> Result<(), DomainError> {
    match find_conflict(rooms, slot, editing) {
        Some(existing) => Err(DomainError::DuplicateRoomConfiguration {
            existing_room: existing.name.clone(),
            type_label: existing.type_label.clone(),
            accommodation_label: existing.accommodation_label.clone(),
            candidate: candidate.to_owned(),
            kind: if editing.is_some() {
                MutationKind::Update
            } else {
                MutationKind::Create
            },
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::HotelId;

    fn room(id: u64, ty: u64, acc: u64) -> Room {
        Room::fixture(
            RoomId::new(id),
            HotelId::new(1),
            TypeId::new(ty),
            AccommodationId::new(acc),
            1,
        )
    }

    fn slot(ty: u64, acc: u64) -> RoomSlot {
        RoomSlot::new(TypeId::new(ty), AccommodationId::new(acc))
    }

    #[test]
    fn create_conflicts_on_same_pair() {
        let rooms = vec![room(1, 1, 1)];
        let err = ensure_unique(&rooms, slot(1, 1), None, "Patio").unwrap_err();
        assert!(matches!(
            err,
            DomainError::DuplicateRoomConfiguration {
                kind: MutationKind::Create,
                ..
            }
        ));
        assert!(ensure_unique(&rooms, slot(1, 2), None, "Patio").is_ok());
        assert!(ensure_unique(&rooms, slot(2, 1), None, "Patio").is_ok());
    }

    #[test]
    fn editing_a_room_never_conflicts_with_itself() {
        let rooms = vec![room(1, 1, 1), room(2, 2, 3)];
        assert!(ensure_unique(&rooms, slot(1, 1), Some(RoomId::new(1)), "Garden").is_ok());
        assert!(ensure_unique(&rooms, slot(2, 3), Some(RoomId::new(2)), "Tower").is_ok());
    }

    #[test]
    fn editing_into_another_rooms_slot_conflicts() {
        let rooms = vec![room(1, 1, 1), room(2, 2, 3)];
        let err = ensure_unique(&rooms, slot(2, 3), Some(RoomId::new(1)), "Garden").unwrap_err();
        match err {
            DomainError::DuplicateRoomConfiguration {
                existing_room,
                kind,
                ..
            } => {
                assert_eq!(existing_room, "Room 2");
                assert_eq!(kind, MutationKind::Update);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_hotel_has_no_conflicts() {
        assert!(find_conflict(&[], slot(1, 1), None).is_none());
    }

    #[test]
    fn conflict_message_uses_existing_labels() {
        let mut existing = room(1, 1, 1);
        existing.name = "Garden".into();
        existing.type_label = "Standard".into();
        existing.accommodation_label = "Single".into();
        let err = ensure_unique(&[existing], slot(1, 1), None, "Patio").unwrap_err();
        assert!(err.to_string().contains("Garden"));
        assert!(err.to_string().contains("(Standard - Single)"));
    }
}
