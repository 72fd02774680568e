//! End-to-end room workflow scenarios over the in-memory backend.

use std::sync::Arc;

use innkeep_adapters::InMemoryBackend;
use innkeep_core::{
    application::{EditTarget, HotelService, RoomForm, RoomService, View},
    domain::{AccommodationId, DomainError, HotelDraft, HotelId, RoomDraft, TypeId},
    error::InnkeepError,
};

fn services(backend: &InMemoryBackend) -> (HotelService, RoomService) {
    let backend = Arc::new(backend.clone());
    (
        HotelService::new(backend.clone()),
        RoomService::new(backend.clone(), backend),
    )
}

fn hotel_draft(capacity: u32) -> HotelDraft {
    HotelDraft {
        name: "Decameron Cartagena".into(),
        description: "Beachfront".into(),
        address: "Cra. 1 #10-10".into(),
        phone: "6055555555".into(),
        email: "cartagena@decameron.test".into(),
        website: "https://decameron.test".into(),
        capacity: Some(capacity),
    }
}

fn room(hotel: HotelId, name: &str, ty: u64, acc: u64, count: u32) -> RoomDraft {
    RoomDraft {
        hotel_id: Some(hotel),
        name: name.into(),
        description: format!("{name} rooms"),
        count: Some(count),
        type_id: Some(TypeId::new(ty)),
        accommodation_id: Some(AccommodationId::new(acc)),
    }
}

async fn total_of(hotels: &HotelService, id: HotelId) -> u32 {
    hotels.get(id).await.unwrap().total_rooms
}

#[tokio::test]
async fn test_capacity_and_uniqueness_over_a_sequence_of_submissions() {
    let backend = InMemoryBackend::with_default_catalog();
    let (hotels, rooms) = services(&backend);
    let hotel = hotels.create(hotel_draft(5)).await.unwrap();

    let a = rooms.create(room(hotel.id, "A", 1, 1, 3)).await.unwrap();
    assert_eq!(a.next, View::RoomList(hotel.id));
    assert_eq!(total_of(&hotels, hotel.id).await, 3);

    let err = rooms.create(room(hotel.id, "B", 1, 1, 1)).await.unwrap_err();
    assert!(matches!(
        err,
        InnkeepError::Domain(DomainError::DuplicateRoomConfiguration { .. })
    ));
    assert_eq!(total_of(&hotels, hotel.id).await, 3);

    rooms.create(room(hotel.id, "B", 1, 2, 1)).await.unwrap();
    assert_eq!(total_of(&hotels, hotel.id).await, 4);

    let err = rooms.create(room(hotel.id, "C", 2, 3, 2)).await.unwrap_err();
    assert_eq!(
        err,
        InnkeepError::Domain(DomainError::CapacityExceeded {
            capacity: 5,
            remaining: Some(1)
        })
    );
    assert_eq!(rooms.list_for_hotel(hotel.id).await.unwrap().rooms.len(), 2);
}

#[tokio::test]
async fn test_edit_recounts_against_the_fresh_total() {
    let backend = InMemoryBackend::with_default_catalog();
    let (hotels, rooms) = services(&backend);
    let hotel = hotels.create(hotel_draft(5)).await.unwrap();
    let created = rooms.create(room(hotel.id, "A", 1, 1, 3)).await.unwrap();

    let mut form = RoomForm::for_edit(&created.room);
    form.count = Some(5);
    let target = form.editing().unwrap();
    let updated = rooms.update(target, form.to_draft()).await.unwrap();
    assert_eq!(updated.room.count, 5);
    assert_eq!(total_of(&hotels, hotel.id).await, 5);

    form.count = Some(6);
    let target = EditTarget::of(&updated.room);
    let err = rooms.update(target, form.to_draft()).await.unwrap_err();
    form.apply_rejection(&err);
    assert_eq!(form.count, None);
}

#[tokio::test]
async fn test_edit_cannot_move_a_room_into_a_full_hotel() {
    let backend = InMemoryBackend::with_default_catalog();
    let (hotels, rooms) = services(&backend);
    let roomy = hotels.create(hotel_draft(5)).await.unwrap();
    let full = hotels.create(hotel_draft(2)).await.unwrap();
    rooms.create(room(full.id, "Full", 1, 1, 2)).await.unwrap();
    let moving = rooms.create(room(roomy.id, "Garden", 1, 1, 2)).await.unwrap();

    let target = EditTarget::of(&moving.room);
    let err = rooms
        .update(target, room(full.id, "Garden", 1, 1, 2))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        InnkeepError::Domain(DomainError::HotelReassignment {
            owner: roomy.id.get(),
            requested: full.id.get(),
        })
    );
    assert_eq!(total_of(&hotels, full.id).await, 2);
    assert_eq!(total_of(&hotels, roomy.id).await, 2);
    assert_eq!(rooms.get(moving.room.id).await.unwrap().hotel_id, roomy.id);
}

#[tokio::test]
async fn test_unreachable_backend_writes_nothing() {
    let backend = InMemoryBackend::with_default_catalog();
    let (hotels, rooms) = services(&backend);
    let hotel = hotels.create(hotel_draft(5)).await.unwrap();

    backend.set_offline(true).unwrap();
    let err = rooms.create(room(hotel.id, "A", 1, 1, 1)).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.next_view(), View::Form);

    backend.set_offline(false).unwrap();
    assert!(rooms.list_for_hotel(hotel.id).await.unwrap().rooms.is_empty());
}

#[tokio::test]
async fn test_room_for_deleted_hotel_navigates_to_hotel_list() {
    let backend = InMemoryBackend::with_default_catalog();
    let (hotels, rooms) = services(&backend);
    let hotel = hotels.create(hotel_draft(5)).await.unwrap();
    rooms.create(room(hotel.id, "A", 1, 1, 1)).await.unwrap();
    hotels.delete(hotel.id).await.unwrap();

    let err = rooms.create(room(hotel.id, "B", 1, 2, 1)).await.unwrap_err();
    assert_eq!(err.next_view(), View::HotelList);
}

#[tokio::test]
async fn test_hotel_capacity_cannot_undercut_its_rooms() {
    let backend = InMemoryBackend::with_default_catalog();
    let (hotels, rooms) = services(&backend);
    let hotel = hotels.create(hotel_draft(5)).await.unwrap();
    rooms.create(room(hotel.id, "A", 3, 3, 4)).await.unwrap();

    let err = hotels.update(hotel.id, hotel_draft(3)).await.unwrap_err();
    assert!(matches!(
        err,
        InnkeepError::Domain(DomainError::CapacityBelowAllocated { allocated: 4, .. })
    ));
    assert_eq!(hotels.update(hotel.id, hotel_draft(4)).await.unwrap().capacity, 4);
}
