//! Integration tests for innkeep-core's public rule API.

use innkeep_core::domain::{
    Accommodation, AccommodationId, DomainError, Room, RoomCapacity, RoomId, RoomSlot, TypeId,
    ensure_unique, filter_accommodations,
};

fn catalog() -> Vec<Accommodation> {
    ["Single", "Double", "Triple", "Quadruple"]
        .iter()
        .zip(1..)
        .map(|(label, id)| Accommodation::new(id, *label, ""))
        .collect()
}

fn ids(options: &[Accommodation]) -> Vec<u64> {
    options.iter().map(|a| a.id.get()).collect()
}

fn existing_room() -> Room {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "habitacion": "Garden",
        "descripcion": "Ground floor",
        "cantidad": 2,
        "hotel_id": 1,
        "hotel": "Decameron",
        "tipo_id": 1,
        "tipo": "Standard",
        "acomodacion_id": 1,
        "acomodacion": "Single"
    }))
    .unwrap()
}

fn slot(ty: u64, acc: u64) -> RoomSlot {
    RoomSlot::new(TypeId::new(ty), AccommodationId::new(acc))
}

#[test]
fn test_restricted_types_offer_their_accommodations() {
    let catalog = catalog();
    assert_eq!(ids(&filter_accommodations(Some(TypeId::new(1)), &catalog)), [1, 2]);
    assert_eq!(ids(&filter_accommodations(Some(TypeId::new(2)), &catalog)), [3, 4]);
    assert_eq!(ids(&filter_accommodations(Some(TypeId::new(3)), &catalog)), [1, 2, 3]);
}

#[test]
fn test_unknown_or_unset_type_offers_everything() {
    let catalog = catalog();
    assert_eq!(filter_accommodations(None, &catalog), catalog);
    assert_eq!(filter_accommodations(Some(TypeId::new(99)), &catalog), catalog);
}

#[test]
fn test_same_pair_in_one_hotel_is_a_duplicate() {
    let rooms = vec![existing_room()];

    let err = ensure_unique(&rooms, slot(1, 1), None, "Patio").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Garden"));
    assert!(message.contains("Standard - Single"));
    assert!(message.contains("Patio"));

    assert!(ensure_unique(&rooms, slot(1, 2), None, "Patio").is_ok());
}

#[test]
fn test_a_room_never_conflicts_with_itself() {
    let rooms = vec![existing_room()];
    assert!(ensure_unique(&rooms, slot(1, 1), Some(RoomId::new(1)), "Garden").is_ok());
}

#[test]
fn test_capacity_on_create() {
    assert!(RoomCapacity::new(10, 10).check_create(1).is_err());

    let nearly_full = RoomCapacity::new(10, 9);
    assert!(nearly_full.check_create(1).is_ok());
    assert_eq!(
        nearly_full.check_create(2),
        Err(DomainError::CapacityExceeded {
            capacity: 10,
            remaining: Some(1),
        })
    );
}

#[test]
fn test_capacity_on_update_discounts_the_replaced_count() {
    let full = RoomCapacity::new(10, 10);
    assert!(full.check_update(2, 2).is_ok());
    assert!(full.check_update(2, 3).is_err());
}
