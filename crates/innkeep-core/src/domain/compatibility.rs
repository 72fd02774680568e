//! Room type / accommodation compatibility registry.
//!
//! The relation is fixed business policy: it is not persisted and not
//! fetched. Each restricted room type is described exactly once by a
//! [`CompatibilityDef`]; a type with no entry accepts every accommodation.
//!
//! # Adding a Restriction
//!
//! 1. Add one [`CompatibilityDef`] entry to [`COMPATIBILITY_REGISTRY`]
//! 2. Filtering and validation derive from the registry

use crate::domain::{
    entities::Accommodation,
    value_objects::{AccommodationId, TypeId},
};

/// The accommodations a single room type may be offered with.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityDef {
    pub room_type: TypeId,
    pub accommodations: &'static [AccommodationId],
}

/// Single source of truth for type/accommodation compatibility.
pub static COMPATIBILITY_REGISTRY: &[CompatibilityDef] = &[
    CompatibilityDef {
        room_type: TypeId::new(1),
        accommodations: &[AccommodationId::new(1), AccommodationId::new(2)],
    },
    CompatibilityDef {
        room_type: TypeId::new(2),
        accommodations: &[AccommodationId::new(3), AccommodationId::new(4)],
    },
    CompatibilityDef {
        room_type: TypeId::new(3),
        accommodations: &[
            AccommodationId::new(1),
            AccommodationId::new(2),
            AccommodationId::new(3),
        ],
    },
];

/// Accommodations allowed for `room_type`, or `None` when unrestricted.
pub fn allowed_accommodations(room_type: TypeId) -> Option<&'static [AccommodationId]> {
    COMPATIBILITY_REGISTRY
        .iter()
        .find(|def| def.room_type == room_type)
        .map(|def| def.accommodations)
}

/// Whether `accommodation` may be offered with `room_type`.
pub fn is_compatible(room_type: TypeId, accommodation: AccommodationId) -> bool {
    allowed_accommodations(room_type).is_none_or(|allowed| allowed.contains(&accommodation))
}

/// The subset of `catalog` selectable for `room_type`, in catalog order.
///
/// An unset or unrestricted type yields the whole catalog.
pub fn filter_accommodations(
    room_type: Option<TypeId>,
    catalog: &[Accommodation],
) -> Vec<Accommodation> {
    match room_type.and_then(allowed_accommodations) {
        Some(allowed) => catalog
            .iter()
            .filter(|acc| allowed.contains(&acc.id))
            .cloned()
            .collect(),
        None => catalog.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Accommodation> {
        vec![
            Accommodation::new(1, "Single", ""),
            Accommodation::new(2, "Double", ""),
            Accommodation::new(3, "Triple", ""),
            Accommodation::new(4, "Quadruple", ""),
        ]
    }

    fn ids(accs: &[Accommodation]) -> Vec<u64> {
        accs.iter().map(|a| a.id.get()).collect()
    }

    #[test]
    fn known_types_are_filtered() {
        let catalog = catalog();
        assert_eq!(ids(&filter_accommodations(Some(TypeId::new(1)), &catalog)), [1, 2]);
        assert_eq!(ids(&filter_accommodations(Some(TypeId::new(2)), &catalog)), [3, 4]);
        assert_eq!(ids(&filter_accommodations(Some(TypeId::new(3)), &catalog)), [1, 2, 3]);
    }

    #[test]
    fn unknown_or_unset_type_is_permissive() {
        let catalog = catalog();
        for raw in [0, 4, 5, 99, u64::MAX] {
            assert_eq!(filter_accommodations(Some(TypeId::new(raw)), &catalog), catalog);
        }
        assert_eq!(filter_accommodations(None, &catalog), catalog);
    }

    #[test]
    fn filter_ignores_catalog_entries_outside_the_policy() {
        let mut catalog = catalog();
        catalog.push(Accommodation::new(9, "Dorm", ""));
        assert_eq!(ids(&filter_accommodations(Some(TypeId::new(3)), &catalog)), [1, 2, 3]);
        assert_eq!(filter_accommodations(Some(TypeId::new(7)), &catalog).len(), 5);
    }

    #[test]
    fn compatibility_predicate() {
        assert!(is_compatible(TypeId::new(1), AccommodationId::new(2)));
        assert!(!is_compatible(TypeId::new(1), AccommodationId::new(3)));
        assert!(!is_compatible(TypeId::new(2), AccommodationId::new(1)));
        assert!(is_compatible(TypeId::new(3), AccommodationId::new(3)));
        assert!(is_compatible(TypeId::new(8), AccommodationId::new(4)));
    }

    #[test]
    fn registry_has_one_entry_per_type() {
        for (i, def) in COMPATIBILITY_REGISTRY.iter().enumerate() {
            assert!(
                COMPATIBILITY_REGISTRY[i + 1..]
                    .iter()
                    .all(|other| other.room_type != def.room_type),
                "duplicate registry entry for type {}",
                def.room_type
            );
            assert!(!def.accommodations.is_empty());
        }
    }
}
