//! Domain value objects: identifiers for hotels, rooms, types and
//! accommodations.
//!
//! # Design
//!
//! Every identifier is a `Copy` newtype over `u64` that serializes as a bare
//! number, so the wire format stays `{"hotel_id": 3}` while the type system
//! keeps a `TypeId` from being passed where an `AccommodationId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u64>()
                    .map(Self)
                    .map_err(|_| DomainError::InvalidField {
                        field: $label,
                        reason: format!("'{s}' is not a valid identifier"),
                    })
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(
    /// Identifier of a hotel.
    HotelId,
    "hotel_id"
);

define_id!(
    /// Identifier of a room configuration.
    RoomId,
    "room_id"
);

define_id!(
    /// Identifier of a room type (`tipo`).
    TypeId,
    "type_id"
);

define_id!(
    /// Identifier of an accommodation (`acomodacion`).
    AccommodationId,
    "accommodation_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(" 3 ".parse::<TypeId>().unwrap(), TypeId::new(3));
    }

    #[test]
    fn parse_error_names_field() {
        let err = "x".parse::<AccommodationId>().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidField {
                field: "accommodation_id",
                ..
            }
        ));
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&HotelId::new(9)).unwrap();
        assert_eq!(json, "9");
    }
}
