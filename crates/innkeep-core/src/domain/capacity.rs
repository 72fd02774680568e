//! Hotel capacity checks.
//!
//! A hotel declares how many rooms it can hold (`numero_habitaciones`) and
//! the API reports how many are already created (`total_habitaciones`).
//! These checks are advisory gates before a write; they never mutate.

use crate::domain::{entities::Hotel, error::DomainError};

/// Snapshot of a hotel's capacity figures taken from a fresh read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCapacity {
    pub capacity: u32,
    pub total_created: u32,
}

impl RoomCapacity {
    pub const fn new(capacity: u32, total_created: u32) -> Self {
        Self {
            capacity,
            total_created,
        }
    }

    pub fn of(hotel: &Hotel) -> Self {
        Self::new(hotel.capacity, hotel.total_rooms)
    }

    /// Free room slots, never negative.
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.total_created)
    }

    /// Gate a new room of `count` units.
    ///
    /// Fails when `capacity < total_created + count`.
    pub fn check_create(&self, count: u32) -> Result<(), DomainError> {
        let requested = u64::from(self.total_created) + u64::from(count);
        if u64::from(self.capacity) < requested {
            return Err(DomainError::CapacityExceeded {
                capacity: self.capacity,
                remaining: Some(self.remaining()),
            });
        }
        Ok(())
    }

    /// Gate replacing a room of `previous` units with one of `count` units.
    ///
    /// Fails when `capacity < (total_created - previous) + count`.
    pub fn check_update(&self, previous: u32, count: u32) -> Result<(), DomainError> {
        let requested =
            u64::from(self.total_created.saturating_sub(previous)) + u64::from(count);
        if u64::from(self.capacity) < requested {
            return Err(DomainError::CapacityExceeded {
                capacity: self.capacity,
                remaining: None,
            });
        }
        Ok(())
    }

    /// Gate lowering the declared capacity of the hotel itself.
    pub fn check_new_capacity(&self, requested: u32) -> Result<(), DomainError> {
        if requested < self.total_created {
            return Err(DomainError::CapacityBelowAllocated {
                requested,
                allocated: self.total_created,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_on_a_full_hotel_is_rejected() {
        let cap = RoomCapacity::new(10, 10);
        assert!(cap.check_create(1).is_err());
        assert!(cap.check_create(5).is_err());
    }

    #[test]
    fn create_boundary() {
        let cap = RoomCapacity::new(10, 9);
        assert!(cap.check_create(1).is_ok());
        let err = cap.check_create(2).unwrap_err();
        assert_eq!(
            err,
            DomainError::CapacityExceeded {
                capacity: 10,
                remaining: Some(1)
            }
        );
    }

    #[test]
    fn update_with_net_zero_change_fits_a_full_hotel() {
        let cap = RoomCapacity::new(10, 10);
        assert!(cap.check_update(2, 2).is_ok());
        assert!(cap.check_update(2, 1).is_ok());
        assert_eq!(
            cap.check_update(2, 3).unwrap_err(),
            DomainError::CapacityExceeded {
                capacity: 10,
                remaining: None
            }
        );
    }

    #[test]
    fn totals_above_capacity_report_zero_remaining() {
        let cap = RoomCapacity::new(3, 5);
        assert_eq!(cap.remaining(), 0);
        assert!(matches!(
            cap.check_create(1),
            Err(DomainError::CapacityExceeded {
                remaining: Some(0),
                ..
            })
        ));
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let cap = RoomCapacity::new(u32::MAX, u32::MAX);
        assert!(cap.check_create(u32::MAX).is_err());
        assert!(cap.check_update(0, u32::MAX).is_err());
    }

    #[test]
    fn capacity_cannot_drop_below_created_rooms() {
        let cap = RoomCapacity::new(10, 4);
        assert!(cap.check_new_capacity(4).is_ok());
        assert!(cap.check_new_capacity(20).is_ok());
        assert_eq!(
            cap.check_new_capacity(3).unwrap_err(),
            DomainError::CapacityBelowAllocated {
                requested: 3,
                allocated: 4
            }
        );
    }
}
