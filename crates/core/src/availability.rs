//! # Availability Predicate
//!
//! Decides whether a requested (date, hour) pair is free by scanning the list
//! of busy slots for an exact match. The comparison is plain string equality:
//! no normalization, no time-zone handling and no duration overlap. A
//! service's duration is ignored, so a 30 minute booking at `14:00` does not
//! block a `14:15` request.
//!
//! The predicate itself never validates its inputs. Malformed strings cannot
//! match a seeded slot and are therefore reported as free; format checks live
//! at the adapter boundary ([`AvailabilityRequest::validate`]).

use crate::models::slot::{AvailabilityRequest, AvailabilityStatus, BusySlot};

/// Returns `true` when no slot in `slots` matches both `date` and `hour`.
///
/// Linear in the number of slots, stops at the first match.
pub fn check_availability(slots: &[BusySlot], date: &str, hour: &str) -> bool {
    !slots.iter().any(|slot| slot.matches(date, hour))
}

/// The set of already booked slots.
///
/// Built once at start-up and shared read-only by every adapter, usually
/// behind an `Arc`. It is never mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusySchedule {
    slots: Vec<BusySlot>,
}

impl BusySchedule {
    pub fn new(slots: Vec<BusySlot>) -> Self {
        Self { slots }
    }

    /// The fixed seed list the service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            BusySlot::new("2025-10-20", "14:00"),
            BusySlot::new("2025-10-20", "15:00"),
        ])
    }

    pub fn slots(&self) -> &[BusySlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_free(&self, date: &str, hour: &str) -> bool {
        check_availability(&self.slots, date, hour)
    }

    pub fn status(&self, request: &AvailabilityRequest) -> AvailabilityStatus {
        AvailabilityStatus::from_free(self.is_free(&request.date, &request.hour))
    }
}

impl FromIterator<BusySlot> for BusySchedule {
    fn from_iter<I: IntoIterator<Item = BusySlot>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
