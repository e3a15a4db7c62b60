//! The booking entity: a time slot, a classroom, and a booker.

use super::BookingId;

/// A persisted booking.
///
/// `classroom_id` and `booker_id` reference rows in external classroom and
/// student tables; referential integrity and the `(time, classroom_id)`
/// uniqueness rule are enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// Storage-assigned identifier.
    pub id: BookingId,
    /// Opaque time-slot text (up to 20 characters). Compared by string
    /// equality only, so two spellings of one instant never conflict.
    pub time: String,
    /// Identifier of the booked classroom.
    pub classroom_id: String,
    /// Identifier of the student who made the booking.
    pub booker_id: String,
}

/// A booking that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewBooking {
    /// Opaque time-slot text.
    pub time: String,
    /// Identifier of the booked classroom.
    pub classroom_id: String,
    /// Identifier of the booking student.
    pub booker_id: String,
}

impl NewBooking {
    /// Attaches the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: BookingId) -> Booking {
        Booking {
            id,
            time: self.time,
            classroom_id: self.classroom_id,
            booker_id: self.booker_id,
        }
    }
}
