//! Row shapes for the `booking` table.

use crate::domain::{Booking, BookingId};

/// Column list shared by every booking `SELECT`, in [`BookingRow`] order.
pub const BOOKING_COLUMNS: &str =
    "booking_id, booking_time, booking_classroom_id, booking_student_id";

/// A raw `booking` row: `(booking_id, booking_time, booking_classroom_id,
/// booking_student_id)`.
pub type BookingRow = (i64, String, String, String);

/// Converts a raw row into the domain entity.
#[must_use]
pub fn booking_from_row((id, time, classroom_id, booker_id): BookingRow) -> Booking {
    Booking {
        id: BookingId::new(id),
        time,
        classroom_id,
        booker_id,
    }
}
