//! Domain layer: booking identity and the booking entity.

pub mod booking;
pub mod booking_id;

pub use booking::{Booking, NewBooking};
pub use booking_id::BookingId;
