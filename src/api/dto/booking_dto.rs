//! Booking DTOs for the `/api/bookings` and `/api/booker` endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Booking, BookingId, NewBooking};

/// Wire representation of a stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookingDto {
    /// Storage-assigned identifier.
    #[serde(rename = "bookingid")]
    pub id: BookingId,
    /// Opaque time-slot text.
    #[serde(rename = "bookingtime")]
    pub time: String,
    /// Booked classroom.
    #[serde(rename = "bookingclassroomid")]
    pub classroom_id: String,
    /// Booking student.
    #[serde(rename = "bookingbookerid")]
    pub booker_id: String,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            time: booking.time,
            classroom_id: booking.classroom_id,
            booker_id: booking.booker_id,
        }
    }
}

/// Request body for `POST /api/bookings`.
///
/// Missing fields decode as empty strings; a `bookingid` in the body is
/// ignored because the store assigns ids.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateBookingRequest {
    /// Opaque time-slot text.
    #[serde(rename = "bookingtime")]
    pub time: String,
    /// Classroom to book.
    #[serde(rename = "bookingclassroomid")]
    pub classroom_id: String,
    /// Student making the booking.
    #[serde(rename = "bookingbookerid")]
    pub booker_id: String,
}

impl From<CreateBookingRequest> for NewBooking {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            time: req.time,
            classroom_id: req.classroom_id,
            booker_id: req.booker_id,
        }
    }
}

/// Response body for `POST /api/bookings` (201 Created).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CreateBookingResponse {
    /// Identifier of the new booking.
    #[serde(rename = "bookingid")]
    pub id: BookingId,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn booking_uses_flat_lowercase_field_names() {
        let dto = BookingDto {
            id: BookingId::new(1),
            time: "2024-01-01".to_string(),
            classroom_id: "101".to_string(),
            booker_id: "S1".to_string(),
        };
        let Ok(value) = serde_json::to_value(&dto) else {
            panic!("serialization failed");
        };
        assert_eq!(
            value,
            serde_json::json!({
                "bookingid": 1,
                "bookingtime": "2024-01-01",
                "bookingclassroomid": "101",
                "bookingbookerid": "S1",
            })
        );
    }

    #[test]
    fn create_request_tolerates_missing_and_extra_fields() {
        let Ok(req) = serde_json::from_str::<CreateBookingRequest>(
            r#"{"bookingid": 77, "bookingtime": "10:00"}"#,
        ) else {
            panic!("decode failed");
        };
        let draft = NewBooking::from(req);
        assert_eq!(draft.time, "10:00");
        assert!(draft.classroom_id.is_empty());
        assert!(draft.booker_id.is_empty());
    }

    #[test]
    fn create_response_shape() {
        let body = serde_json::to_string(&CreateBookingResponse {
            id: BookingId::new(1),
        })
        .ok();
        assert_eq!(body.as_deref(), Some(r#"{"bookingid":1}"#));
    }
}
