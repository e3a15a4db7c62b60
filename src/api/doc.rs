//! OpenAPI document assembled from the handler annotations.

use utoipa::OpenApi;

use crate::api::dto::{BookingDto, CreateBookingRequest, CreateBookingResponse};
use crate::api::handlers::{booker, booking, bookings, system};

/// API documentation root.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        bookings::list_bookings,
        bookings::create_booking,
        booking::get_booking,
        booking::delete_booking,
        booker::list_booker_bookings,
        system::health_handler,
    ),
    components(schemas(BookingDto, CreateBookingRequest, CreateBookingResponse)),
    tags(
        (name = "Bookings", description = "Classroom booking records"),
        (name = "Bookers", description = "Bookings grouped by student"),
        (name = "System", description = "Operational endpoints"),
    ),
    info(
        title = "Classroom Booking API",
        description = "CRUD over classroom booking records",
        license(name = "MIT"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_booking_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/bookings",
            "/api/bookings/{id}",
            "/api/booker/{booker_id}",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
