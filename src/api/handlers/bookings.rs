//! Booking collection handlers: list, create, and CORS preflight on
//! `/api/bookings`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use super::method_not_allowed;
use crate::api::dto::{BookingDto, CreateBookingRequest, CreateBookingResponse};
use crate::app_state::AppState;
use crate::domain::NewBooking;
use crate::error::BookingError;

/// `GET /api/bookings` — List every booking.
///
/// An empty table yields `[]`.
///
/// # Errors
///
/// Returns a storage error when the query fails.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    summary = "List bookings",
    description = "Returns all bookings, unpaginated and in storage order.",
    responses(
        (status = 200, description = "All bookings", body = Vec<BookingDto>),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BookingError> {
    let bookings = state.repository.fetch_all().await?;
    let data: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();
    Ok(Json(data))
}

/// `POST /api/bookings` — Create a booking.
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
///
/// # Errors
///
/// Returns [`BookingError::InvalidBody`] when the body is not a booking
/// object and [`BookingError::Rejected`] when the store refuses it.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    summary = "Create a booking",
    description = "Stores a booking. A second booking for the same time text and classroom is refused.",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = CreateBookingResponse),
        (status = 400, description = "Undecodable body, or refused by storage"),
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, BookingError> {
    let req: CreateBookingRequest =
        serde_json::from_slice(&body).map_err(|e| BookingError::InvalidBody(e.to_string()))?;

    let id = state
        .repository
        .insert(&NewBooking::from(req))
        .await
        .map_err(BookingError::into_rejected)?;

    Ok((StatusCode::CREATED, Json(CreateBookingResponse { id })))
}

/// `OPTIONS /api/bookings` — Preflight; the CORS headers do the work.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Booking collection routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/bookings",
        get(list_bookings)
            .post(create_booking)
            .options(preflight)
            .head(method_not_allowed),
    )
}
