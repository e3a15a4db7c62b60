//! Single-booking handlers: `GET` and `DELETE /api/bookings/{id}`.

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Json, Router};

use super::method_not_allowed;
use crate::api::dto::BookingDto;
use crate::app_state::AppState;
use crate::domain::BookingId;
use crate::error::BookingError;

/// `GET /api/bookings/{id}` — Fetch one booking.
///
/// # Errors
///
/// Returns [`BookingError::InvalidId`] when the id is not an integer,
/// [`BookingError::NotFound`] when no booking has it, and a storage error
/// otherwise.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    summary = "Get a booking",
    params(
        ("id" = i64, Path, description = "Booking id"),
    ),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 404, description = "Unknown or non-numeric id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, BookingError> {
    let id = BookingId::parse_segment(&raw_id)?;
    let booking = state
        .repository
        .fetch_by_id(id)
        .await?
        .ok_or(BookingError::NotFound(id))?;

    Ok(Json(BookingDto::from(booking)))
}

/// `DELETE /api/bookings/{id}` — Remove a booking.
///
/// Deleting an id that does not exist still succeeds.
///
/// # Errors
///
/// Returns [`BookingError::InvalidId`] when the id is not an integer and a
/// storage error when the delete fails.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    summary = "Delete a booking",
    params(
        ("id" = i64, Path, description = "Booking id"),
    ),
    responses(
        (status = 200, description = "Booking removed, or never existed"),
        (status = 404, description = "Non-numeric id"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, BookingError> {
    let id = BookingId::parse_segment(&raw_id)?;
    state.repository.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}

/// Any method on `/api/bookings/{id}/...` — more than one segment after
/// the collection path.
async fn reject_nested_path(OriginalUri(uri): OriginalUri) -> BookingError {
    BookingError::MalformedPath(uri.path().to_string())
}

/// Single-booking routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings/{id}",
            get(get_booking)
                .delete(delete_booking)
                .head(method_not_allowed),
        )
        .route("/bookings/{id}/{*rest}", any(reject_nested_path))
}
