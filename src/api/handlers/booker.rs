//! Per-booker listing: `GET /api/booker/{booker_id}`.

use axum::extract::{OriginalUri, Path, State};
use axum::response::IntoResponse;
use axum::routing::{any, get};
use axum::{Json, Router};

use super::method_not_allowed;
use crate::api::dto::BookingDto;
use crate::app_state::AppState;
use crate::error::BookingError;

/// `GET /api/booker/{booker_id}` — List the bookings of one booker.
///
/// Unknown bookers get `[]`, indistinguishable from a booker with no
/// bookings.
///
/// # Errors
///
/// Returns a storage error when the query fails.
#[utoipa::path(
    get,
    path = "/api/booker/{booker_id}",
    tag = "Bookers",
    summary = "List a booker's bookings",
    params(
        ("booker_id" = String, Path, description = "Student identifier"),
    ),
    responses(
        (status = 200, description = "Bookings of the booker", body = Vec<BookingDto>),
        (status = 400, description = "Missing or extra path segment"),
        (status = 500, description = "Storage failure"),
    )
)]
pub async fn list_booker_bookings(
    State(state): State<AppState>,
    Path(booker_id): Path<String>,
) -> Result<impl IntoResponse, BookingError> {
    let bookings = state.repository.fetch_by_booker(&booker_id).await?;
    let data: Vec<BookingDto> = bookings.into_iter().map(BookingDto::from).collect();
    Ok(Json(data))
}

/// Any method on a booker path without exactly one id segment.
async fn reject_malformed_path(OriginalUri(uri): OriginalUri) -> BookingError {
    BookingError::MalformedPath(uri.path().to_string())
}

/// Booker routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/booker", any(reject_malformed_path))
        .route("/booker/", any(reject_malformed_path))
        .route(
            "/booker/{booker_id}",
            get(list_booker_bookings).head(method_not_allowed),
        )
        .route("/booker/{booker_id}/{*rest}", any(reject_malformed_path))
}
