//! REST endpoint handlers organized by resource.

pub mod booker;
pub mod booking;
pub mod bookings;
pub mod system;

use axum::Router;
use axum::http::StatusCode;

use crate::app_state::AppState;

/// Composes all booking routes; mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(bookings::routes())
        .merge(booking::routes())
        .merge(booker::routes())
}

/// Explicit `HEAD` arm for routes that serve `GET`; axum would otherwise
/// answer `HEAD` with the `GET` handler.
pub(crate) async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
