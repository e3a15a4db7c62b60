//! Booking service error types with HTTP status code mapping.
//!
//! [`BookingError`] is the central error type. Each variant maps to one
//! HTTP status code; responses carry the status only, never the internal
//! error text.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::BookingId;

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant         | HTTP Status                |
/// |-----------------|----------------------------|
/// | `NotFound`      | 404 Not Found              |
/// | `InvalidId`     | 404 Not Found              |
/// | `MalformedPath` | 400 Bad Request            |
/// | `InvalidBody`   | 400 Bad Request            |
/// | `Rejected`      | 400 Bad Request            |
/// | `Storage`       | 500 Internal Server Error  |
/// | `Timeout`       | 500 Internal Server Error  |
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// No booking with the given id exists.
    #[error("booking not found: {0}")]
    NotFound(BookingId),

    /// The id path segment is not an integer.
    #[error("invalid booking id: {0:?}")]
    InvalidId(String),

    /// The request path has missing or extra segments.
    #[error("malformed path: {0}")]
    MalformedPath(String),

    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The store refused to create the booking (constraint violation,
    /// unknown classroom or booker, timeout).
    #[error("booking rejected: {0}")]
    Rejected(String),

    /// Any other failure reported by the store.
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// A storage call exceeded its deadline.
    #[error("storage call {operation} timed out after {after:?}")]
    Timeout {
        /// Name of the repository operation.
        operation: &'static str,
        /// The deadline that elapsed.
        after: Duration,
    },
}

impl BookingError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) | Self::InvalidId(_) => StatusCode::NOT_FOUND,
            Self::MalformedPath(_) | Self::InvalidBody(_) | Self::Rejected(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Storage(_) | Self::Timeout { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Reclassifies a storage failure as a rejected write.
    ///
    /// Inserts report every storage failure to the client as a bad
    /// request; other variants pass through unchanged.
    #[must_use]
    pub fn into_rejected(self) -> Self {
        match self {
            Self::Storage(_) | Self::Timeout { .. } => Self::Rejected(self.to_string()),
            other => other,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, %status, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }
        status.into_response()
    }
}
