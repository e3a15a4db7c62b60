//! Type-safe booking identifier.
//!
//! [`BookingId`] wraps the integer key the store assigns on insert, so
//! booking identifiers cannot be confused with other integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::BookingError;

/// Storage-assigned identifier of a booking.
///
/// Generated by the store's auto-increment column and immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    /// Creates a `BookingId` from a raw integer.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parses a URL path segment into a `BookingId`.
    ///
    /// Accepts an optional sign and leading zeros, like any decimal
    /// integer literal.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidId`] when the segment is not a
    /// decimal integer that fits in an `i64`.
    pub fn parse_segment(segment: &str) -> Result<Self, BookingError> {
        segment
            .parse::<i64>()
            .map(Self)
            .map_err(|_| BookingError::InvalidId(segment.to_string()))
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookingId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}
