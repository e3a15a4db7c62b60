//! Booking repository: the five data operations over the `booking` table.

use super::StorageGateway;
use super::models::{BOOKING_COLUMNS, BookingRow, booking_from_row};
use crate::domain::{Booking, BookingId, NewBooking};
use crate::error::BookingError;

/// Parameterized SQL access to bookings.
///
/// Every method is one statement under its own deadline; nothing spans
/// calls, so there are no multi-statement transactions.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    gateway: StorageGateway,
}

impl BookingRepository {
    /// Creates a repository on top of the given gateway.
    #[must_use]
    pub const fn new(gateway: StorageGateway) -> Self {
        Self { gateway }
    }

    /// Looks up a single booking.
    ///
    /// Returns `Ok(None)` when no row has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] or [`BookingError::Timeout`] on
    /// any storage failure.
    pub async fn fetch_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingError> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM booking WHERE booking_id = $1");
        let row = self
            .gateway
            .bounded(
                "fetch_by_id",
                sqlx::query_as::<_, BookingRow>(&sql)
                    .bind(id.get())
                    .fetch_optional(self.gateway.pool()),
            )
            .await?;

        Ok(row.map(booking_from_row))
    }

    /// Returns every booking made by the given booker.
    ///
    /// An unknown booker yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] or [`BookingError::Timeout`] on
    /// any storage failure.
    pub async fn fetch_by_booker(&self, booker_id: &str) -> Result<Vec<Booking>, BookingError> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM booking WHERE booking_student_id = $1");
        let rows = self
            .gateway
            .bounded(
                "fetch_by_booker",
                sqlx::query_as::<_, BookingRow>(&sql)
                    .bind(booker_id)
                    .fetch_all(self.gateway.pool()),
            )
            .await?;

        Ok(rows.into_iter().map(booking_from_row).collect())
    }

    /// Returns all bookings, in whatever order the store produces.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] or [`BookingError::Timeout`] on
    /// any storage failure.
    pub async fn fetch_all(&self) -> Result<Vec<Booking>, BookingError> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM booking");
        let rows = self
            .gateway
            .bounded(
                "fetch_all",
                sqlx::query_as::<_, BookingRow>(&sql).fetch_all(self.gateway.pool()),
            )
            .await?;

        Ok(rows.into_iter().map(booking_from_row).collect())
    }

    /// Stores a new booking and returns the id the store assigned.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] when the store refuses the row
    /// (duplicate time and classroom, unknown classroom or booker) and
    /// [`BookingError::Timeout`] when the deadline elapses.
    pub async fn insert(&self, booking: &NewBooking) -> Result<BookingId, BookingError> {
        let id = self
            .gateway
            .bounded(
                "insert",
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO booking (booking_time, booking_classroom_id, booking_student_id) \
                     VALUES ($1, $2, $3) RETURNING booking_id",
                )
                .bind(booking.time.as_str())
                .bind(booking.classroom_id.as_str())
                .bind(booking.booker_id.as_str())
                .fetch_one(self.gateway.pool()),
            )
            .await?;

        let id = BookingId::new(id);
        tracing::info!(%id, classroom = %booking.classroom_id, "booking created");
        Ok(id)
    }

    /// Deletes the booking with the given id.
    ///
    /// Returns the number of rows removed: `0` when the id does not exist,
    /// which is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] or [`BookingError::Timeout`] on
    /// any storage failure.
    pub async fn delete_by_id(&self, id: BookingId) -> Result<u64, BookingError> {
        let result = self
            .gateway
            .bounded(
                "delete_by_id",
                sqlx::query("DELETE FROM booking WHERE booking_id = $1")
                    .bind(id.get())
                    .execute(self.gateway.pool()),
            )
            .await?;

        let removed = result.rows_affected();
        tracing::info!(%id, removed, "booking delete");
        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::testing::memory_gateway;

    fn draft(time: &str, classroom: &str, booker: &str) -> NewBooking {
        NewBooking {
            time: time.to_string(),
            classroom_id: classroom.to_string(),
            booker_id: booker.to_string(),
        }
    }

    async fn repository() -> BookingRepository {
        BookingRepository::new(memory_gateway().await)
    }

    #[tokio::test]
    async fn insert_then_fetch_returns_input_plus_id() {
        let repo = repository().await;
        let input = draft("2024-01-01", "101", "S1");

        let Ok(id) = repo.insert(&input).await else {
            panic!("insert failed");
        };
        assert_eq!(id, BookingId::new(1));

        let Ok(Some(found)) = repo.fetch_by_id(id).await else {
            panic!("booking should exist");
        };
        assert_eq!(found, input.with_id(id));
    }

    #[tokio::test]
    async fn fetch_unknown_id_is_absent() {
        let repo = repository().await;
        let result = repo.fetch_by_id(BookingId::new(404)).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn booker_without_bookings_yields_empty_list() {
        let repo = repository().await;
        let Ok(_) = repo.insert(&draft("09:00", "101", "S1")).await else {
            panic!("insert failed");
        };

        let Ok(bookings) = repo.fetch_by_booker("S2").await else {
            panic!("query failed");
        };
        assert!(bookings.is_empty());

        let Ok(bookings) = repo.fetch_by_booker("nobody").await else {
            panic!("query failed");
        };
        assert!(bookings.is_empty());
    }

    #[tokio::test]
    async fn fetch_by_booker_filters_rows() {
        let repo = repository().await;
        for input in [
            draft("09:00", "101", "S1"),
            draft("10:00", "101", "S2"),
            draft("09:00", "102", "S1"),
        ] {
            let Ok(_) = repo.insert(&input).await else {
                panic!("insert failed");
            };
        }

        let Ok(bookings) = repo.fetch_by_booker("S1").await else {
            panic!("query failed");
        };
        assert_eq!(bookings.len(), 2);
        assert!(bookings.iter().all(|b| b.booker_id == "S1"));
    }

    #[tokio::test]
    async fn fetch_all_returns_every_row() {
        let repo = repository().await;
        let Ok(empty) = repo.fetch_all().await else {
            panic!("query failed");
        };
        assert!(empty.is_empty());

        for input in [draft("09:00", "101", "S1"), draft("10:00", "102", "S2")] {
            let Ok(_) = repo.insert(&input).await else {
                panic!("insert failed");
            };
        }

        let Ok(all) = repo.fetch_all().await else {
            panic!("query failed");
        };
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_time_and_classroom_is_refused() {
        let repo = repository().await;
        let Ok(_) = repo.insert(&draft("2024-01-01", "101", "S1")).await else {
            panic!("first insert failed");
        };

        let second = repo.insert(&draft("2024-01-01", "101", "S2")).await;
        assert!(matches!(second, Err(BookingError::Storage(_))));
    }

    #[tokio::test]
    async fn concurrent_inserts_for_one_slot_admit_exactly_one() {
        let repo = repository().await;
        let first = draft("2024-01-01", "101", "S1");
        let second = draft("2024-01-01", "101", "S2");

        let (a, b) = tokio::join!(repo.insert(&first), repo.insert(&second));

        let loser = match (a, b) {
            (Ok(_), Err(loser)) | (Err(loser), Ok(_)) => loser,
            (a, b) => panic!("expected exactly one insert to succeed: {a:?} / {b:?}"),
        };
        assert!(matches!(loser, BookingError::Storage(_)));
        assert_eq!(
            loser.into_rejected().status_code(),
            axum::http::StatusCode::BAD_REQUEST
        );

        let Ok(rows) = repo.fetch_all().await else {
            panic!("fetch_all failed");
        };
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn differently_spelled_times_do_not_conflict() {
        let repo = repository().await;
        let Ok(_) = repo.insert(&draft("2024-01-01", "101", "S1")).await else {
            panic!("first insert failed");
        };
        let second = repo.insert(&draft("2024-01-01 ", "101", "S2")).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn unknown_classroom_is_refused() {
        let repo = repository().await;
        let result = repo.insert(&draft("09:00", "999", "S1")).await;
        assert!(matches!(result, Err(BookingError::Storage(_))));
    }

    #[tokio::test]
    async fn delete_missing_id_succeeds_and_keeps_other_rows() {
        let repo = repository().await;
        let Ok(id) = repo.insert(&draft("09:00", "101", "S1")).await else {
            panic!("insert failed");
        };

        let removed = repo.delete_by_id(BookingId::new(id.get() + 100)).await;
        assert!(matches!(removed, Ok(0)));

        let Ok(Some(_)) = repo.fetch_by_id(id).await else {
            panic!("existing booking should survive");
        };
    }

    #[tokio::test]
    async fn delete_existing_id_removes_row() {
        let repo = repository().await;
        let Ok(id) = repo.insert(&draft("09:00", "101", "S1")).await else {
            panic!("insert failed");
        };

        assert!(matches!(repo.delete_by_id(id).await, Ok(1)));
        assert!(matches!(repo.fetch_by_id(id).await, Ok(None)));
    }

    #[tokio::test]
    async fn closed_store_surfaces_storage_error() {
        let gateway = memory_gateway().await;
        let repo = BookingRepository::new(gateway.clone());
        gateway.close().await;

        assert!(matches!(
            repo.fetch_all().await,
            Err(BookingError::Storage(_))
        ));
        assert!(matches!(
            repo.fetch_by_id(BookingId::new(1)).await,
            Err(BookingError::Storage(_))
        ));
    }
}
