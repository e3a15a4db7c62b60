//! Persistence layer: storage gateway and booking repository.
//!
//! [`StorageGateway`] owns an `sqlx::AnyPool` and bounds every call with a
//! deadline. [`BookingRepository`] issues the parameterized SQL for the
//! `booking` table on top of it.

pub mod booking_repository;
pub mod gateway;
pub mod models;

pub use booking_repository::BookingRepository;
pub use gateway::StorageGateway;
