//! # classroom-booking
//!
//! REST API over classroom booking records stored in a relational table.
//!
//! A booking ties a time slot, a classroom, and a booker (student). The
//! service offers create, read, and delete over HTTP with JSON bodies; the
//! only conflict protection is the store's uniqueness constraint on
//! `(time, classroom)`.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── CORS header layer (api/cors)
//!     ├── REST Handlers (api/handlers)
//!     │
//!     ├── BookingRepository (persistence/)
//!     ├── StorageGateway (persistence/)
//!     │
//!     └── Relational store (PostgreSQL via sqlx AnyPool)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod shutdown;

#[cfg(test)]
pub(crate) mod testing;
