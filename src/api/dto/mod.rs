//! Data Transfer Objects for REST request/response serialization.
//!
//! Field names follow the flat lowercase wire format (`bookingid`,
//! `bookingtime`, ...) that existing clients expect.

pub mod booking_dto;

pub use booking_dto::*;
