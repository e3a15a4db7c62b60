//! Shared application state injected into all Axum handlers.

use crate::persistence::{BookingRepository, StorageGateway};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Booking data operations.
    pub repository: BookingRepository,
    /// Storage gateway, used directly for health checks.
    pub gateway: StorageGateway,
}

impl AppState {
    /// Builds the state around one storage gateway.
    #[must_use]
    pub fn new(gateway: StorageGateway) -> Self {
        Self {
            repository: BookingRepository::new(gateway.clone()),
            gateway,
        }
    }
}
