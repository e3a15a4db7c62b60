//! Storage gateway: pooled connections plus deadline-bounded calls.

use std::future::Future;
use std::time::Duration;

use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

use crate::config::BookingConfig;
use crate::error::BookingError;

/// Owns the connection pool to the relational store.
///
/// Built once at process start and handed to the repository and the
/// handlers. Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct StorageGateway {
    pool: AnyPool,
    query_timeout: Duration,
}

impl StorageGateway {
    /// Opens the pool and verifies that at least one connection can be
    /// established.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] if the URL is invalid or the store
    /// is unreachable.
    pub async fn connect(config: &BookingConfig) -> Result<Self, BookingError> {
        sqlx::any::install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(config.database_max_connections)
            .min_connections(config.database_min_connections)
            .max_lifetime(config.max_lifetime())
            .acquire_timeout(config.connect_timeout())
            .connect(&config.database_url)
            .await?;

        tracing::info!(
            max_connections = config.database_max_connections,
            max_lifetime_secs = config.database_max_lifetime_secs,
            "storage pool ready"
        );

        Ok(Self::new(pool, config.query_timeout()))
    }

    /// Wraps an existing pool.
    #[must_use]
    pub const fn new(pool: AnyPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Returns the deadline applied to each storage call.
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// Runs one storage call under a fresh deadline.
    ///
    /// Failures are logged with the operation name before being returned.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Storage`] when the call fails and
    /// [`BookingError::Timeout`] when the deadline elapses first.
    pub async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, BookingError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        match tokio::time::timeout(self.query_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(error)) => {
                tracing::error!(operation, %error, "storage call failed");
                Err(BookingError::Storage(error))
            }
            Err(_) => {
                tracing::error!(
                    operation,
                    timeout = ?self.query_timeout,
                    "storage call timed out"
                );
                Err(BookingError::Timeout {
                    operation,
                    after: self.query_timeout,
                })
            }
        }
    }

    /// Checks that the store answers a trivial query.
    ///
    /// # Errors
    ///
    /// Returns a [`BookingError`] if the store is unreachable or slow.
    pub async fn ping(&self) -> Result<(), BookingError> {
        self.bounded("ping", sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map(|_| ())
    }

    /// Closes every pooled connection. Subsequent calls fail with
    /// [`BookingError::Storage`].
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("storage pool closed");
    }
}
