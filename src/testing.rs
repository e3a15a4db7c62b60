//! Shared fixtures for unit tests: an in-memory SQLite store seeded with
//! classrooms `101`/`102` and students `S1`/`S2`.

#![allow(clippy::panic)]

use crate::config::BookingConfig;
use crate::persistence::StorageGateway;

const SQLITE_SCHEMA: &str = include_str!("../sql/sqlite_schema.sql");

/// Opens a single-connection in-memory store with the booking schema.
///
/// One connection only: every SQLite `:memory:` connection is its own
/// database.
pub(crate) async fn memory_gateway() -> StorageGateway {
    let config = BookingConfig {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        database_query_timeout_secs: 3,
        ..BookingConfig::default()
    };
    let Ok(gateway) = StorageGateway::connect(&config).await else {
        panic!("in-memory store should open");
    };

    for statement in SQLITE_SCHEMA
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        if let Err(error) = sqlx::query(statement).execute(gateway.pool()).await {
            panic!("schema statement failed: {error}");
        }
    }

    gateway
}
