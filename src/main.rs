//! classroom-booking server entry point.
//!
//! Connects to the store and serves the booking REST API.

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use classroom_booking::api;
use classroom_booking::app_state::AppState;
use classroom_booking::config::BookingConfig;
use classroom_booking::persistence::StorageGateway;
use classroom_booking::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = BookingConfig::from_env()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(addr = %config.listen_addr, "starting classroom-booking");

    // Storage is mandatory: no store, no server
    let gateway = StorageGateway::connect(&config)
        .await
        .context("failed to open storage connection")?;

    let app = api::build_app(AppState::new(gateway.clone())).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    gateway.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}
