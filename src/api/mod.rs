//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Booking endpoints are mounted under `/api`; system endpoints live at
//! the root.

pub mod cors;
pub mod doc;
pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the servable application: every route, the CORS header layer,
/// and the shared state.
///
/// The Swagger UI is merged after the header layer so its HTML and
/// JavaScript keep their own `Content-Type`.
pub fn build_app(state: AppState) -> Router {
    let router = cors::with_cors_headers(build_router());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json")),
    );

    router.with_state(state)
}
