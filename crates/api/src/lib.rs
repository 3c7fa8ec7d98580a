//! HTTP API server with observability for the travel planner.
//!
//! Exposes itinerary generation, public plan browsing and the user's saved
//! trips as JSON endpoints, with structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use application::TravelService;
use axum::Router;
use axum::routing::{delete, get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use repository::Repositories;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state accessible from all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: TravelService,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::system::metrics))
        .with_state(metrics_handle);

    let api_router = Router::new()
        .route("/api/itineraries", post(routes::itineraries::create))
        .route("/api/itineraries/{id}", get(routes::itineraries::get))
        .route("/api/explore", get(routes::explore::list))
        .route(
            "/api/my-trips",
            get(routes::trips::list).post(routes::trips::add),
        )
        .route("/api/my-trips/{id}", delete(routes::trips::remove))
        .layer(axum::middleware::from_fn(middleware::mock_failure))
        .with_state(state);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(api_router)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state: empty in-memory stores, the stub
/// planner, hash-derived ids and the system clock.
pub fn create_default_state() -> Arc<AppState> {
    create_state(Repositories::in_memory())
}

/// Creates application state over the given repositories.
pub fn create_state(repos: Repositories) -> Arc<AppState> {
    Arc::new(AppState {
        service: TravelService::with_defaults(repos),
    })
}
