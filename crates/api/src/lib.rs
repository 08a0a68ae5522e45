//! HTTP service for the production cloud infrastructure demo.
//!
//! Serves a health probe, an example endpoint and a service-info root,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod telemetry;

use axum::Router;
use axum::routing::get;
use common::{EXAMPLE_PATH, HEALTH_PATH, ROOT_PATH};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, LogFormat};
pub use error::{ConfigError, ServerError};

/// Path of the Prometheus scrape route.
pub const METRICS_PATH: &str = "/metrics";

/// Creates the Axum application router with all routes.
///
/// Unmatched paths and methods get axum's default 404/405 responses.
pub fn create_app(metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route(METRICS_PATH, get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route(ROOT_PATH, get(routes::root::get))
        .route(HEALTH_PATH, get(routes::health::check))
        .route(EXAMPLE_PATH, get(routes::example::get))
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
