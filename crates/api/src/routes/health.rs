//! Health check endpoint.

use axum::Json;
use axum::http::StatusCode;
use common::{HEALTH_PATH, HealthPayload};

/// GET /health — liveness/readiness probe.
pub async fn check() -> (StatusCode, Json<HealthPayload>) {
    metrics::counter!("http_requests_total", "endpoint" => HEALTH_PATH).increment(1);

    let payload = HealthPayload::now();
    tracing::debug!(timestamp = %payload.timestamp, "health check");
    (StatusCode::OK, Json(payload))
}
