//! Example data endpoint.

use axum::Json;
use axum::http::StatusCode;
use common::{EXAMPLE_PATH, ExamplePayload};

/// GET /api/v1/example — returns a fixed greeting stamped with the current time.
pub async fn get() -> (StatusCode, Json<ExamplePayload>) {
    metrics::counter!("http_requests_total", "endpoint" => EXAMPLE_PATH).increment(1);

    let payload = ExamplePayload::now();
    tracing::debug!(timestamp = %payload.timestamp, "example requested");
    (StatusCode::OK, Json(payload))
}
