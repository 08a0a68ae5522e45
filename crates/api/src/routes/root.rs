//! Service metadata endpoint.

use axum::Json;
use axum::http::StatusCode;
use common::{ROOT_PATH, RootPayload};

/// GET / — service name, version and the routes it exposes.
pub async fn get() -> (StatusCode, Json<RootPayload>) {
    metrics::counter!("http_requests_total", "endpoint" => ROOT_PATH).increment(1);
    (StatusCode::OK, Json(RootPayload::new()))
}
