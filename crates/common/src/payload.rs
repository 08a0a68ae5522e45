//! JSON bodies returned by the service routes.
//!
//! Field declaration order is the order keys appear on the wire.

use serde::Serialize;

use crate::service::{EXAMPLE_PATH, HEALTH_PATH, ServiceInfo};
use crate::types::Timestamp;

const HEALTHY: &str = "healthy";
const EXAMPLE_MESSAGE: &str = "Hello from production cloud infrastructure demo!";

/// Body of `GET /health`, used by liveness and readiness probes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    pub timestamp: Timestamp,
    pub service: &'static str,
}

impl HealthPayload {
    pub fn now() -> Self {
        Self::at(Timestamp::now())
    }

    pub fn at(timestamp: Timestamp) -> Self {
        Self {
            status: HEALTHY,
            timestamp,
            service: ServiceInfo::CURRENT.name,
        }
    }
}

/// Body of `GET /api/v1/example`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamplePayload {
    pub message: &'static str,
    pub endpoint: &'static str,
    pub timestamp: Timestamp,
}

impl ExamplePayload {
    pub fn now() -> Self {
        Self::at(Timestamp::now())
    }

    pub fn at(timestamp: Timestamp) -> Self {
        Self {
            message: EXAMPLE_MESSAGE,
            endpoint: EXAMPLE_PATH,
            timestamp,
        }
    }
}

/// Labels mapped to the routes advertised by the root payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointMap {
    pub health: &'static str,
    pub example: &'static str,
}

/// Body of `GET /`. Carries no timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootPayload {
    pub service: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointMap,
}

impl RootPayload {
    pub fn new() -> Self {
        let info = ServiceInfo::CURRENT;
        Self {
            service: info.name,
            version: info.version,
            endpoints: EndpointMap {
                health: HEALTH_PATH,
                example: EXAMPLE_PATH,
            },
        }
    }
}

impl Default for RootPayload {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_timestamp() -> Timestamp {
        Timestamp::parse("2024-01-01T00:00:00.000000").unwrap()
    }

    #[test]
    fn health_payload_wire_shape() {
        let json = serde_json::to_string(&HealthPayload::at(fixed_timestamp())).unwrap();
        assert_eq!(
            json,
            r#"{"status":"healthy","timestamp":"2024-01-01T00:00:00.000000","service":"prod-cloud-infra-demo"}"#
        );
    }

    #[test]
    fn example_payload_wire_shape() {
        let json = serde_json::to_string(&ExamplePayload::at(fixed_timestamp())).unwrap();
        assert_eq!(
            json,
            r#"{"message":"Hello from production cloud infrastructure demo!","endpoint":"/api/v1/example","timestamp":"2024-01-01T00:00:00.000000"}"#
        );
    }

    #[test]
    fn root_payload_wire_shape() {
        let json = serde_json::to_string(&RootPayload::new()).unwrap();
        assert_eq!(
            json,
            r#"{"service":"prod-cloud-infra-demo","version":"1.0.0","endpoints":{"health":"/health","example":"/api/v1/example"}}"#
        );
    }

    #[test]
    fn payloads_differ_only_by_timestamp() {
        let first = HealthPayload::now();
        let second = HealthPayload::now();
        assert!(second.timestamp >= first.timestamp);
        assert_eq!(
            HealthPayload {
                timestamp: first.timestamp,
                ..second
            },
            first
        );
    }

    #[test]
    fn root_payload_is_constant() {
        assert_eq!(RootPayload::new(), RootPayload::default());
    }
}
