//! Fixed identity of the running service.

/// Static metadata describing the service.
///
/// Every field is a compile-time constant; [`ServiceInfo::CURRENT`] is the
/// only instance the service ever reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceInfo {
    /// Machine name used in response payloads.
    pub name: &'static str,
    /// Human-readable title logged at startup.
    pub title: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

impl ServiceInfo {
    pub const CURRENT: ServiceInfo = ServiceInfo {
        name: "prod-cloud-infra-demo",
        title: "Production Cloud Infrastructure Demo",
        description: "A cost-minimized reference DevOps project",
        version: "1.0.0",
    };
}

/// Path of the health check route.
pub const HEALTH_PATH: &str = "/health";

/// Path of the example data route.
pub const EXAMPLE_PATH: &str = "/api/v1/example";

/// Path of the service metadata route.
pub const ROOT_PATH: &str = "/";
