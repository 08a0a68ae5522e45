//! Shared types for the production cloud infrastructure demo.
//!
//! - [`ServiceInfo`] and the route paths the service answers on
//! - [`Timestamp`], the UTC ISO-8601 instant carried in payloads
//! - The JSON payloads returned by each route

pub mod payload;
pub mod service;
pub mod types;

pub use payload::{EndpointMap, ExamplePayload, HealthPayload, RootPayload};
pub use service::{EXAMPLE_PATH, HEALTH_PATH, ROOT_PATH, ServiceInfo};
pub use types::Timestamp;
