//! Startup and serving errors.
//!
//! Request handlers are infallible; these errors only arise while the
//! process configures itself, binds its listener, or runs the server loop.

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },

    /// `LOG_FORMAT` was set to something other than `text` or `json`.
    #[error("invalid LOG_FORMAT value: {value:?}")]
    InvalidLogFormat { value: String },
}

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The Prometheus recorder could not be installed.
    #[error("metrics recorder error: {0}")]
    Metrics(#[from] BuildError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
