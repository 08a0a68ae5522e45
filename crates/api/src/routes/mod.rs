//! Route handlers.

pub mod example;
pub mod health;
pub mod metrics;
pub mod root;
