//! Prometheus domain module.
//!
//! The client side of the server: the [`PrometheusApi`] operations the tools
//! forward to, and [`PrometheusClient`], their implementation over the
//! Prometheus HTTP API.

mod api;
mod client;
mod error;
mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use api::PrometheusApi;
pub use client::PrometheusClient;
pub use error::{QueryError, QueryResult};
pub use types::TargetState;
