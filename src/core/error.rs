//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type covering startup and transport
//! failures. Prometheus failures during tool calls never reach it: tools
//! report them in their results.

use thiserror::Error;

use super::transport::TransportError;
use crate::domains::prometheus::QueryError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The Prometheus client could not be built from the configuration.
    #[error("Prometheus error: {0}")]
    Prometheus(#[from] QueryError),

    /// Error from the MCP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: Error = QueryError::invalid_endpoint("localhost:9090", "not a base URL").into();
        assert!(matches!(err, Error::Prometheus(_)));
        assert!(err.to_string().starts_with("Prometheus error: invalid Prometheus endpoint"));

        let err: Error = TransportError::init("stdin closed").into();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.to_string().starts_with("Transport error: "));
    }
}
