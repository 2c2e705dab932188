//! Prometheus MCP Server Library
//!
//! This crate exposes read-only Prometheus HTTP API operations as Model
//! Context Protocol (MCP) tools, so an MCP client can query a Prometheus
//! server through tool calls.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and its stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **prometheus**: the Prometheus HTTP API client
//!   - **tools**: the MCP tools forwarding to it
//!
//! # Example
//!
//! ```rust,no_run
//! use prometheus_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
