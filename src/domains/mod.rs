//! Domains module containing business logic organized by bounded contexts.
//!
//! - **prometheus**: the upstream Prometheus HTTP API client
//! - **tools**: MCP tools forwarding to that client

pub mod prometheus;
pub mod tools;
