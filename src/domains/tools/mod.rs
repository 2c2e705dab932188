//! Tools domain module.
//!
//! The eight Prometheus tools exposed over MCP. Each is a passthrough:
//! validate parameters, call one Prometheus API operation, return the
//! response as JSON text or an error result.
//!
//! ## Architecture
//!
//! - `tool.rs` - the generic tool protocol (`PrometheusTool`)
//! - `definitions/` - individual tools
//! - `envelope.rs` - result builders
//! - `router.rs` - rmcp ToolRouter builder for the server
//! - `registry.rs` - tool listing and dispatch by name
//! - `error.rs` - tool-specific error types

pub mod definitions;
mod envelope;
mod error;
mod registry;
pub mod router;
pub mod tool;

#[cfg(test)]
pub(crate) mod testing;

pub use envelope::{error_result, json_result};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
pub use tool::PrometheusTool;
