//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output only; it opens no
//! listening sockets.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
