//! Tool result builders.
//!
//! Every tool answers with exactly one text block.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

/// Successful result carrying `value` as 2-space indented JSON.
pub fn json_result(value: &Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(format!("Error serializing result: {}", e)),
    }
}

/// Failed result with a human readable message.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}
