//! Helpers shared by tool tests.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, RawContent};
use serde_json::Value;

use crate::domains::prometheus::PrometheusApi;
use crate::domains::prometheus::mock::MockPrometheus;

/// A recording mock and the same mock as a shared client.
pub fn mock_client(mock: MockPrometheus) -> (Arc<MockPrometheus>, Arc<dyn PrometheusApi>) {
    let mock = Arc::new(mock);
    let client: Arc<dyn PrometheusApi> = mock.clone();
    (mock, client)
}

/// Tool arguments from a JSON object literal.
pub fn args(value: Value) -> JsonObject {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected JSON object, got {}", other),
    }
}

/// Text of the single content block.
pub fn text_content(result: &CallToolResult) -> &str {
    assert_eq!(result.content.len(), 1, "Expected exactly one content block");
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

/// The single text block parsed as JSON.
pub fn json_content(result: &CallToolResult) -> Value {
    serde_json::from_str(text_content(result)).expect("Expected JSON text content")
}
