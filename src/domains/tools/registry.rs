//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The list of available tools and their metadata
//! - Direct dispatch of tool calls by name

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::definitions::{
    PrometheusAlertsTool, PrometheusInstantQueryTool, PrometheusLabelNamesTool,
    PrometheusLabelValuesTool, PrometheusRangeQueryTool, PrometheusSeriesTool,
    PrometheusStatusTool, PrometheusTargetsTool,
};
use super::error::ToolError;
use super::tool::{PrometheusTool, dispatch, to_tool};
use crate::domains::prometheus::PrometheusApi;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - every Prometheus tool bound to one client.
///
/// Built once at startup and never modified.
pub struct ToolRegistry {
    client: Arc<dyn PrometheusApi>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<dyn PrometheusApi>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            PrometheusStatusTool::NAME,
            PrometheusTargetsTool::NAME,
            PrometheusLabelNamesTool::NAME,
            PrometheusLabelValuesTool::NAME,
            PrometheusInstantQueryTool::NAME,
            PrometheusRangeQueryTool::NAME,
            PrometheusSeriesTool::NAME,
            PrometheusAlertsTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<PrometheusStatusTool>(),
            to_tool::<PrometheusTargetsTool>(),
            to_tool::<PrometheusLabelNamesTool>(),
            to_tool::<PrometheusLabelValuesTool>(),
            to_tool::<PrometheusInstantQueryTool>(),
            to_tool::<PrometheusRangeQueryTool>(),
            to_tool::<PrometheusSeriesTool>(),
            to_tool::<PrometheusAlertsTool>(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let client = self.client.clone();
        match name {
            PrometheusStatusTool::NAME => dispatch::<PrometheusStatusTool>(client, arguments).await,
            PrometheusTargetsTool::NAME => {
                dispatch::<PrometheusTargetsTool>(client, arguments).await
            }
            PrometheusLabelNamesTool::NAME => {
                dispatch::<PrometheusLabelNamesTool>(client, arguments).await
            }
            PrometheusLabelValuesTool::NAME => {
                dispatch::<PrometheusLabelValuesTool>(client, arguments).await
            }
            PrometheusInstantQueryTool::NAME => {
                dispatch::<PrometheusInstantQueryTool>(client, arguments).await
            }
            PrometheusRangeQueryTool::NAME => {
                dispatch::<PrometheusRangeQueryTool>(client, arguments).await
            }
            PrometheusSeriesTool::NAME => dispatch::<PrometheusSeriesTool>(client, arguments).await,
            PrometheusAlertsTool::NAME => dispatch::<PrometheusAlertsTool>(client, arguments).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
