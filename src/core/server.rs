//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are routed by the `ToolRouter` built in
//! `domains/tools/router.rs`, bound to a single Prometheus client.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{CallToolResult, JsonObject, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::prometheus::{PrometheusApi, PrometheusClient};
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Everything it
/// holds is immutable after construction.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Client every tool forwards to.
    client: Arc<dyn PrometheusApi>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the Prometheus server in `config`.
    pub fn new(config: Config) -> super::Result<Self> {
        let client = PrometheusClient::new(&config.prometheus)?;
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a new MCP server around an existing client.
    pub fn with_client(config: Config, client: Arc<dyn PrometheusApi>) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(client.clone()),
            client,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name outside of an MCP session.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        ToolRegistry::new(self.client.clone())
            .call_tool(name, arguments)
            .await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(format!(
                "Read-only access to the Prometheus server at {}. Use prometheus_label_values \
                 with labelName '__name__' to discover metrics, prometheus_instant_query and \
                 prometheus_range_query to run PromQL, and prometheus_targets, \
                 prometheus_alerts and prometheus_status to inspect the server.",
                self.config.prometheus.endpoint
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
