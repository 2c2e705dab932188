//! Generic tool definition.
//!
//! Every Prometheus tool follows the same protocol: deserialize typed
//! parameters, call one [`PrometheusApi`] operation, and wrap the result or
//! the failure in a single text block. A tool only declares what differs:
//! its metadata, its parameter type and the call it makes.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info};

use super::envelope::{error_result, json_result};
use super::error::ToolError;
use crate::domains::prometheus::{PrometheusApi, QueryResult};

/// A Prometheus operation exposed as an MCP tool.
pub trait PrometheusTool: 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Display title shown to clients.
    const TITLE: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// What the tool was doing, completing `"Error <action>: <cause>"`.
    const ACTION: &'static str;

    /// Typed parameters; their JSON schema is the tool's input schema.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Apply defaults and make exactly one Prometheus call.
    fn call(
        client: Arc<dyn PrometheusApi>,
        params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>>;
}

/// Parameters of tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct EmptyParams {}

/// Create a Tool model for `T` (metadata).
pub fn to_tool<T: PrometheusTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: input_schema::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: Some(T::TITLE.to_string()),
    }
}

/// Object schema for `P`, always with a `properties` map.
///
/// schemars leaves it out for parameterless structs, and some clients
/// reject object schemas without it.
fn input_schema<P: JsonSchema + 'static>() -> Arc<JsonObject> {
    let mut schema = cached_schema_for_type::<P>();
    if !schema.contains_key("properties") {
        Arc::make_mut(&mut schema)
            .insert("properties".to_string(), Value::Object(JsonObject::new()));
    }
    schema
}

/// Deserialize raw arguments into `T::Params`.
pub fn parse_params<T: PrometheusTool>(arguments: JsonObject) -> Result<T::Params, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))
}

/// Run `T` with already validated parameters.
///
/// Prometheus failures never escape: they become an error result.
pub async fn execute<T: PrometheusTool>(
    client: Arc<dyn PrometheusApi>,
    params: T::Params,
) -> CallToolResult {
    info!(tool = T::NAME, "Tool called");

    match T::call(client, params).await {
        Ok(value) => json_result(&value),
        Err(e) => {
            error!(tool = T::NAME, "Prometheus request failed: {}", e);
            error_result(format!("Error {}: {}", T::ACTION, e))
        }
    }
}

/// Validate raw arguments, then run `T`.
pub async fn dispatch<T: PrometheusTool>(
    client: Arc<dyn PrometheusApi>,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    let params = parse_params::<T>(arguments)?;
    Ok(execute::<T>(client, params).await)
}

/// Create a ToolRoute for `T` bound to `client`.
pub fn create_route<T, S>(client: Arc<dyn PrometheusApi>) -> ToolRoute<S>
where
    T: PrometheusTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let arguments = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move {
            dispatch::<T>(client, arguments)
                .await
                .map_err(McpError::from)
        }
        .boxed()
    })
}
