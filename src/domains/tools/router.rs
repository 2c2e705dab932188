//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each tool's route comes from the generic [`create_route`], bound to the
//! shared Prometheus client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    PrometheusAlertsTool, PrometheusInstantQueryTool, PrometheusLabelNamesTool,
    PrometheusLabelValuesTool, PrometheusRangeQueryTool, PrometheusSeriesTool,
    PrometheusStatusTool, PrometheusTargetsTool,
};
use super::tool::create_route;
use crate::domains::prometheus::PrometheusApi;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<dyn PrometheusApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<PrometheusStatusTool, S>(client.clone()))
        .with_route(create_route::<PrometheusTargetsTool, S>(client.clone()))
        .with_route(create_route::<PrometheusLabelNamesTool, S>(client.clone()))
        .with_route(create_route::<PrometheusLabelValuesTool, S>(client.clone()))
        .with_route(create_route::<PrometheusInstantQueryTool, S>(client.clone()))
        .with_route(create_route::<PrometheusRangeQueryTool, S>(client.clone()))
        .with_route(create_route::<PrometheusSeriesTool, S>(client.clone()))
        .with_route(create_route::<PrometheusAlertsTool, S>(client))
}
