//! Prometheus targets tool.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::prometheus::{PrometheusApi, QueryResult, TargetState};
use crate::domains::tools::tool::PrometheusTool;

/// Parameters for the targets tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct TargetsParams {
    /// Which targets to list; active when omitted.
    #[serde(default)]
    #[schemars(description = "Target state: 'active', 'dropped', or 'any'")]
    pub state: TargetState,
}

/// Scrape targets known to Prometheus.
pub struct PrometheusTargetsTool;

impl PrometheusTool for PrometheusTargetsTool {
    const NAME: &'static str = "prometheus_targets";
    const TITLE: &'static str = "Prometheus Targets";
    const DESCRIPTION: &'static str = "Get Prometheus targets (active, dropped, or any)";
    const ACTION: &'static str = "getting Prometheus targets";

    type Params = TargetsParams;

    fn call(
        client: Arc<dyn PrometheusApi>,
        params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>> {
        async move { client.targets(params.state).await }.boxed()
    }
}
