//! PromQL query tools.
//!
//! - `prometheus_instant_query`: evaluate at a single point in time
//! - `prometheus_range_query`: evaluate over an interval at a fixed step

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::prometheus::{PrometheusApi, QueryResult};
use crate::domains::tools::tool::PrometheusTool;

/// Parameters for instant queries.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct InstantQueryParams {
    #[schemars(description = "PromQL query string")]
    pub query: String,

    #[serde(default)]
    #[schemars(description = "Unix timestamp for query evaluation (optional, defaults to now)")]
    pub time: Option<f64>,
}

/// Instant PromQL query.
pub struct PrometheusInstantQueryTool;

impl PrometheusTool for PrometheusInstantQueryTool {
    const NAME: &'static str = "prometheus_instant_query";
    const TITLE: &'static str = "Prometheus Instant Query";
    const DESCRIPTION: &'static str = "Execute an instant PromQL query";
    const ACTION: &'static str = "executing instant query";

    type Params = InstantQueryParams;

    fn call(
        client: Arc<dyn PrometheusApi>,
        params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>> {
        async move { client.instant_query(&params.query, params.time).await }.boxed()
    }
}

/// Parameters for range queries.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RangeQueryParams {
    #[schemars(description = "PromQL query string")]
    pub query: String,

    #[schemars(description = "Start time as Unix timestamp")]
    pub start: f64,

    #[schemars(description = "End time as Unix timestamp")]
    pub end: f64,

    #[schemars(description = "Query resolution step width (e.g., '5m', '1h')")]
    pub step: String,
}

/// Range PromQL query.
pub struct PrometheusRangeQueryTool;

impl PrometheusTool for PrometheusRangeQueryTool {
    const NAME: &'static str = "prometheus_range_query";
    const TITLE: &'static str = "Prometheus Range Query";
    const DESCRIPTION: &'static str = "Execute a range PromQL query";
    const ACTION: &'static str = "executing range query";

    type Params = RangeQueryParams;

    fn call(
        client: Arc<dyn PrometheusApi>,
        params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>> {
        async move {
            client
                .range_query(&params.query, params.start, params.end, &params.step)
                .await
        }
        .boxed()
    }
}
