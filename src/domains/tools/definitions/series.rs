//! Prometheus series tool.

use std::sync::Arc;

use chrono::Utc;
use futures::FutureExt;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::prometheus::{PrometheusApi, QueryResult};
use crate::domains::tools::tool::PrometheusTool;

/// Look-back applied when no start time is given.
pub const DEFAULT_WINDOW_SECS: f64 = 3600.0;

/// Parameters for the series tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SeriesParams {
    #[serde(rename = "match")]
    #[schemars(description = "Series selector (e.g., 'up', '{job=\"prometheus\"}')")]
    pub selector: String,

    #[serde(default)]
    #[schemars(description = "Start time as Unix timestamp (optional)")]
    pub start: Option<f64>,

    #[serde(default)]
    #[schemars(description = "End time as Unix timestamp (optional)")]
    pub end: Option<f64>,
}

impl SeriesParams {
    /// Time range with defaults resolved against `now`.
    ///
    /// Each bound is defaulted on its own: start to one hour before `now`,
    /// end to `now`.
    pub fn time_range(&self, now: f64) -> (f64, f64) {
        let start = self.start.unwrap_or(now - DEFAULT_WINDOW_SECS);
        let end = self.end.unwrap_or(now);
        (start, end)
    }
}

/// Time series matching a label selector.
pub struct PrometheusSeriesTool;

impl PrometheusTool for PrometheusSeriesTool {
    const NAME: &'static str = "prometheus_series";
    const TITLE: &'static str = "Prometheus Series";
    const DESCRIPTION: &'static str = "Get time series that match a label matcher";
    const ACTION: &'static str = "getting series";

    type Params = SeriesParams;

    fn call(
        client: Arc<dyn PrometheusApi>,
        params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>> {
        async move {
            let (start, end) = params.time_range(now_seconds());
            client.series(&params.selector, start, end).await
        }
        .boxed()
    }
}

/// Current wall-clock time as Unix seconds with millisecond precision.
fn now_seconds() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}
