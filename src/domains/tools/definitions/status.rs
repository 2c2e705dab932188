//! Prometheus status tool.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::domains::prometheus::{PrometheusApi, QueryResult};
use crate::domains::tools::tool::{EmptyParams, PrometheusTool};

/// Build and version information of the Prometheus server.
pub struct PrometheusStatusTool;

impl PrometheusTool for PrometheusStatusTool {
    const NAME: &'static str = "prometheus_status";
    const TITLE: &'static str = "Prometheus Status";
    const DESCRIPTION: &'static str = "Get Prometheus server status and configuration";
    const ACTION: &'static str = "getting Prometheus status";

    type Params = EmptyParams;

    fn call(
        client: Arc<dyn PrometheusApi>,
        _params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>> {
        async move { client.status().await }.boxed()
    }
}
