//! Prometheus alerts tool.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::domains::prometheus::{PrometheusApi, QueryResult};
use crate::domains::tools::tool::{EmptyParams, PrometheusTool};

/// Alerts currently firing or pending.
pub struct PrometheusAlertsTool;

impl PrometheusTool for PrometheusAlertsTool {
    const NAME: &'static str = "prometheus_alerts";
    const TITLE: &'static str = "Prometheus Alerts";
    const DESCRIPTION: &'static str = "Get active alerts from Prometheus";
    const ACTION: &'static str = "getting alerts";

    type Params = EmptyParams;

    fn call(
        client: Arc<dyn PrometheusApi>,
        _params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>> {
        async move { client.alerts().await }.boxed()
    }
}
