//! Label discovery tools.
//!
//! - `prometheus_label_names`: every label name in the TSDB
//! - `prometheus_label_values`: every value of one label (`__name__` lists metrics)

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::domains::prometheus::{PrometheusApi, QueryResult};
use crate::domains::tools::tool::{EmptyParams, PrometheusTool};

/// All label names.
pub struct PrometheusLabelNamesTool;

impl PrometheusTool for PrometheusLabelNamesTool {
    const NAME: &'static str = "prometheus_label_names";
    const TITLE: &'static str = "Prometheus Label Names";
    const DESCRIPTION: &'static str = "Get all available label names";
    const ACTION: &'static str = "getting label names";

    type Params = EmptyParams;

    fn call(
        client: Arc<dyn PrometheusApi>,
        _params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>> {
        async move { client.label_names().await }.boxed()
    }
}

/// Parameters for the label values tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct LabelValuesParams {
    #[serde(rename = "labelName")]
    #[schemars(
        description = "The label name to get values for (e.g., '__name__' for all metrics)"
    )]
    pub label_name: String,
}

/// All values of one label.
pub struct PrometheusLabelValuesTool;

impl PrometheusTool for PrometheusLabelValuesTool {
    const NAME: &'static str = "prometheus_label_values";
    const TITLE: &'static str = "Prometheus Label Values";
    const DESCRIPTION: &'static str = "Get all values for a specific label name";
    const ACTION: &'static str = "getting label values";

    type Params = LabelValuesParams;

    fn call(
        client: Arc<dyn PrometheusApi>,
        params: Self::Params,
    ) -> BoxFuture<'static, QueryResult<Value>> {
        async move { client.label_values(&params.label_name).await }.boxed()
    }
}
