//! Tool definitions module.
//!
//! One [`PrometheusTool`](super::tool::PrometheusTool) per Prometheus API
//! operation, grouped by area.

pub mod alerts;
pub mod labels;
pub mod query;
pub mod series;
pub mod status;
pub mod targets;

pub use alerts::PrometheusAlertsTool;
pub use labels::{LabelValuesParams, PrometheusLabelNamesTool, PrometheusLabelValuesTool};
pub use query::{
    InstantQueryParams, PrometheusInstantQueryTool, PrometheusRangeQueryTool, RangeQueryParams,
};
pub use series::{PrometheusSeriesTool, SeriesParams};
pub use status::PrometheusStatusTool;
pub use targets::{PrometheusTargetsTool, TargetsParams};
