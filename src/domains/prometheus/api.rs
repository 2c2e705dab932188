//! The Prometheus operations exposed as tools.

use async_trait::async_trait;
use serde_json::Value;

use super::{QueryResult, TargetState};

/// Read-only subset of the Prometheus HTTP API.
///
/// Every operation returns the decoded response body (`{status, data, ...}`)
/// untouched. Timestamps are Unix seconds.
#[async_trait]
pub trait PrometheusApi: Send + Sync {
    /// Build information of the server (`/status/buildinfo`).
    async fn status(&self) -> QueryResult<Value>;

    /// Scrape targets in the given state.
    async fn targets(&self, state: TargetState) -> QueryResult<Value>;

    /// All label names.
    async fn label_names(&self) -> QueryResult<Value>;

    /// All values of one label.
    async fn label_values(&self, label_name: &str) -> QueryResult<Value>;

    /// Evaluate `query` at `time`, or at the server's current time when `None`.
    async fn instant_query(&self, query: &str, time: Option<f64>) -> QueryResult<Value>;

    /// Evaluate `query` over `[start, end]` at resolution `step`.
    async fn range_query(
        &self,
        query: &str,
        start: f64,
        end: f64,
        step: &str,
    ) -> QueryResult<Value>;

    /// Series matching `selector` within `[start, end]`.
    async fn series(&self, selector: &str, start: f64, end: f64) -> QueryResult<Value>;

    /// Active alerts.
    async fn alerts(&self) -> QueryResult<Value>;
}
