//! Recording in-memory [`PrometheusApi`] for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use super::{PrometheusApi, QueryError, QueryResult, TargetState};

/// One recorded adapter invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Status,
    Targets(TargetState),
    LabelNames,
    LabelValues(String),
    InstantQuery(String, Option<f64>),
    RangeQuery(String, f64, f64, String),
    Series(String, f64, f64),
    Alerts,
}

/// Answers every call with canned fixtures, or fails every call.
#[derive(Debug, Default)]
pub struct MockPrometheus {
    fail: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockPrometheus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(&self, call: Call, data: Value) -> QueryResult<Value> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(QueryError::Status {
                status: 503,
                body: "connection refused".to_string(),
            });
        }
        Ok(json!({ "status": "success", "data": data }))
    }
}

pub fn status_data() -> Value {
    json!({
        "version": "2.40.0",
        "revision": "abc123",
        "branch": "HEAD",
        "buildUser": "root@buildhost",
        "buildDate": "20230101-00:00:00",
        "goVersion": "go1.19.4"
    })
}

pub fn matrix_data() -> Value {
    json!({
        "resultType": "matrix",
        "result": [{
            "metric": { "__name__": "up", "instance": "localhost:9090", "job": "prometheus" },
            "values": [[1672531200, "1"], [1672531500, "1"]]
        }]
    })
}

#[async_trait]
impl PrometheusApi for MockPrometheus {
    async fn status(&self) -> QueryResult<Value> {
        self.respond(Call::Status, status_data())
    }

    async fn targets(&self, state: TargetState) -> QueryResult<Value> {
        self.respond(
            Call::Targets(state),
            json!({
                "activeTargets": [{
                    "labels": { "instance": "localhost:9090", "job": "prometheus" },
                    "scrapePool": "prometheus",
                    "scrapeUrl": "http://localhost:9090/metrics",
                    "health": "up"
                }],
                "droppedTargets": []
            }),
        )
    }

    async fn label_names(&self) -> QueryResult<Value> {
        self.respond(Call::LabelNames, json!(["__name__", "instance", "job"]))
    }

    async fn label_values(&self, label_name: &str) -> QueryResult<Value> {
        self.respond(
            Call::LabelValues(label_name.to_string()),
            json!([
                "prometheus_build_info",
                "prometheus_config_last_reload_successful"
            ]),
        )
    }

    async fn instant_query(&self, query: &str, time: Option<f64>) -> QueryResult<Value> {
        self.respond(
            Call::InstantQuery(query.to_string(), time),
            json!({
                "resultType": "vector",
                "result": [{
                    "metric": { "__name__": "up", "instance": "localhost:9090", "job": "prometheus" },
                    "value": [1672531200, "1"]
                }]
            }),
        )
    }

    async fn range_query(
        &self,
        query: &str,
        start: f64,
        end: f64,
        step: &str,
    ) -> QueryResult<Value> {
        self.respond(
            Call::RangeQuery(query.to_string(), start, end, step.to_string()),
            matrix_data(),
        )
    }

    async fn series(&self, selector: &str, start: f64, end: f64) -> QueryResult<Value> {
        self.respond(
            Call::Series(selector.to_string(), start, end),
            json!([{ "__name__": "up", "instance": "localhost:9090", "job": "prometheus" }]),
        )
    }

    async fn alerts(&self) -> QueryResult<Value> {
        self.respond(Call::Alerts, json!({ "alerts": [] }))
    }
}
