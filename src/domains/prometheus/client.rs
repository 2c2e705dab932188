//! HTTP implementation of [`PrometheusApi`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use crate::core::config::PrometheusConfig;

use super::types::format_timestamp;
use super::{PrometheusApi, QueryError, QueryResult, TargetState};

/// Longest body excerpt kept in a [`QueryError::Status`] message.
const MAX_ERROR_BODY: usize = 512;

/// Prometheus HTTP API client bound to one server.
#[derive(Debug, Clone)]
pub struct PrometheusClient {
    http: Client,
    api_url: Url,
}

impl PrometheusClient {
    /// Create a client for the API root described by `config`.
    pub fn new(config: &PrometheusConfig) -> QueryResult<Self> {
        let raw = config.api_url();
        let api_url = Url::parse(&raw).map_err(|e| QueryError::invalid_endpoint(&raw, e))?;
        if api_url.cannot_be_a_base() {
            return Err(QueryError::invalid_endpoint(raw, "not a base URL"));
        }

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, api_url })
    }

    /// The API root every request path is appended to.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn url(&self, path: &[&str]) -> QueryResult<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| QueryError::invalid_endpoint(self.api_url.as_str(), "not a base URL"))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    async fn get(&self, path: &[&str], query: &[(&str, String)]) -> QueryResult<Value> {
        let url = self.url(path)?;
        debug!(%url, ?query, "Sending Prometheus API request");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        decode_response(status, &body)
    }
}

#[async_trait]
impl PrometheusApi for PrometheusClient {
    async fn status(&self) -> QueryResult<Value> {
        self.get(&["status", "buildinfo"], &[]).await
    }

    async fn targets(&self, state: TargetState) -> QueryResult<Value> {
        self.get(&["targets"], &[("state", state.to_string())]).await
    }

    async fn label_names(&self) -> QueryResult<Value> {
        self.get(&["labels"], &[]).await
    }

    async fn label_values(&self, label_name: &str) -> QueryResult<Value> {
        self.get(&["label", label_name, "values"], &[]).await
    }

    async fn instant_query(&self, query: &str, time: Option<f64>) -> QueryResult<Value> {
        let mut params = vec![("query", query.to_string())];
        if let Some(time) = time {
            params.push(("time", format_timestamp(time)));
        }
        self.get(&["query"], &params).await
    }

    async fn range_query(
        &self,
        query: &str,
        start: f64,
        end: f64,
        step: &str,
    ) -> QueryResult<Value> {
        let params = [
            ("query", query.to_string()),
            ("start", format_timestamp(start)),
            ("end", format_timestamp(end)),
            ("step", step.to_string()),
        ];
        self.get(&["query_range"], &params).await
    }

    async fn series(&self, selector: &str, start: f64, end: f64) -> QueryResult<Value> {
        let params = [
            ("match[]", selector.to_string()),
            ("start", format_timestamp(start)),
            ("end", format_timestamp(end)),
        ];
        self.get(&["series"], &params).await
    }

    async fn alerts(&self) -> QueryResult<Value> {
        self.get(&["alerts"], &[]).await
    }
}

/// Turn a raw response into the API body or a [`QueryError`].
///
/// Prometheus reports failures as `{"status":"error","errorType":..,"error":..}`
/// alongside a 4xx/5xx status; proxies in front of it may not.
fn decode_response(status: StatusCode, body: &[u8]) -> QueryResult<Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(value) if is_api_error(&value) || !status.is_success() => Err(api_error(status, &value)),
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(QueryError::Status {
            status: status.as_u16(),
            body: excerpt(body),
        }),
        Err(e) => Err(e.into()),
    }
}

fn is_api_error(value: &Value) -> bool {
    value.get("status").and_then(Value::as_str) == Some("error")
}

fn api_error(status: StatusCode, value: &Value) -> QueryError {
    let error_type = value
        .get("errorType")
        .and_then(Value::as_str)
        .unwrap_or("error")
        .to_string();
    let message = value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string());

    QueryError::Api {
        status: status.as_u16(),
        error_type,
        message,
    }
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    match text.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PrometheusClient {
        let config = PrometheusConfig {
            endpoint: server.uri(),
            base_path: "/api/v1".to_string(),
        };
        PrometheusClient::new(&config).unwrap()
    }

    fn success(data: Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({ "status": "success", "data": data }))
    }

    #[tokio::test]
    async fn test_status_returns_body_unaltered() {
        let mock_server = MockServer::start().await;
        let body = json!({
            "status": "success",
            "data": { "version": "2.40.0", "revision": "abc123", "goVersion": "go1.19.4" }
        });

        Mock::given(method("GET"))
            .and(path("/api/v1/status/buildinfo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).status().await.unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_response_key_order_is_kept() {
        let mock_server = MockServer::start().await;
        let body = r#"{"status":"success","data":{"resultType":"vector","result":[{"metric":{"job":"node","instance":"a:9100","__name__":"up"},"value":[1700000000,"1"]}]}}"#;

        Mock::given(method("GET"))
            .and(path("/api/v1/query"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
            .mount(&mock_server)
            .await;

        let value = client_for(&mock_server)
            .instant_query("up", None)
            .await
            .unwrap();
        let result = crate::domains::tools::json_result(&value);
        let text = crate::domains::tools::testing::text_content(&result);

        assert!(text.starts_with("{\n  \"status\": \"success\",\n  \"data\""));
        assert!(text.find("\"resultType\"").unwrap() < text.find("\"result\"").unwrap());
        assert!(text.find("\"job\"").unwrap() < text.find("\"instance\"").unwrap());
        assert!(text.find("\"instance\"").unwrap() < text.find("\"__name__\"").unwrap());
    }

    #[tokio::test]
    async fn test_targets_sends_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/targets"))
            .and(query_param("state", "dropped"))
            .respond_with(success(json!({ "droppedTargets": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .targets(TargetState::Dropped)
            .await
            .unwrap();
        assert_eq!(result["data"]["droppedTargets"], json!([]));
    }

    #[tokio::test]
    async fn test_label_names() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/labels"))
            .respond_with(success(json!(["__name__", "instance", "job"])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).label_names().await.unwrap();
        assert_eq!(result["data"][0], "__name__");
    }

    #[tokio::test]
    async fn test_label_values_encodes_label_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/label/__name__/values"))
            .respond_with(success(json!(["up"])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client.label_values("__name__").await.unwrap();
        assert_eq!(result["data"], json!(["up"]));

        let url = client.url(&["label", "a/b", "values"]).unwrap();
        assert!(url.path().ends_with("/label/a%2Fb/values"));
    }

    #[tokio::test]
    async fn test_instant_query_with_and_without_time() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/query"))
            .and(query_param("query", "up"))
            .and(query_param("time", "1672531200"))
            .respond_with(success(json!({ "resultType": "vector", "result": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v1/query"))
            .and(query_param("query", "sum(rate(http_requests_total[5m]))"))
            .and(query_param_is_missing("time"))
            .respond_with(success(json!({ "resultType": "scalar", "result": [1, "0"] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let at = client.instant_query("up", Some(1672531200.0)).await.unwrap();
        assert_eq!(at["data"]["resultType"], "vector");

        let now = client
            .instant_query("sum(rate(http_requests_total[5m]))", None)
            .await
            .unwrap();
        assert_eq!(now["data"]["resultType"], "scalar");
    }

    #[tokio::test]
    async fn test_range_query_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/query_range"))
            .and(query_param("query", "up"))
            .and(query_param("start", "1672531200"))
            .and(query_param("end", "1672531500"))
            .and(query_param("step", "5m"))
            .respond_with(success(json!({ "resultType": "matrix", "result": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .range_query("up", 1672531200.0, 1672531500.0, "5m")
            .await
            .unwrap();
        assert_eq!(result["data"]["resultType"], "matrix");
    }

    #[tokio::test]
    async fn test_series_uses_match_array_param() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/series"))
            .and(query_param("match[]", r#"{job="prometheus"}"#))
            .and(query_param("start", "1672527600"))
            .and(query_param("end", "1672531200"))
            .respond_with(success(json!([{ "__name__": "up", "job": "prometheus" }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server)
            .series(r#"{job="prometheus"}"#, 1672527600.0, 1672531200.0)
            .await
            .unwrap();
        assert_eq!(result["data"][0]["job"], "prometheus");
    }

    #[tokio::test]
    async fn test_alerts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/alerts"))
            .respond_with(success(json!({ "alerts": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = client_for(&mock_server).alerts().await.unwrap();
        assert_eq!(result["data"]["alerts"], json!([]));
    }

    #[tokio::test]
    async fn test_api_error_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/query"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "status": "error",
                "errorType": "bad_data",
                "error": "parse error: unexpected end of input"
            })))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .instant_query("sum(", None)
            .await
            .unwrap_err();
        match &err {
            QueryError::Api {
                status, error_type, ..
            } => {
                assert_eq!(*status, 400);
                assert_eq!(error_type, "bad_data");
            }
            other => panic!("Expected API error, got {:?}", other),
        }
        assert!(err.to_string().contains("parse error"));
    }

    #[tokio::test]
    async fn test_non_json_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/alerts"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).alerts().await.unwrap_err();
        assert!(matches!(err, QueryError::Status { status: 502, .. }));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_invalid_json_success_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/labels"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).label_names().await.unwrap_err();
        assert!(matches!(err, QueryError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let config = PrometheusConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            base_path: "/api/v1".to_string(),
        };
        let client = PrometheusClient::new(&config).unwrap();

        let err = client.status().await.unwrap_err();
        assert!(matches!(err, QueryError::Http(_)));
        let message = err.to_string().to_lowercase();
        assert!(message.starts_with("request failed: "));
        assert!(message.contains("connection refused"), "{}", message);
    }

    #[test]
    fn test_custom_base_path() {
        let config = PrometheusConfig {
            endpoint: "http://localhost:9090/".to_string(),
            base_path: "prometheus/api/v1".to_string(),
        };
        let client = PrometheusClient::new(&config).unwrap();
        let url = client.url(&["query"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9090/prometheus/api/v1/query");
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = PrometheusConfig {
            endpoint: "not a url".to_string(),
            base_path: "/api/v1".to_string(),
        };
        let err = PrometheusClient::new(&config).unwrap_err();
        assert!(matches!(err, QueryError::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_excerpt_truncates() {
        let body = "x".repeat(MAX_ERROR_BODY + 10);
        let text = excerpt(body.as_bytes());
        assert!(text.ends_with("..."));
        assert_eq!(text.len(), MAX_ERROR_BODY + 3);
    }
}
