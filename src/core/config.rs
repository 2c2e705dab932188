//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (optionally via a `.env` file) with fixed defaults.

use serde::{Deserialize, Serialize};

/// Default Prometheus server address.
pub const DEFAULT_PROMETHEUS_URL: &str = "http://localhost:9090";

/// Default Prometheus HTTP API base path.
pub const DEFAULT_BASE_PATH: &str = "/api/v1";

/// Main configuration structure for the MCP server.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream Prometheus server.
    pub prometheus: PrometheusConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Location of the Prometheus HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrometheusConfig {
    /// Server address, e.g. `http://localhost:9090`.
    pub endpoint: String,

    /// API path prefix appended to the endpoint, e.g. `/api/v1`.
    pub base_path: String,
}

impl Default for PrometheusConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PROMETHEUS_URL.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl PrometheusConfig {
    /// Resolve from `PROMETHEUS_URL` and `BASE_URL`.
    ///
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            endpoint: env_or("PROMETHEUS_URL", DEFAULT_PROMETHEUS_URL),
            base_path: env_or("BASE_URL", DEFAULT_BASE_PATH),
        }
    }

    /// The API root: endpoint joined with the base path.
    pub fn api_url(&self) -> String {
        let endpoint = self.endpoint.trim_end_matches('/');
        let base_path = self.base_path.trim_matches('/');
        if base_path.is_empty() {
            endpoint.to_string()
        } else {
            format!("{}/{}", endpoint, base_path)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "prometheus-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            prometheus: PrometheusConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); the Prometheus location uses `PROMETHEUS_URL`
    /// and `BASE_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.prometheus = PrometheusConfig::from_env();

        config
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
