//! Request parameter types shared by the client and the tools.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scrape target state filter for the targets endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TargetState {
    #[default]
    Active,
    Dropped,
    Any,
}

impl TargetState {
    /// Query parameter value understood by Prometheus.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Dropped => "dropped",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for TargetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a Unix timestamp in seconds as a Prometheus query parameter.
pub fn format_timestamp(seconds: f64) -> String {
    seconds.to_string()
}
