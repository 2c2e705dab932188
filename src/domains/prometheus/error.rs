//! Prometheus client error types.

use thiserror::Error;

/// Result type for Prometheus API calls.
pub type QueryResult<T> = Result<T, QueryError>;

/// Failure of a remote Prometheus call.
///
/// Tool handlers do not branch on the variant; it only shapes the message
/// reported back to the client.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The request could not be sent or the response body could not be read.
    #[error("request failed: {}", with_causes(.0))]
    Http(#[from] reqwest::Error),

    /// Prometheus answered with an API error body.
    #[error("{error_type} (HTTP {status}): {message}")]
    Api {
        status: u16,
        error_type: String,
        message: String,
    },

    /// Non-success HTTP status without a decodable API error body.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// A success response whose body is not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured endpoint is not a valid base URL.
    #[error("invalid Prometheus endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl QueryError {
    /// Create an invalid endpoint error.
    pub fn invalid_endpoint(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// `err` followed by every error in its source chain.
///
/// reqwest's own message omits the cause (refused connection, DNS failure,
/// timeout).
fn with_causes(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
