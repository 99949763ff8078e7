//! Release endpoint error types

use thiserror::Error;

/// Errors from a publish attempt
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint could not be reached
    #[error("API request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("API request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// A 2xx response whose body is not JSON
    #[error("Failed to parse API response: {source}")]
    ResponseParse {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The request body could not be serialized
    #[error("Failed to serialize request: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The configured endpoint is not a usable URL
    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl ApiError {
    /// Raw response body, when the server sent one
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { body, .. } | Self::ResponseParse { body, .. } => Some(body),
            _ => None,
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for release endpoint operations
pub type Result<T> = std::result::Result<T, ApiError>;
