//! Error types for Herald

use std::path::PathBuf;
use thiserror::Error;

use herald_api::ApiError;

use crate::config::Setting;

/// Result type alias using HeraldError
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Main error type for Herald operations
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Transport and protocol errors from the release endpoint
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The endpoint accepted the request but returned no release id
    #[error("No release ID in response: {response}")]
    MissingReleaseId { response: String },

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required settings are absent
    #[error("Missing required configuration:{}", list_missing(.0))]
    Missing(Vec<Setting>),

    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

fn list_missing(settings: &[Setting]) -> String {
    settings
        .iter()
        .map(|s| format!("\n  - {}", s))
        .collect()
}
