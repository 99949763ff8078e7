//! Readme error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for readme operations
pub type Result<T> = std::result::Result<T, ReadmeError>;

/// Errors raised while loading or scanning a readme
#[derive(Debug, Error)]
pub enum ReadmeError {
    /// The readme exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field label could not be turned into a pattern
    #[error("Invalid field pattern: {0}")]
    Pattern(#[from] regex::Error),
}
