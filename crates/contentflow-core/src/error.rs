//! Error types for the content workflow domain.
//!
//! Defines `CoreError` as the primary error type for all fallible
//! operations within `contentflow-core`. The template engine itself is
//! infallible; errors here come from configuration and persistence.

use thiserror::Error;

/// Error type for contentflow-core operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An I/O error from file system operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A YAML serialization/deserialization error.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// A configuration error (invalid or missing config).
    #[error("Config error: {0}")]
    ConfigError(String),
}
