//! # Error Types
//!
//! Errors raised while loading configuration. The registry pipeline itself
//! is total: unknown dates and unavailable documents are carried as data,
//! so nothing downstream of configuration returns these.

use thiserror::Error;

/// Top-level error type for the core crate.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A configuration value is structurally valid YAML but semantically wrong.
    #[error("configuration error: {0}")]
    Config(String),

    /// A timestamp string is not valid RFC 3339.
    #[error("invalid timestamp {value:?}: {reason}")]
    Timestamp {
        /// The offending input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The configuration document could not be parsed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
