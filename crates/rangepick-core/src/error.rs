//! Core error types for rangepick-core.
//!
//! The selection engine itself never fails: bad dates degrade to the invalid
//! [`DateValue`](crate::DateValue), bad bounds to the default range, and an
//! incomplete selection simply keeps confirm disabled. Only loading picker
//! options from text or disk can fail, and those failures are described here.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rangepick-core.
#[derive(Error, Debug)]
pub enum PickerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load picker options from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse picker options: {0}")]
    ParseFailed(String),
}

/// Result type alias for PickerError
pub type Result<T, E = PickerError> = std::result::Result<T, E>;
