//! Core error types for campus-core.
//!
//! This module defines the error hierarchy using thiserror. Calendar and
//! responder operations only fail on malformed input; configuration and
//! table loading can additionally fail on I/O and parse errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for campus-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid value (out-of-range month, unparsable date key, empty keyword)
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// The same key appeared twice where keys must be unique
    #[error("Duplicate {field}: '{value}'")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
