//! Core error types for habitcheer-core.
//!
//! Message selection itself never fails. These errors cover the fallible
//! edges around it: configuration on disk and catalog validation.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitcheer-core.
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

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
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

    /// Key does not exist in the configuration tree
    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    /// No usable data directory
    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Validation errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A message category has no strings to pick from
    #[error("Message category '{0}' is empty")]
    EmptyCategory(String),

    /// A strftime pattern that cannot render a date
    #[error("Invalid date format '{format}': {message}")]
    InvalidDateFormat { format: String, message: String },
}

impl From<toml::ser::Error> for CoreError {
    fn from(err: toml::ser::Error) -> Self {
        CoreError::Custom(format!("TOML serialization failed: {err}"))
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
