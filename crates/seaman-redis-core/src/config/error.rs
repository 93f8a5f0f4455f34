//! Error types for configuration operations

use thiserror::Error;

/// Errors that can occur while loading or validating plugin configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config from {path}: {source}")]
    LoadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid value '{value}' for '{field}': must be one of {choices}")]
    InvalidChoice {
        field: String,
        value: String,
        choices: String,
    },

    #[error("Value {value} for '{field}' is out of range ({min}-{max})")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("Failed to convert validated config: {0}")]
    ConversionError(#[from] serde_json::Error),

    #[error("Failed to determine config directory")]
    ConfigDirError,
}

impl ConfigError {
    /// Name of the schema field this error refers to, if any
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidType { field, .. }
            | ConfigError::InvalidChoice { field, .. }
            | ConfigError::OutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
