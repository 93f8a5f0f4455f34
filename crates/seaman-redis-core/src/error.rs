//! Unified error handling for seaman-redis-core
//!
//! A failed `redis-cli` run is not an error: it is reported as
//! [`CommandStatus::Failure`](crate::CommandStatus). Errors here cover
//! configuration problems and a broken operator prompt.

use thiserror::Error;

use crate::config::ConfigError;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The cluster's node ports would run past the end of the port range
    #[error("Cluster base port {base} leaves no room for {nodes} consecutive ports")]
    PortRangeExceeded { base: u16, nodes: u16 },

    /// The operator prompt could not be read
    #[error("Failed to read confirmation: {0}")]
    Confirmation(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
