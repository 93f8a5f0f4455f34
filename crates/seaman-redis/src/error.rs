//! Error types for seaman-redis
//!
//! Defines structured error types using thiserror for better error handling and user experience.

use colored::Colorize;
use seaman_redis_core::{ConfigError, CoreError};
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: Configuration error: Value 0 for 'port' is out of range (1-65535)
///
///   tip: Show the accepted values: seaman-redis config schema
/// ```
pub struct CliDiagnostic {
    message: String,
    detail: Option<String>,
    tips: Vec<String>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            detail: None,
            tips: Vec::new(),
        }
    }

    /// Add a detail line below the error message.
    pub fn detail(mut self, text: &str) -> Self {
        self.detail = Some(text.to_string());
        self
    }

    pub fn tip(mut self, description: &str) -> Self {
        self.tips.push(description.to_string());
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        if let Some(detail) = &self.detail {
            eprintln!("  {}", detail);
        }

        for description in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
        }
    }
}

/// Main error type for the seaman-redis binary
#[derive(Error, Debug)]
pub enum SeamanRedisError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        /// Config file the error came from, when known
        path: Option<String>,
    },

    #[error("Invalid config file path '{path}': {message}")]
    InvalidConfigPath { path: String, message: String },

    #[error("Failed to read confirmation: {message}")]
    Prompt { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },

    /// Stdout was closed by the reader, e.g. `seaman-redis keys | head -1`
    #[error("Output stream closed")]
    OutputClosed,
}

/// Result type for seaman-redis operations
pub type Result<T> = std::result::Result<T, SeamanRedisError>;

impl SeamanRedisError {
    /// Attach the config file path to a configuration error
    pub fn with_config_path(self, config_path: &std::path::Path) -> Self {
        match self {
            SeamanRedisError::Configuration { message, .. } => SeamanRedisError::Configuration {
                message,
                path: Some(config_path.display().to_string()),
            },
            other => other,
        }
    }

    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            SeamanRedisError::Configuration { path, .. } => {
                let mut tips = vec![
                    "Show the accepted values: seaman-redis config schema".to_string(),
                    "Show the effective configuration: seaman-redis config show".to_string(),
                ];
                if let Some(path) = path {
                    tips.push(format!("Edit the config file: {}", path));
                }
                tips
            }
            SeamanRedisError::InvalidConfigPath { .. } => vec![
                "Check that referenced environment variables are set".to_string(),
                "Pass an absolute path with --config-file".to_string(),
            ],
            SeamanRedisError::Prompt { .. } => {
                vec!["Skip the prompt with --force".to_string()]
            }
            SeamanRedisError::OutputError { .. } | SeamanRedisError::OutputClosed => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&self.to_string());

        if let SeamanRedisError::Configuration {
            path: Some(path), ..
        } = self
        {
            diag = diag.detail(&format!("in {}", path));
        }

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion);
        }

        diag.print();
    }
}

impl From<ConfigError> for SeamanRedisError {
    fn from(err: ConfigError) -> Self {
        SeamanRedisError::Configuration {
            message: err.to_string(),
            path: None,
        }
    }
}

impl From<CoreError> for SeamanRedisError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config(config_err) => SeamanRedisError::from(config_err),
            CoreError::PortRangeExceeded { .. } => SeamanRedisError::Configuration {
                message: err.to_string(),
                path: None,
            },
            CoreError::Confirmation(message) => SeamanRedisError::Prompt { message },
        }
    }
}

impl From<std::io::Error> for SeamanRedisError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            return SeamanRedisError::OutputClosed;
        }
        SeamanRedisError::OutputError {
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for SeamanRedisError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<std::io::Error>() {
            Ok(io_err) => SeamanRedisError::from(io_err),
            Err(err) => SeamanRedisError::OutputError {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_error_conversion() {
        let err: SeamanRedisError = ConfigError::ConfigDirError.into();
        assert!(matches!(err, SeamanRedisError::Configuration { .. }));
        assert!(err.to_string().contains("config directory"));
    }

    #[test]
    fn test_core_error_conversion() {
        let err: SeamanRedisError = CoreError::Confirmation("eof".to_string()).into();
        assert!(matches!(err, SeamanRedisError::Prompt { .. }));
        assert!(err.suggestions()[0].contains("--force"));

        let err: SeamanRedisError = CoreError::PortRangeExceeded {
            base: 65535,
            nodes: 6,
        }
        .into();
        assert!(matches!(err, SeamanRedisError::Configuration { .. }));
    }

    #[test]
    fn test_broken_pipe_is_output_closed() {
        let io_err = std::io::Error::from(std::io::ErrorKind::BrokenPipe);
        let err: SeamanRedisError = anyhow::Error::from(io_err).into();
        assert!(matches!(err, SeamanRedisError::OutputClosed));

        let err: SeamanRedisError = anyhow::anyhow!("bad yaml").into();
        assert!(matches!(err, SeamanRedisError::OutputError { .. }));

        let io_err = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            SeamanRedisError::from(io_err),
            SeamanRedisError::OutputError { .. }
        ));
    }

    #[test]
    fn test_config_path_added_to_suggestions() {
        let err = SeamanRedisError::from(ConfigError::ConfigDirError)
            .with_config_path(Path::new("/etc/seaman-redis/config.toml"));
        let tips = err.suggestions();
        assert!(tips.iter().any(|t| t.contains("/etc/seaman-redis/config.toml")));
        assert!(tips.iter().any(|t| t.contains("config schema")));
    }
}
