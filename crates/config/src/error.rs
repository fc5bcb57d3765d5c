//! Configuration error types

use std::io;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// Path to the file
        path: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error - invalid value
    #[error("[{section}] has invalid {field}: {message}")]
    InvalidValue {
        /// Config section name
        section: &'static str,
        /// Field name
        field: &'static str,
        /// Error message
        message: &'static str,
    },
}

impl ConfigError {
    /// Create an InvalidValue error
    pub fn invalid_value(section: &'static str, field: &'static str, message: &'static str) -> Self {
        Self::InvalidValue {
            section,
            field,
            message,
        }
    }
}
