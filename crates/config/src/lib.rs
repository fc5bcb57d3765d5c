//! Poptap Configuration
//!
//! TOML-based configuration loading with sensible defaults. A missing file
//! or an empty one just works; only specify what you need to change.
//!
//! # Parsing
//!
//! ```
//! use poptap_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[server]\nport = 8080").unwrap();
//! assert_eq!(config.server.port, 8080);
//! ```
//!
//! # Example Full Config
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3001
//! cors_enabled = true
//!
//! [country]
//! header = "CF-IPCountry"
//! fallback = "KR"
//!
//! [feed]
//! interval_ms = 500
//!
//! [limiter]
//! threshold = 15
//! window_ms = 1000
//! cooldown_ms = 5000
//!
//! [log]
//! level = "info"
//! format = "console"
//! ```

mod error;
mod logging;
mod sections;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use sections::{CountryConfig, FeedConfig, LimiterConfig, ServerConfig};

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Country attribution settings
    pub country: CountryConfig,

    /// Realtime feed settings
    pub feed: FeedConfig,

    /// Client-side macro detector settings
    pub limiter: LimiterConfig,

    /// Logging configuration
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        contents.parse()
    }

    /// Validate cross-field constraints
    pub fn validate(&self) -> Result<()> {
        if self.feed.interval_ms == 0 {
            return Err(ConfigError::invalid_value(
                "feed",
                "interval_ms",
                "must be greater than zero",
            ));
        }
        if self.limiter.threshold == 0 {
            return Err(ConfigError::invalid_value(
                "limiter",
                "threshold",
                "must be greater than zero",
            ));
        }
        if self.limiter.window_ms == 0 {
            return Err(ConfigError::invalid_value(
                "limiter",
                "window_ms",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
