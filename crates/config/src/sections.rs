//! Server, country, feed and limiter config sections

use std::time::Duration;

use serde::Deserialize;

/// Default listen port (matches the original game API)
const DEFAULT_PORT: u16 = 3001;

/// Default trusted edge header carrying the caller's country code
const DEFAULT_COUNTRY_HEADER: &str = "CF-IPCountry";

/// Default country attributed when the edge header is absent
const DEFAULT_FALLBACK_COUNTRY: &str = "KR";

/// Default feed push interval in milliseconds
const DEFAULT_FEED_INTERVAL_MS: u64 = 500;

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,

    /// Listen port
    pub port: u16,

    /// Enable permissive CORS (browser clients)
    pub cors_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            cors_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Bind address string, e.g. "0.0.0.0:3001"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Country attribution settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CountryConfig {
    /// Trusted edge header carrying a 2-letter country code
    pub header: String,

    /// Code attributed when the header is absent
    pub fallback: String,
}

impl Default for CountryConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_COUNTRY_HEADER.into(),
            fallback: DEFAULT_FALLBACK_COUNTRY.into(),
        }
    }
}

/// Realtime feed settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Snapshot push interval in milliseconds
    pub interval_ms: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_FEED_INTERVAL_MS,
        }
    }
}

impl FeedConfig {
    /// Push interval as a Duration
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Client-side macro detector settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimiterConfig {
    /// Taps within the window that trigger blocking
    pub threshold: usize,

    /// Sliding window in milliseconds
    pub window_ms: u64,

    /// Block duration in milliseconds
    pub cooldown_ms: u64,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            threshold: 15,
            window_ms: 1000,
            cooldown_ms: 5000,
        }
    }
}

impl LimiterConfig {
    /// Sliding window as a Duration
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    /// Cooldown as a Duration
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}
