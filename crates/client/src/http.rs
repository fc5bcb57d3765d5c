//! One-shot HTTP calls
//!
//! `PoptapClient` wraps `reqwest` with typed responses and routes every
//! tap attempt through the session's macro guard first: while the guard is
//! blocked, `tap` resolves locally without touching the network.

use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use poptap_limiter::{GuardConfig, GuardState, MacroGuard, TapDecision};

use crate::error::{ClientError, Result};
use crate::types::{CountryStats, Health, Leaderboard, Stats, TapResponse};

/// Outcome of a guarded tap attempt
#[derive(Debug, Clone)]
pub enum TapOutcome {
    /// Tap was forwarded and recorded by the server
    Recorded(TapResponse),
    /// Tap was suppressed locally by the macro guard; nothing was sent
    Suppressed,
}

impl TapOutcome {
    /// Whether the attempt was suppressed locally
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }
}

/// HTTP client for the poptap API
///
/// Owns one [`MacroGuard`]: the client is a single session, and the
/// guard's state is never shared.
#[derive(Debug)]
pub struct PoptapClient {
    http: reqwest::Client,
    base_url: String,
    guard: MacroGuard,
}

impl PoptapClient {
    /// Create a client for the given base URL (e.g. `http://host:3001`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_guard_config(base_url, GuardConfig::default())
    }

    /// Create a client with custom macro guard thresholds
    pub fn with_guard_config(base_url: impl Into<String>, config: GuardConfig) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            guard: MacroGuard::with_config(config),
        }
    }

    /// Current global stats
    pub async fn get_stats(&self) -> Result<Stats> {
        self.get_json("/api/stats").await
    }

    /// Attempt one tap.
    ///
    /// The macro guard decides first; a suppressed attempt is not an error
    /// and sends nothing. A failed request does not roll back the guard's
    /// recorded attempt - the authoritative count is always the server's.
    pub async fn tap(&mut self) -> Result<TapOutcome> {
        if self.guard.try_tap() == TapDecision::Suppressed {
            debug!("tap suppressed by macro guard");
            return Ok(TapOutcome::Suppressed);
        }

        let response = self
            .http
            .post(format!("{}/api/tap", self.base_url))
            .send()
            .await?;
        let tap: TapResponse = check_status(response)?.json().await?;
        Ok(TapOutcome::Recorded(tap))
    }

    /// Stats for one country
    pub async fn country_stats(&self, code: &str) -> Result<CountryStats> {
        self.get_json(&format!("/api/country/{}", code)).await
    }

    /// Top countries by tap count
    pub async fn leaderboard(&self) -> Result<Leaderboard> {
        self.get_json("/api/leaderboard").await
    }

    /// Health check
    pub async fn health(&self) -> Result<Health> {
        self.get_json("/api/health").await
    }

    /// Current macro guard state
    pub fn guard_state(&self) -> GuardState {
        self.guard.state()
    }

    /// Explicitly reset the macro guard
    pub fn reset_guard(&mut self) {
        self.guard.reset();
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Ok(check_status(response)?.json().await?)
    }
}

/// Surface non-success statuses as a typed failure
fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(response.status()))
    }
}
