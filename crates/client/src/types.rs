//! Wire types for API responses

use std::collections::HashMap;

use serde::Deserialize;

/// Ledger snapshot as served by `/api/stats` and the realtime stream
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Global tap total
    pub total_taps: u64,
    /// Reserved field, currently always 0
    pub active_users: u64,
    /// Per-country counts
    pub countries: HashMap<String, u64>,
}

/// Response from `POST /api/tap`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapResponse {
    /// Whether the tap was recorded
    pub success: bool,
    /// Country the server attributed the tap to
    pub country: String,
    /// Updated total for that country
    pub country_total: u64,
    /// Updated global total
    pub global_total: u64,
}

/// Response from `/api/country/{code}`
#[derive(Debug, Clone, Deserialize)]
pub struct CountryStats {
    /// Country code as queried
    pub country: String,
    /// Taps recorded for this country
    pub total: u64,
    /// Share of the global total
    pub percentage: f64,
}

/// One leaderboard entry
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRanking {
    /// Country code
    pub country: String,
    /// Taps recorded
    pub count: u64,
    /// Share of the global total
    pub percentage: f64,
}

/// Response from `/api/leaderboard`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    /// Global tap total
    pub total_taps: u64,
    /// Top countries, descending by count
    pub countries: Vec<CountryRanking>,
}

/// Response from `/api/health`
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    /// Server status
    pub status: String,
    /// Server time, RFC 3339
    pub timestamp: String,
}
