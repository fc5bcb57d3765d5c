//! Stats routes
//!
//! One-shot ledger operations: snapshot reads, tap recording, per-country
//! stats and the leaderboard projection.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use poptap_ledger::{CountryRank, CountryStats, Snapshot, DEFAULT_LEADERBOARD_LIMIT};

use crate::state::AppState;

// =============================================================================
// Response types
// =============================================================================

/// Response for a recorded tap
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TapResponse {
    /// Always true: recording never fails
    pub success: bool,
    /// Country the tap was attributed to
    pub country: String,
    /// Updated total for that country
    pub country_total: u64,
    /// Updated global total
    pub global_total: u64,
}

/// Leaderboard response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    /// Global tap total
    pub total_taps: u64,
    /// Top countries, descending by count
    pub countries: Vec<CountryRank>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Current ledger snapshot
///
/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.ledger.snapshot())
}

/// Record one tap
///
/// POST /api/tap
///
/// The country comes from the trusted edge header or the configured
/// fallback; the request body is ignored.
pub async fn record_tap(State(state): State<AppState>, headers: HeaderMap) -> Json<TapResponse> {
    let country = state.country.resolve(&headers);
    let record = state.ledger.record_tap(&country);

    debug!(
        country = %country,
        country_total = record.country_total,
        global_total = record.global_total,
        "tap recorded"
    );

    Json(TapResponse {
        success: true,
        country,
        country_total: record.country_total,
        global_total: record.global_total,
    })
}

/// Stats for one country
///
/// GET /api/country/{country}
pub async fn country_stats(
    Path(country): Path<String>,
    State(state): State<AppState>,
) -> Json<CountryStats> {
    Json(state.ledger.country_stats(&country))
}

/// Top countries by tap count
///
/// GET /api/leaderboard
pub async fn leaderboard(State(state): State<AppState>) -> Json<LeaderboardResponse> {
    Json(LeaderboardResponse {
        total_taps: state.ledger.total_taps(),
        countries: state.ledger.leaderboard(DEFAULT_LEADERBOARD_LIMIT),
    })
}
