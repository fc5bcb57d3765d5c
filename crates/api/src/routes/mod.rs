//! API routes
//!
//! Route handlers grouped by concern: stats (the one-shot ledger
//! operations), realtime (the SSE feed), and ops (health).

pub mod ops;
pub mod realtime;
pub mod stats;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the complete API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/stats", get(stats::get_stats))
        .route("/api/tap", post(stats::record_tap))
        .route("/api/country/{country}", get(stats::country_stats))
        .route("/api/leaderboard", get(stats::leaderboard))
        .route("/api/realtime", get(realtime::realtime))
        .route("/api/health", get(ops::health))
        .with_state(state)
}
