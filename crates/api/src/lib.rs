//! Poptap API
//!
//! HTTP surface for the tap-statistics service. Built on Axum over a
//! shared [`poptap_ledger::Ledger`] and a [`poptap_feed::StatsFeed`].
//!
//! # Endpoints
//!
//! - `GET /api/stats` - current ledger snapshot
//! - `POST /api/tap` - record one tap (country from the trusted edge header)
//! - `GET /api/country/{country}` - per-country total and percentage
//! - `GET /api/leaderboard` - top 10 countries by count
//! - `GET /api/realtime` - SSE stream, one snapshot every feed tick
//! - `GET /api/health` - health check
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use poptap_api::{build_router, AppState, CountryPolicy};
//! use poptap_feed::StatsFeed;
//! use poptap_ledger::Ledger;
//!
//! let ledger = Arc::new(Ledger::new());
//! let feed = Arc::new(StatsFeed::new(Arc::clone(&ledger)));
//! let state = AppState::new(ledger, feed, CountryPolicy::default());
//!
//! let app = build_router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3001").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! All handlers are infallible: the ledger has no I/O behind it and
//! malformed country codes are accepted as opaque strings.

pub mod country;
pub mod routes;
pub mod state;

pub use country::CountryPolicy;
pub use routes::build_router;
pub use state::AppState;
