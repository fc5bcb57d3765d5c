//! Poptap Client
//!
//! Client library for the poptap service: one-shot HTTP calls, the
//! realtime SSE consumer with exponential-backoff reconnect, and the
//! client-local macro guard that suppresses superhuman tap rates before
//! they ever reach the network.
//!
//! # One-shot calls
//!
//! ```ignore
//! use poptap_client::PoptapClient;
//!
//! let mut client = PoptapClient::new("http://127.0.0.1:3001");
//! let outcome = client.tap().await?;      // guarded by the macro detector
//! let stats = client.get_stats().await?;
//! ```
//!
//! # Realtime stream
//!
//! ```ignore
//! use poptap_client::RealtimeClient;
//!
//! let mut handle = RealtimeClient::new("http://127.0.0.1:3001").spawn();
//! while let Some(stats) = handle.recv().await {
//!     println!("{} taps", stats.total_taps);
//! }
//! ```
//!
//! On transport error the realtime task reconnects after 1 s, doubling the
//! delay per failed attempt up to 30 s, and resets to 1 s after any
//! successful connection. Dropping the handle cancels the stream and any
//! pending reconnect timer.

mod error;
mod http;
mod realtime;
mod types;

pub use error::{ClientError, Result};
pub use http::{PoptapClient, TapOutcome};
pub use realtime::{RealtimeClient, RealtimeHandle};
pub use types::{CountryRanking, CountryStats, Health, Leaderboard, Stats, TapResponse};

// The guard is part of this crate's public API surface: callers that embed
// their own session state can drive one directly.
pub use poptap_limiter::{GuardConfig, GuardState, MacroGuard, TapDecision};
