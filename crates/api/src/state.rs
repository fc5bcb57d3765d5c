//! Application state
//!
//! Shared state for API handlers: the ledger, the realtime feed, and the
//! country attribution policy. The ledger is the dependency-injected
//! singleton all mutation routes through; handlers never reach for
//! anything ambient.

use std::sync::Arc;

use poptap_feed::StatsFeed;
use poptap_ledger::Ledger;

use crate::country::CountryPolicy;

/// Shared state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// The single shared tap ledger
    pub ledger: Arc<Ledger>,
    /// Realtime snapshot feed
    pub feed: Arc<StatsFeed>,
    /// Country attribution policy
    pub country: CountryPolicy,
}

impl AppState {
    /// Create state from its parts
    pub fn new(ledger: Arc<Ledger>, feed: Arc<StatsFeed>, country: CountryPolicy) -> Self {
        Self {
            ledger,
            feed,
            country,
        }
    }
}
