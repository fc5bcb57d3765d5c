//! The shared tap ledger
//!
//! One `Ledger` instance is created at server start and injected into every
//! request handler and into the realtime feed. Mutation is a short critical
//! section behind a single `parking_lot::RwLock`; it is never held across
//! an await point.

use parking_lot::RwLock;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::table::CountryTable;

/// Result of recording one tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapRecord {
    /// Updated count for the attributed country
    pub country_total: u64,
    /// Updated global total
    pub global_total: u64,
}

/// Stats for a single country
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryStats {
    /// Country code as queried
    pub country: String,
    /// Taps recorded for this country (0 if never seen)
    pub total: u64,
    /// Share of the global total, 0.0 when nothing has been recorded
    pub percentage: f64,
}

/// One leaderboard entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryRank {
    /// Country code
    pub country: String,
    /// Taps recorded for this country
    pub count: u64,
    /// Share of the global total
    pub percentage: f64,
}

/// Immutable point-in-time copy of the ledger
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Global tap total
    pub total_taps: u64,
    /// Reserved field, currently never derived from connection tracking
    pub active_users: u64,
    /// Per-country counts in first-seen order
    #[serde(serialize_with = "serialize_countries")]
    pub countries: Vec<(String, u64)>,
}

impl Snapshot {
    /// Get the count for a country in this snapshot
    pub fn country(&self, code: &str) -> Option<u64> {
        self.countries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, count)| *count)
    }
}

/// Serialize the country list as a JSON object, keys in insertion order
fn serialize_countries<S>(countries: &[(String, u64)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(countries.len()))?;
    for (code, count) in countries {
        map.serialize_entry(code, count)?;
    }
    map.end()
}

/// Ledger internals, guarded as one unit so the sum invariant is never
/// visible half-applied
#[derive(Debug, Default)]
struct LedgerInner {
    total_taps: u64,
    active_users: u64,
    countries: CountryTable,
}

/// The shared mutable record of total and per-country tap counts
///
/// All operations are infallible: there is no I/O and no external resource
/// behind them.
#[derive(Debug, Default)]
pub struct Ledger {
    inner: RwLock<LedgerInner>,
}

impl Ledger {
    /// Create a ledger with all-zero state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one tap attributed to `country`.
    ///
    /// Increments the global total and the country bucket atomically with
    /// respect to concurrent callers. After every call,
    /// `sum(countries) == total_taps`.
    pub fn record_tap(&self, country: &str) -> TapRecord {
        let mut inner = self.inner.write();
        inner.total_taps += 1;
        let country_total = inner.countries.increment(country);
        TapRecord {
            country_total,
            global_total: inner.total_taps,
        }
    }

    /// Take an immutable point-in-time copy of the full ledger state
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.read();
        Snapshot {
            total_taps: inner.total_taps,
            active_users: inner.active_users,
            countries: inner
                .countries
                .iter()
                .map(|(code, count)| (code.to_string(), count))
                .collect(),
        }
    }

    /// Current global total
    pub fn total_taps(&self) -> u64 {
        self.inner.read().total_taps
    }

    /// Set the reserved active-users field
    pub fn set_active_users(&self, count: u64) {
        self.inner.write().active_users = count;
    }

    /// Stats for one country.
    ///
    /// Total is 0 for a code never recorded; percentage is 0 when nothing
    /// has been recorded at all.
    pub fn country_stats(&self, code: &str) -> CountryStats {
        let inner = self.inner.read();
        let total = inner.countries.get(code).unwrap_or(0);
        CountryStats {
            country: code.to_string(),
            total,
            percentage: percentage(total, inner.total_taps),
        }
    }

    /// Top countries by count, descending, ties in first-seen order,
    /// truncated to `limit`
    pub fn leaderboard(&self, limit: usize) -> Vec<CountryRank> {
        let inner = self.inner.read();
        let total_taps = inner.total_taps;

        let mut ranks: Vec<CountryRank> = inner
            .countries
            .iter()
            .map(|(code, count)| CountryRank {
                country: code.to_string(),
                count,
                percentage: percentage(count, total_taps),
            })
            .collect();

        // Stable sort: equal counts keep insertion order
        ranks.sort_by(|a, b| b.count.cmp(&a.count));
        ranks.truncate(limit);
        ranks
    }
}

/// Share of `count` in `total` as 0..=100, 0.0 for an empty ledger
fn percentage(count: u64, total: u64) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "ledger_test.rs"]
mod tests;
