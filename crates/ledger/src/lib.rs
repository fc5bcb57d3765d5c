//! Poptap Ledger
//!
//! The single shared record of tap counts: one global total plus one bucket
//! per country, living in process memory for the lifetime of the server.
//!
//! The ledger is the only cross-request mutable state in the system. All
//! mutation goes through [`Ledger::record_tap`], a short critical section
//! behind one lock, so concurrent taps never lose an increment and readers
//! never observe a country sum that disagrees with the global total.
//!
//! # Usage
//!
//! ```
//! use poptap_ledger::Ledger;
//!
//! let ledger = Ledger::new();
//! let record = ledger.record_tap("US");
//! assert_eq!(record.global_total, 1);
//! assert_eq!(record.country_total, 1);
//!
//! let snapshot = ledger.snapshot();
//! assert_eq!(snapshot.total_taps, 1);
//! ```
//!
//! Country codes are treated as opaque strings. An unknown or malformed
//! code simply creates a new bucket; no validation is performed.

mod ledger;
mod table;

pub use ledger::{CountryRank, CountryStats, Ledger, Snapshot, TapRecord};
pub use table::CountryTable;

/// Default number of entries returned by [`Ledger::leaderboard`]
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
