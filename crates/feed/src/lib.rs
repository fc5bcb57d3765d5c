//! Poptap Feed
//!
//! `StatsFeed` pushes the current ledger snapshot to every connected
//! observer on a fixed cadence, whether or not anything changed. It is a
//! periodic poll-and-push, not an event-driven push-on-change: the only
//! ordering guarantee is that an observer eventually sees a state at least
//! as recent as the last tick.
//!
//! Each subscription owns a cancellable background task. Teardown runs on
//! every disconnect path (guard drop, explicit unsubscribe, receiver
//! closed) and is idempotent, so no timer outlives its observer.
//!
//! # Usage
//!
//! ```ignore
//! let feed = Arc::new(StatsFeed::new(Arc::clone(&ledger)));
//!
//! let mut sub = feed.subscribe();
//! while let Some(snapshot) = sub.recv().await {
//!     // one snapshot immediately, then one per tick
//! }
//! ```

mod feed;
mod registry;

pub use feed::{StatsFeed, Subscription, DEFAULT_FEED_INTERVAL};
