//! The snapshot feed and its subscriptions

use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures_util::Stream;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use poptap_ledger::{Ledger, Snapshot};

use crate::registry::ObserverRegistry;

/// Default push cadence
pub const DEFAULT_FEED_INTERVAL: Duration = Duration::from_millis(500);

/// Channel buffer per observer; delivery is best-effort, a full buffer
/// drops the tick rather than stalling the push loop
const CHANNEL_BUFFER_SIZE: usize = 16;

/// Periodic snapshot broadcaster
///
/// Reads the ledger through [`Ledger::snapshot`] only; holds no lock
/// across any await.
#[derive(Debug)]
pub struct StatsFeed {
    ledger: Arc<Ledger>,
    interval: Duration,
    registry: ObserverRegistry,
    /// Total snapshots pushed, for the status output
    pushed: AtomicU64,
}

impl StatsFeed {
    /// Create a feed with the default 500 ms cadence
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self::with_interval(ledger, DEFAULT_FEED_INTERVAL)
    }

    /// Create a feed with a custom cadence
    pub fn with_interval(ledger: Arc<Ledger>, interval: Duration) -> Self {
        Self {
            ledger,
            interval,
            registry: ObserverRegistry::new(),
            pushed: AtomicU64::new(0),
        }
    }

    /// Register an observer.
    ///
    /// The observer immediately receives one snapshot, then one per tick
    /// until the subscription is dropped or unsubscribed.
    pub fn subscribe(self: &Arc<Self>) -> Subscription {
        let (id, token) = self.registry.insert();
        let (sender, receiver) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        debug!(id, "new feed observer");

        let feed = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(feed.interval);

            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    // First tick fires immediately
                    _ = ticker.tick() => {
                        let snapshot = feed.ledger.snapshot();
                        match sender.try_send(snapshot) {
                            Ok(()) => {
                                feed.pushed.fetch_add(1, Ordering::Relaxed);
                                trace!(id, "pushed snapshot");
                            }
                            Err(mpsc::error::TrySendError::Full(_)) => {
                                // Slow observer: skip this tick
                                trace!(id, "observer buffer full, tick dropped");
                            }
                            Err(mpsc::error::TrySendError::Closed(_)) => break,
                        }
                    }
                }
            }

            // Covers the receiver-closed exit; a no-op when the observer
            // was already unsubscribed.
            feed.unsubscribe(id);
        });

        Subscription {
            id,
            receiver,
            feed: Arc::clone(self),
        }
    }

    /// Cancel an observer's push loop and release its registry entry.
    ///
    /// Returns `false` if the observer was already gone. Idempotent.
    pub fn unsubscribe(&self, id: u64) -> bool {
        if self.registry.remove(id) {
            debug!(id, "feed observer removed");
            true
        } else {
            false
        }
    }

    /// Number of connected observers
    pub fn subscriber_count(&self) -> usize {
        self.registry.count()
    }

    /// Total snapshots pushed since start
    pub fn pushed_count(&self) -> u64 {
        self.pushed.load(Ordering::Relaxed)
    }

    /// The configured push cadence
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// One observer's handle on the feed
///
/// Dropping the subscription tears the push task down; so does an explicit
/// [`StatsFeed::unsubscribe`] with its id. Either way exactly once.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    receiver: mpsc::Receiver<Snapshot>,
    feed: Arc<StatsFeed>,
}

impl Subscription {
    /// The observer id
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Receive the next snapshot.
    ///
    /// Returns `None` once the subscription has been torn down.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.receiver.recv().await
    }
}

impl Stream for Subscription {
    type Item = Snapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Snapshot>> {
        self.receiver.poll_recv(cx)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.feed.unsubscribe(self.id);
    }
}

#[cfg(test)]
#[path = "feed_test.rs"]
mod tests;
