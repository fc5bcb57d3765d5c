//! Observer registry
//!
//! Tracks the cancellation handle of every live subscription. Removal
//! cancels the subscription's push task; removing an unknown id is a no-op
//! so teardown can run from multiple paths without coordination.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

/// Counter for generating unique observer IDs
static OBSERVER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Registry of live observers keyed by id
#[derive(Debug, Default)]
pub(crate) struct ObserverRegistry {
    observers: Mutex<HashMap<u64, CancellationToken>>,
}

impl ObserverRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a new observer, returning its id and cancellation token
    pub(crate) fn insert(&self) -> (u64, CancellationToken) {
        let id = OBSERVER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();
        self.observers.lock().insert(id, token.clone());
        (id, token)
    }

    /// Cancel and remove an observer.
    ///
    /// Returns `false` if the id was already gone; cancelling twice is a
    /// no-op.
    pub(crate) fn remove(&self, id: u64) -> bool {
        match self.observers.lock().remove(&id) {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    /// Number of live observers
    pub(crate) fn count(&self) -> usize {
        self.observers.lock().len()
    }
}
