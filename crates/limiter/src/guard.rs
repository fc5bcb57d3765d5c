//! Sliding-window macro guard

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::debug;

/// Default attempts-per-window threshold (superhuman above this)
pub const DEFAULT_THRESHOLD: usize = 15;

/// Default trailing window
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(1000);

/// Default cooldown while blocked
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(5000);

/// Guard configuration
#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Attempts within `window` that trigger blocking
    pub threshold: usize,
    /// Trailing window over which attempts are counted
    pub window: Duration,
    /// How long the guard stays blocked once triggered
    pub cooldown: Duration,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            window: DEFAULT_WINDOW,
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Guard state as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Taps are being counted
    Normal,
    /// Taps are being suppressed until the cooldown expires
    Blocked,
}

/// Outcome of one tap attempt
///
/// Suppression is a defined outcome, not an error: callers drop the tap
/// silently and read the state flag if they want to show anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapDecision {
    /// Attempt may be forwarded and counted
    Allowed,
    /// Attempt is rejected; nothing was recorded
    Suppressed,
}

impl TapDecision {
    /// Whether the attempt was allowed through
    #[inline]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Per-client sliding-window tap-rate guard
///
/// The blocked state is a recorded deadline checked against the clock on
/// each call, not a detached timer, so an early [`reset`](Self::reset)
/// cannot race a stale timeout.
#[derive(Debug)]
pub struct MacroGuard {
    config: GuardConfig,
    /// Timestamps of recent allowed attempts, oldest first
    history: VecDeque<Instant>,
    /// Instant of the last allowed tap
    last_tap: Option<Instant>,
    /// Deadline of the scheduled Blocked -> Normal transition
    blocked_until: Option<Instant>,
}

impl Default for MacroGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MacroGuard {
    /// Create a guard with default thresholds
    pub fn new() -> Self {
        Self::with_config(GuardConfig::default())
    }

    /// Create a guard with custom thresholds
    pub fn with_config(config: GuardConfig) -> Self {
        Self {
            config,
            history: VecDeque::new(),
            last_tap: None,
            blocked_until: None,
        }
    }

    /// Evaluate one tap attempt now
    pub fn try_tap(&mut self) -> TapDecision {
        self.try_tap_at(Instant::now())
    }

    /// Evaluate one tap attempt at `now`.
    ///
    /// Check and record happen as a single step: the threshold is evaluated
    /// against history that already includes this attempt, so two racing
    /// reads can never both slip under the limit.
    pub fn try_tap_at(&mut self, now: Instant) -> TapDecision {
        if let Some(until) = self.blocked_until {
            if now < until {
                return TapDecision::Suppressed;
            }
            // Cooldown expired: the scheduled transition back to Normal
            // fires here, clearing the history buffer with it.
            self.blocked_until = None;
            self.history.clear();
            debug!("macro cooldown expired, unblocking");
        }

        self.history.push_back(now);
        self.prune(now);

        if self.history.len() >= self.config.threshold {
            self.blocked_until = Some(now + self.config.cooldown);
            debug!(
                attempts = self.history.len(),
                window_ms = self.config.window.as_millis() as u64,
                cooldown_ms = self.config.cooldown.as_millis() as u64,
                "macro rate exceeded, blocking taps"
            );
            return TapDecision::Suppressed;
        }

        self.last_tap = Some(now);
        TapDecision::Allowed
    }

    /// Current state as of now
    pub fn state(&self) -> GuardState {
        self.state_at(Instant::now())
    }

    /// Current state as of `now`
    pub fn state_at(&self, now: Instant) -> GuardState {
        match self.blocked_until {
            Some(until) if now < until => GuardState::Blocked,
            _ => GuardState::Normal,
        }
    }

    /// Whether taps are currently suppressed
    pub fn is_blocked(&self) -> bool {
        self.state() == GuardState::Blocked
    }

    /// Explicit reset: immediately Normal with empty history, regardless of
    /// elapsed time
    pub fn reset(&mut self) {
        self.history.clear();
        self.last_tap = None;
        self.blocked_until = None;
    }

    /// Number of attempts currently in the window buffer
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Instant of the last allowed tap
    pub fn last_tap(&self) -> Option<Instant> {
        self.last_tap
    }

    /// Drop history entries older than the trailing window
    fn prune(&mut self, now: Instant) {
        while let Some(&oldest) = self.history.front() {
            if now.duration_since(oldest) >= self.config.window {
                self.history.pop_front();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
