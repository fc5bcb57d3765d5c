//! Poptap Limiter
//!
//! Client-side macro detection: a sliding-window tap-rate guard that
//! suppresses counting when a caller exceeds a sustainable human tap rate.
//!
//! The guard is a plain synchronous value type owned by one client session.
//! It holds nothing shared and talks to nothing: the decision is purely
//! local, made before a tap is ever forwarded to the server.
//!
//! # Behavior
//!
//! A sliding count over a trailing 1 second window. When the number of
//! attempts in the window (including the attempt being evaluated) reaches
//! 15, the guard blocks for a 5 second cooldown. While blocked, attempts
//! are suppressed without touching the history. Cooldown expiry clears the
//! history buffer; an explicit [`MacroGuard::reset`] does the same
//! immediately.
//!
//! The window is a simple sliding count rather than a token bucket: the
//! goal is to catch sustained superhuman burst rates, not to smooth bursty
//! but legitimate human input.
//!
//! # Usage
//!
//! ```
//! use poptap_limiter::{MacroGuard, TapDecision};
//!
//! let mut guard = MacroGuard::new();
//! match guard.try_tap() {
//!     TapDecision::Allowed => { /* forward to the server */ }
//!     TapDecision::Suppressed => { /* drop silently */ }
//! }
//! ```

mod guard;

pub use guard::{GuardConfig, GuardState, MacroGuard, TapDecision};
