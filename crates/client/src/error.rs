//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the poptap client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, dropped, timeout)
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    ///
    /// Never retried automatically; retry policy belongs to the caller.
    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
