//! Realtime SSE consumer
//!
//! Connects to `/api/realtime`, parses `data:` events out of the byte
//! stream, and delivers snapshots through a channel. On any transport
//! failure the task reconnects with exponential backoff; dropping the
//! handle cancels the stream and any pending reconnect timer.

use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::types::Stats;

/// Initial reconnect delay
const INITIAL_RECONNECT_DELAY: Duration = Duration::from_millis(1000);

/// Reconnect delay cap
const MAX_RECONNECT_DELAY: Duration = Duration::from_millis(30000);

/// Snapshot channel buffer
const CHANNEL_BUFFER_SIZE: usize = 16;

/// Reconnect delay state: starts at 1 s, doubles per failed attempt,
/// capped at 30 s, reset to 1 s after any successful connection
#[derive(Debug)]
pub(crate) struct Backoff {
    delay: Duration,
}

impl Backoff {
    pub(crate) fn new() -> Self {
        Self {
            delay: INITIAL_RECONNECT_DELAY,
        }
    }

    /// Delay to wait before the next attempt; doubles for the one after
    pub(crate) fn next_delay(&mut self) -> Duration {
        let current = self.delay;
        self.delay = (self.delay * 2).min(MAX_RECONNECT_DELAY);
        current
    }

    /// Back to the initial delay, after a successful (re)connection
    pub(crate) fn reset(&mut self) {
        self.delay = INITIAL_RECONNECT_DELAY;
    }
}

/// Extract the payload of an SSE `data:` line.
///
/// Comment lines (keep-alives), event-name lines and blank separators all
/// return `None`.
pub(crate) fn sse_data_payload(line: &str) -> Option<&str> {
    line.strip_prefix("data:").map(|rest| rest.trim_start())
}

/// Builder for the realtime stream task
#[derive(Debug, Clone)]
pub struct RealtimeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RealtimeClient {
    /// Create a realtime client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Spawn the stream task and return its handle.
    ///
    /// The task connects, delivers snapshots, and keeps reconnecting with
    /// backoff until the handle is disconnected or dropped.
    pub fn spawn(self) -> RealtimeHandle {
        let (sender, receiver) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            self.run(sender, token).await;
        });

        RealtimeHandle { receiver, cancel }
    }

    /// Connect-stream-reconnect loop
    async fn run(self, sender: mpsc::Sender<Stats>, cancel: CancellationToken) {
        let mut backoff = Backoff::new();

        loop {
            match self.stream_once(&sender, &cancel, &mut backoff).await {
                Ok(StreamEnd::Cancelled) => return,
                Ok(StreamEnd::ServerClosed) => {
                    debug!("realtime stream closed by server");
                }
                Err(error) => {
                    warn!(error = %error, "realtime stream failed");
                }
            }

            let delay = backoff.next_delay();
            debug!(delay_ms = delay.as_millis() as u64, "scheduling reconnect");

            // The pending reconnect timer dies with the handle
            tokio::select! {
                _ = cancel.cancelled() => return,
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }

    /// One connection lifetime: connect, then pump events until the
    /// transport ends or the handle is cancelled
    async fn stream_once(
        &self,
        sender: &mpsc::Sender<Stats>,
        cancel: &CancellationToken,
        backoff: &mut Backoff,
    ) -> Result<StreamEnd> {
        let response = self
            .http
            .get(format!("{}/api/realtime", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::Status(response.status()));
        }

        debug!("realtime stream connected");
        backoff.reset();

        let mut stream = response.bytes_stream();
        let mut buffer = String::new();

        loop {
            let chunk = tokio::select! {
                _ = cancel.cancelled() => return Ok(StreamEnd::Cancelled),
                chunk = stream.next() => chunk,
            };

            let bytes = match chunk {
                Some(Ok(bytes)) => bytes,
                Some(Err(error)) => return Err(error.into()),
                None => return Ok(StreamEnd::ServerClosed),
            };

            buffer.push_str(&String::from_utf8_lossy(&bytes));

            // Deliver every complete line; keep the partial tail buffered
            while let Some(newline) = buffer.find('\n') {
                let line: String = buffer.drain(..=newline).collect();
                let line = line.trim_end();

                let Some(payload) = sse_data_payload(line) else {
                    continue;
                };

                match serde_json::from_str::<Stats>(payload) {
                    Ok(stats) => {
                        if sender.send(stats).await.is_err() {
                            // Receiver gone: handle dropped without cancel
                            return Ok(StreamEnd::Cancelled);
                        }
                    }
                    Err(error) => {
                        // One bad payload never kills the stream
                        warn!(error = %error, "discarding unparsable snapshot");
                    }
                }
            }
        }
    }
}

/// Why a connection's event pump returned
enum StreamEnd {
    /// Handle disconnected; do not reconnect
    Cancelled,
    /// Server ended the stream; reconnect
    ServerClosed,
}

/// Handle on a running realtime stream
#[derive(Debug)]
pub struct RealtimeHandle {
    receiver: mpsc::Receiver<Stats>,
    cancel: CancellationToken,
}

impl RealtimeHandle {
    /// Receive the next snapshot.
    ///
    /// Returns `None` after the handle has been disconnected.
    pub async fn recv(&mut self) -> Option<Stats> {
        self.receiver.recv().await
    }

    /// Stop streaming and cancel any pending reconnect. Idempotent.
    pub fn disconnect(&self) {
        self.cancel.cancel();
    }
}

impl Drop for RealtimeHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
#[path = "realtime_test.rs"]
mod tests;
