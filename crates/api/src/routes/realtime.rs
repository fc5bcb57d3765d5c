//! Realtime route
//!
//! Bridges a feed subscription into a server-sent-events response. The
//! subscription guard lives inside the stream, so whichever way the
//! transport closes (graceful, error, timeout), dropping the response body
//! tears the observer's push task down exactly once.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::Stream;
use futures_util::StreamExt;
use tracing::debug;

use crate::state::AppState;

/// Stream ledger snapshots
///
/// GET /api/realtime
///
/// One JSON snapshot per event: the first immediately, then one per feed
/// tick (500 ms by default) until the client disconnects.
pub async fn realtime(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscription = state.feed.subscribe();
    debug!(id = subscription.id(), "realtime observer connected");

    let stream = subscription.map(|snapshot| {
        // Snapshot serialization cannot fail: plain counters and strings
        let event = Event::default()
            .json_data(&snapshot)
            .unwrap_or_else(|_| Event::default().data("{}"));
        Ok(event)
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
