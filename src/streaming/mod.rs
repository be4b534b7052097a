//! Streaming Module
//!
//! Folds the vendor's incremental event protocol into normalized responses:
//! - [`StreamAccumulator`] — the per-stream state machine
//! - [`accumulate`] / [`accumulate_stream`] — replay helpers over event
//!   sequences
//! - [`decode_sse_event`] — the SSE payload boundary

mod accumulator;
mod sse;

pub use accumulator::{StreamAccumulator, StreamState};
pub use sse::decode_sse_event;

use crate::error::NormalizeError;
use crate::protocol::StreamEvent;
use crate::types::NormalizedResponse;
use futures::Stream;
use futures_util::StreamExt;

/// Replay a complete event sequence into a final response.
///
/// Strict: a sequence that ends before `message_stop` is a protocol
/// violation, so a dropped connection cannot masquerade as a completed
/// response.
pub fn accumulate(
    events: impl IntoIterator<Item = StreamEvent>,
) -> Result<NormalizedResponse, NormalizeError> {
    let mut accumulator = StreamAccumulator::new();
    for event in events {
        if let Some(response) = accumulator.push_event(event)? {
            return Ok(response);
        }
    }
    Err(NormalizeError::protocol("stream ended before message_stop"))
}

/// Asynchronous variant of [`accumulate`] over a typed event stream.
///
/// The transport's suspension points stay outside this crate; each event is
/// still consumed in one synchronous step, in arrival order.
pub async fn accumulate_stream<S>(events: S) -> Result<NormalizedResponse, NormalizeError>
where
    S: Stream<Item = StreamEvent>,
{
    let mut accumulator = StreamAccumulator::new();
    futures_util::pin_mut!(events);
    while let Some(event) = events.next().await {
        if let Some(response) = accumulator.push_event(event)? {
            return Ok(response);
        }
    }
    Err(NormalizeError::protocol("stream ended before message_stop"))
}
