//! Error types for response normalization
//!
//! Three failure kinds are distinguished: the event sequence broke the stream
//! state machine, the vendor itself reported a generation failure, or an SSE
//! payload could not be decoded into a typed event. Unclassifiable values
//! (unknown stop reason, absent usage) are not errors; they surface as `None`
//! through the field mappers.

use thiserror::Error;

/// Errors surfaced while normalizing provider responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NormalizeError {
    /// An event arrived that is invalid for the current stream state:
    /// wrong lifecycle phase, unopened/out-of-order/closed block index, a
    /// delta payload that does not match the block's type, or any event after
    /// the stream closed. Fatal for the stream; no recovery is attempted.
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The vendor emitted an `error` stream event. The stream was
    /// syntactically valid but generation failed; any partially accumulated
    /// response must be treated as discarded.
    #[error("provider stream error: {0}")]
    Provider(String),

    /// An SSE payload could not be decoded into a typed stream event.
    #[error("failed to decode stream event: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NormalizeError {
    pub(crate) fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }
}
