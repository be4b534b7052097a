//! Stream accumulator
//!
//! A stateful reducer that consumes the vendor event sequence in arrival
//! order and folds it into a single [`NormalizedResponse`]: incremental text
//! and partial-JSON tool-argument buffers grow by append, message-level
//! fields update last-write-wins.
//!
//! One accumulator instance is scoped to exactly one stream. Consuming an
//! event is a synchronous step, so the type composes with push-callback and
//! pull-based transports alike; it holds no external resources, and
//! abandoning a stream mid-flight is just dropping the accumulator.

use crate::error::NormalizeError;
use crate::protocol::{BlockDelta, BlockStart, StreamEvent};
use crate::types::{ContentBlock, NormalizedResponse};
use crate::utils::{parse_finish_reason, usage_from_update};

/// Lifecycle of one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// No event consumed yet; only `message_start` is valid.
    AwaitingStart,
    /// Envelope received; content and message-level updates are accepted.
    Active,
    /// Terminal: the stream finished, failed, or broke protocol. Every
    /// further event is a protocol violation.
    Closed,
}

/// Folds an ordered stream of [`StreamEvent`]s into a [`NormalizedResponse`].
#[derive(Debug)]
pub struct StreamAccumulator {
    state: StreamState,
    response: Option<NormalizedResponse>,
    // Parallel to `response.content`: true while the block at that index is
    // still open for deltas.
    open_blocks: Vec<bool>,
}

impl Default for StreamAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamAccumulator {
    pub fn new() -> Self {
        Self {
            state: StreamState::AwaitingStart,
            response: None,
            open_blocks: Vec::new(),
        }
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    /// Read-only view of the response accumulated so far.
    ///
    /// `None` before `message_start` and after the final response has been
    /// handed out (or discarded by a provider error).
    pub fn response(&self) -> Option<&NormalizedResponse> {
        self.response.as_ref()
    }

    /// Consume one event and update state.
    ///
    /// Returns `Ok(Some(response))` exactly once, on `message_stop`; the
    /// response is final from that point on. Any error is fatal for the
    /// stream: the accumulator closes and does not attempt recovery.
    pub fn push_event(
        &mut self,
        event: StreamEvent,
    ) -> Result<Option<NormalizedResponse>, NormalizeError> {
        let result = self.dispatch(event);
        if result.is_err() {
            self.state = StreamState::Closed;
        }
        result
    }

    fn dispatch(
        &mut self,
        event: StreamEvent,
    ) -> Result<Option<NormalizedResponse>, NormalizeError> {
        match self.state {
            StreamState::AwaitingStart => match event {
                StreamEvent::MessageStart { message } => {
                    tracing::debug!(id = %message.id, model = %message.model, "message start");
                    self.response = Some(NormalizedResponse {
                        id: message.id,
                        model: message.model,
                        role: message.role,
                        content: Vec::new(),
                        finish_reason: None,
                        usage: message.usage.as_ref().map(usage_from_update),
                    });
                    self.state = StreamState::Active;
                    Ok(None)
                }
                other => Err(NormalizeError::protocol(format!(
                    "expected message_start, got {}",
                    event_name(&other)
                ))),
            },
            StreamState::Closed => Err(NormalizeError::protocol(format!(
                "{} after stream close",
                event_name(&event)
            ))),
            StreamState::Active => self.dispatch_active(event),
        }
    }

    fn dispatch_active(
        &mut self,
        event: StreamEvent,
    ) -> Result<Option<NormalizedResponse>, NormalizeError> {
        let Some(response) = self.response.as_mut() else {
            return Err(NormalizeError::protocol("active stream has no response"));
        };

        match event {
            StreamEvent::MessageStart { .. } => {
                Err(NormalizeError::protocol("duplicate message_start"))
            }
            StreamEvent::ContentBlockStart {
                index,
                content_block,
            } => {
                if index != response.content.len() {
                    return Err(NormalizeError::protocol(format!(
                        "content_block_start index {index} out of order (expected {})",
                        response.content.len()
                    )));
                }
                let block = match content_block {
                    BlockStart::Text { .. } => ContentBlock::Text {
                        text: String::new(),
                    },
                    BlockStart::ToolUse { id, name } => {
                        tracing::debug!(index, id = %id, name = %name, "tool use block start");
                        ContentBlock::ToolUse {
                            id,
                            name,
                            input: String::new(),
                        }
                    }
                };
                response.content.push(block);
                self.open_blocks.push(true);
                Ok(None)
            }
            StreamEvent::ContentBlockDelta { index, delta } => {
                match self.open_blocks.get(index) {
                    Some(true) => {}
                    Some(false) => {
                        return Err(NormalizeError::protocol(format!(
                            "content_block_delta for closed index {index}"
                        )));
                    }
                    None => {
                        return Err(NormalizeError::protocol(format!(
                            "content_block_delta for unopened index {index}"
                        )));
                    }
                }
                let Some(block) = response.content.get_mut(index) else {
                    return Err(NormalizeError::protocol(format!(
                        "content_block_delta for unopened index {index}"
                    )));
                };
                match (block, delta) {
                    (ContentBlock::Text { text }, BlockDelta::TextDelta { text: fragment }) => {
                        text.push_str(&fragment);
                    }
                    (
                        ContentBlock::ToolUse { input, .. },
                        BlockDelta::InputJsonDelta { partial_json },
                    ) => {
                        input.push_str(&partial_json);
                    }
                    (ContentBlock::Text { .. }, BlockDelta::InputJsonDelta { .. }) => {
                        return Err(NormalizeError::protocol(format!(
                            "input_json_delta for text block {index}"
                        )));
                    }
                    (ContentBlock::ToolUse { .. }, BlockDelta::TextDelta { .. }) => {
                        return Err(NormalizeError::protocol(format!(
                            "text_delta for tool_use block {index}"
                        )));
                    }
                }
                Ok(None)
            }
            StreamEvent::ContentBlockStop { index } => match self.open_blocks.get_mut(index) {
                Some(open) if *open => {
                    *open = false;
                    Ok(None)
                }
                Some(_) => Err(NormalizeError::protocol(format!(
                    "content_block_stop for already closed index {index}"
                ))),
                None => Err(NormalizeError::protocol(format!(
                    "content_block_stop for unopened index {index}"
                ))),
            },
            StreamEvent::MessageDelta { delta, usage } => {
                // Last write wins for both fields; the vendor is expected to
                // only add information monotonically, but that is not enforced
                // here.
                if let Some(raw) = delta.stop_reason.as_deref() {
                    let reason = parse_finish_reason(Some(raw));
                    if reason.is_none() {
                        tracing::warn!(stop_reason = raw, "unrecognized stop reason");
                    }
                    response.finish_reason = reason;
                }
                if let Some(update) = usage {
                    let mut observed = usage_from_update(&update);
                    // The input count from the envelope survives output-only
                    // overwrites.
                    if observed.input_tokens.is_none() {
                        observed.input_tokens = response.usage.as_ref().and_then(|u| u.input_tokens);
                    }
                    response.usage = Some(observed);
                }
                Ok(None)
            }
            StreamEvent::MessageStop => {
                self.state = StreamState::Closed;
                let Some(response) = self.response.take() else {
                    return Err(NormalizeError::protocol("active stream has no response"));
                };
                tracing::debug!(id = %response.id, "message stop");
                Ok(Some(response))
            }
            StreamEvent::Ping => Ok(None),
            StreamEvent::Error { error } => {
                tracing::warn!(kind = %error.kind, message = %error.message, "provider reported stream error");
                self.response = None;
                Err(NormalizeError::Provider(format!(
                    "{}: {}",
                    error.kind, error.message
                )))
            }
        }
    }
}

fn event_name(event: &StreamEvent) -> &'static str {
    match event {
        StreamEvent::MessageStart { .. } => "message_start",
        StreamEvent::ContentBlockStart { .. } => "content_block_start",
        StreamEvent::ContentBlockDelta { .. } => "content_block_delta",
        StreamEvent::ContentBlockStop { .. } => "content_block_stop",
        StreamEvent::MessageDelta { .. } => "message_delta",
        StreamEvent::MessageStop => "message_stop",
        StreamEvent::Ping => "ping",
        StreamEvent::Error { .. } => "error",
    }
}
