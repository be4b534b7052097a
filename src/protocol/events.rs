//! Stream event model
//!
//! A closed tagged union mirroring the vendor's stream protocol, one variant
//! per lifecycle signal. The accumulator matches exhaustively on it, so a
//! future event tag is a compile-time-visible change everywhere it matters.
//!
//! Invariant (guaranteed by the vendor, enforced by the accumulator): a block
//! index is introduced by exactly one `content_block_start` before any delta
//! or stop referencing it, transitions `start -> delta* -> stop` exactly
//! once, and is never reused within one stream.

use crate::types::MessageRole;
use serde::Deserialize;

/// One discrete unit of the vendor's incremental response protocol.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Opens the stream with the initial message envelope.
    MessageStart { message: MessageEnvelope },
    /// Introduces the content block at `index`.
    ContentBlockStart {
        index: usize,
        content_block: BlockStart,
    },
    /// Appends an incremental payload to the block at `index`.
    ContentBlockDelta { index: usize, delta: BlockDelta },
    /// Closes the block at `index`.
    ContentBlockStop { index: usize },
    /// Updates message-level fields: stop reason and/or usage.
    MessageDelta {
        #[serde(default)]
        delta: MessageDeltaBody,
        #[serde(default)]
        usage: Option<UsageUpdate>,
    },
    /// Terminal event; the response is complete.
    MessageStop,
    /// Keep-alive; carries nothing.
    Ping,
    /// Out-of-band generation failure reported by the vendor.
    Error { error: ErrorDetail },
}

/// Message envelope carried by `message_start`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessageEnvelope {
    pub id: String,
    pub role: MessageRole,
    pub model: String,
    #[serde(default)]
    pub usage: Option<UsageUpdate>,
}

/// Static block shape carried by `content_block_start`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockStart {
    Text {
        // Always empty on the wire; parts are built from deltas. Retained so
        // the payload round-trips through serde.
        #[serde(default)]
        text: String,
    },
    ToolUse { id: String, name: String },
}

/// Incremental payload carried by `content_block_delta`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockDelta {
    /// A text fragment for a text block.
    TextDelta { text: String },
    /// A JSON-string fragment of a tool block's arguments.
    InputJsonDelta { partial_json: String },
}

/// Body of a `message_delta` event.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MessageDeltaBody {
    #[serde(default)]
    pub stop_reason: Option<String>,
    // Stop sequence token; retained for serde compatibility.
    #[serde(default)]
    pub stop_sequence: Option<String>,
}

/// Usage counters as the vendor reports them, all optional on the wire.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct UsageUpdate {
    #[serde(default)]
    pub input_tokens: Option<u32>,
    #[serde(default)]
    pub output_tokens: Option<u32>,
}

/// Payload of a vendor `error` event.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ErrorDetail {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}
