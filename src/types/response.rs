//! Normalized response model
//!
//! The accumulator target: one coherent, order-sensitive representation of
//! "the response so far", shared by the streaming and non-streaming paths.

use super::common::{FinishReason, MessageRole, Usage};
use serde::{Deserialize, Serialize};

/// One unit of generated output, addressed by its original block index.
///
/// Parts are keyed by the vendor's zero-based block index (their position in
/// [`NormalizedResponse::content`]), never by arrival time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContentBlock {
    /// Plain text, grown only by appending deltas.
    Text { text: String },
    /// A tool invocation. `id` and `name` are set once when the block starts
    /// and are immutable thereafter; `input` is the raw JSON-argument string
    /// accumulated from deltas and not parsed until the block is closed.
    ToolUse {
        id: String,
        name: String,
        input: String,
    },
}

impl ContentBlock {
    /// Text content, if this is a text block.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            Self::ToolUse { .. } => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    pub fn is_tool_use(&self) -> bool {
        matches!(self, Self::ToolUse { .. })
    }

    /// Parse the accumulated tool-argument string.
    ///
    /// Only meaningful once the block has been closed by
    /// `content_block_stop`; the accumulator itself never parses the
    /// arguments, so malformed JSON surfaces here, at the point of use.
    /// Returns `None` for text blocks.
    pub fn parse_tool_input(&self) -> Option<Result<serde_json::Value, serde_json::Error>> {
        match self {
            Self::Text { .. } => None,
            Self::ToolUse { input, .. } => Some(serde_json::from_str(input)),
        }
    }
}

/// Provider-neutral view of one complete (or in-progress) response.
///
/// Created empty when a stream begins, mutated in place event by event, and
/// final once the stream closes. For the non-streaming path it is produced in
/// one step by [`normalize_response`].
///
/// [`normalize_response`]: crate::utils::normalize_response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedResponse {
    /// Provider-assigned message id.
    pub id: String,
    /// Model that produced the response.
    pub model: String,
    /// Role of the message author.
    pub role: MessageRole,
    /// Ordered content parts, indexed by original block index.
    pub content: Vec<ContentBlock>,
    /// Why generation stopped; `None` until the provider reports it.
    pub finish_reason: Option<FinishReason>,
    /// Token accounting; `None` until the provider reports it.
    pub usage: Option<Usage>,
}

impl NormalizedResponse {
    /// All text parts concatenated in block order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for block in &self.content {
            if let ContentBlock::Text { text } = block {
                out.push_str(text);
            }
        }
        out
    }

    /// Tool-use parts in block order.
    pub fn tool_uses(&self) -> impl Iterator<Item = &ContentBlock> {
        self.content.iter().filter(|b| b.is_tool_use())
    }

    pub fn has_tool_uses(&self) -> bool {
        self.content.iter().any(|b| b.is_tool_use())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with(content: Vec<ContentBlock>) -> NormalizedResponse {
        NormalizedResponse {
            id: "msg_1".to_string(),
            model: "claude-test".to_string(),
            role: MessageRole::Assistant,
            content,
            finish_reason: None,
            usage: None,
        }
    }

    #[test]
    fn text_concatenates_text_blocks_in_order() {
        let response = response_with(vec![
            ContentBlock::Text {
                text: "Hello ".to_string(),
            },
            ContentBlock::ToolUse {
                id: "toolu_1".to_string(),
                name: "get_weather".to_string(),
                input: "{}".to_string(),
            },
            ContentBlock::Text {
                text: "world".to_string(),
            },
        ]);
        assert_eq!(response.text(), "Hello world");
        assert!(response.has_tool_uses());
    }

    #[test]
    fn parse_tool_input_surfaces_malformed_json_lazily() {
        let block = ContentBlock::ToolUse {
            id: "toolu_1".to_string(),
            name: "get_weather".to_string(),
            input: "{\"location\": ".to_string(),
        };
        let parsed = block.parse_tool_input().expect("tool block");
        assert!(parsed.is_err());
    }

    #[test]
    fn parse_tool_input_is_none_for_text() {
        let block = ContentBlock::Text {
            text: "hi".to_string(),
        };
        assert!(block.parse_tool_input().is_none());
    }
}
