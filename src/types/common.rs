//! Common types shared by the streaming and non-streaming paths

use serde::{Deserialize, Serialize};

/// Message role as reported by the provider.
///
/// Responses from the Messages API always carry `assistant`; `user` is kept
/// so request-side code can reuse the same type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Normalized classification of why generation stopped.
///
/// Absence of a finish reason is represented by `Option<FinishReason>::None`,
/// never by a sentinel variant: `None` means "not yet known / not
/// classifiable", which callers must treat as information, not as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// The model completed its turn naturally, hit a stop sequence, or paused
    /// the turn. Maps vendor `end_turn`, `stop_sequence` and `pause_turn`.
    Stop,

    /// Generation was truncated by the `max_tokens` limit. Maps vendor
    /// `max_tokens`.
    Length,

    /// The model stopped to invoke one or more tools. The caller should
    /// execute them and continue the conversation. Maps vendor `tool_use`.
    ToolUse,

    /// The model refused to generate. Maps vendor `refusal`.
    Error,
}

/// Token-consumption accounting reported by the provider.
///
/// `output_tokens` is the count observed so far; streams update it via
/// `message_delta` with last-write-wins semantics. `input_tokens` is only
/// known when the provider reports it in the `message_start` envelope.
///
/// A zero count is a present, distinct value; "not yet observed" is the
/// absence of the whole record on [`NormalizedResponse`].
///
/// [`NormalizedResponse`]: crate::types::NormalizedResponse
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Usage {
    /// Prompt tokens, when reported at message start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<u32>,
    /// Output tokens generated so far.
    pub output_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_reason_serializes_snake_case() {
        let json = serde_json::to_string(&FinishReason::ToolUse).unwrap();
        assert_eq!(json, "\"tool_use\"");
    }

    #[test]
    fn zero_output_tokens_is_a_present_value() {
        let usage = Usage {
            input_tokens: None,
            output_tokens: 0,
        };
        // Distinct from Option::<Usage>::None on the response.
        assert_eq!(Some(usage).map(|u| u.output_tokens), Some(0));
    }
}
