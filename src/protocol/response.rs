//! Non-streaming response wire model
//!
//! The complete Messages response object, for callers that do not stream.
//! Normalized through the same field mappers as the streaming path by
//! [`normalize_response`].
//!
//! [`normalize_response`]: crate::utils::normalize_response

use super::events::UsageUpdate;
use crate::types::MessageRole;
use serde::Deserialize;

/// A complete vendor response as returned by the non-streaming endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MessagesResponse {
    pub id: String,
    pub role: MessageRole,
    pub model: String,
    #[serde(default)]
    pub content: Vec<ResponseContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<UsageUpdate>,
}

/// A content block in a complete response.
///
/// Unlike the streaming shape, `tool_use.input` arrives as already-parsed
/// JSON here.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseContentBlock {
    Text {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Value,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_text_and_tool_use_response() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{
                "id": "msg_1",
                "type": "message",
                "role": "assistant",
                "model": "claude-sonnet-4",
                "content": [
                    {"type": "text", "text": "Checking the weather."},
                    {"type": "tool_use", "id": "toolu_1", "name": "get_weather", "input": {"location": "Tokyo"}}
                ],
                "stop_reason": "tool_use",
                "usage": {"input_tokens": 20, "output_tokens": 34}
            }"#,
        )
        .unwrap();

        assert_eq!(response.content.len(), 2);
        assert_eq!(response.stop_reason.as_deref(), Some("tool_use"));
        match &response.content[1] {
            ResponseContentBlock::ToolUse { name, input, .. } => {
                assert_eq!(name, "get_weather");
                assert_eq!(input["location"], serde_json::json!("Tokyo"));
            }
            other => panic!("Expected tool_use block, got {other:?}"),
        }
    }
}
