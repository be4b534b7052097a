use super::{parse_finish_reason, usage_from_update};
use crate::protocol::{MessagesResponse, ResponseContentBlock};
use crate::types::{ContentBlock, NormalizedResponse};

/// Normalize a complete (non-streaming) vendor response.
///
/// Runs the same field mappers as the streaming path. Tool-argument JSON is
/// re-serialized into the normalized raw-string representation so both paths
/// hand the caller the same shape.
pub fn normalize_response(response: MessagesResponse) -> NormalizedResponse {
    let content = response
        .content
        .into_iter()
        .map(|block| match block {
            ResponseContentBlock::Text { text } => ContentBlock::Text { text },
            ResponseContentBlock::ToolUse { id, name, input } => ContentBlock::ToolUse {
                id,
                name,
                input: input.to_string(),
            },
        })
        .collect();

    NormalizedResponse {
        id: response.id,
        model: response.model,
        role: response.role,
        content,
        finish_reason: parse_finish_reason(response.stop_reason.as_deref()),
        usage: response.usage.as_ref().map(usage_from_update),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinishReason, MessageRole, Usage};

    #[test]
    fn normalizes_text_and_tool_use_response() {
        let raw: MessagesResponse = serde_json::from_str(
            r#"{
                "id": "msg_1",
                "role": "assistant",
                "model": "claude-sonnet-4",
                "content": [
                    {"type": "text", "text": "I'll check the weather."},
                    {"type": "tool_use", "id": "toolu_123", "name": "get_weather", "input": {"location": "San Francisco"}}
                ],
                "stop_reason": "tool_use",
                "usage": {"input_tokens": 12, "output_tokens": 30}
            }"#,
        )
        .unwrap();

        let normalized = normalize_response(raw);

        assert_eq!(normalized.id, "msg_1");
        assert_eq!(normalized.role, MessageRole::Assistant);
        assert_eq!(normalized.finish_reason, Some(FinishReason::ToolUse));
        assert_eq!(
            normalized.usage,
            Some(Usage {
                input_tokens: Some(12),
                output_tokens: 30
            })
        );

        assert_eq!(normalized.content.len(), 2);
        assert_eq!(normalized.text(), "I'll check the weather.");
        match &normalized.content[1] {
            ContentBlock::ToolUse { id, name, input } => {
                assert_eq!(id, "toolu_123");
                assert_eq!(name, "get_weather");
                let parsed: serde_json::Value = serde_json::from_str(input).unwrap();
                assert_eq!(parsed, serde_json::json!({"location": "San Francisco"}));
            }
            other => panic!("Expected tool_use block, got {other:?}"),
        }
    }

    #[test]
    fn unknown_stop_reason_normalizes_to_none() {
        let raw: MessagesResponse = serde_json::from_str(
            r#"{"id":"msg_2","role":"assistant","model":"claude-sonnet-4","content":[],"stop_reason":"galaxy_brain"}"#,
        )
        .unwrap();

        let normalized = normalize_response(raw);
        assert_eq!(normalized.finish_reason, None);
        assert_eq!(normalized.usage, None);
    }
}
