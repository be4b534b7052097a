//! SSE decode boundary
//!
//! Turns one server-sent-events payload into a typed [`StreamEvent`]. The
//! transport owns the SSE framing and delivery order; this is only the
//! payload-to-type step.

use crate::error::NormalizeError;
use crate::protocol::StreamEvent;
use eventsource_stream::Event;

/// Decode one SSE payload into a typed stream event.
///
/// Returns `Ok(None)` for the `[DONE]` sentinel some gateways append for
/// OpenAI compatibility. Decode failures are the transport's malformed
/// payloads, not protocol violations, and surface as
/// [`NormalizeError::Decode`].
pub fn decode_sse_event(event: &Event) -> Result<Option<StreamEvent>, NormalizeError> {
    tracing::debug!("provider SSE event: {}", event.data);

    if event.data.trim() == "[DONE]" {
        return Ok(None);
    }

    match serde_json::from_str::<StreamEvent>(&event.data) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            tracing::warn!("failed to decode SSE event: {}", e);
            tracing::warn!("raw event data: {}", event.data);
            Err(NormalizeError::Decode(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sse(data: &str) -> Event {
        Event {
            event: "".to_string(),
            data: data.to_string(),
            id: "".to_string(),
            retry: None,
        }
    }

    #[test]
    fn decodes_typed_events() {
        let decoded = decode_sse_event(&sse(
            r#"{"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"Hello"}}"#,
        ))
        .unwrap()
        .expect("typed event");

        match decoded {
            StreamEvent::ContentBlockDelta { index, .. } => assert_eq!(index, 0),
            other => panic!("Expected ContentBlockDelta, got {other:?}"),
        }
    }

    #[test]
    fn done_sentinel_decodes_to_nothing() {
        assert!(decode_sse_event(&sse("[DONE]")).unwrap().is_none());
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = decode_sse_event(&sse("{not json")).unwrap_err();
        assert!(matches!(err, NormalizeError::Decode(_)), "got {err:?}");
    }
}
