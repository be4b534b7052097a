use crate::types::FinishReason;

/// Map a vendor stop-reason string to the normalized finish reason.
///
/// The mapping is a static table; anything outside it, and absent input,
/// yields `None` — "not yet known / not classifiable", which is information
/// for the caller, not an error.
pub fn parse_finish_reason(reason: Option<&str>) -> Option<FinishReason> {
    match reason {
        Some("end_turn") => Some(FinishReason::Stop),
        Some("stop_sequence") => Some(FinishReason::Stop),
        Some("pause_turn") => Some(FinishReason::Stop),
        Some("max_tokens") => Some(FinishReason::Length),
        Some("tool_use") => Some(FinishReason::ToolUse),
        Some("refusal") => Some(FinishReason::Error),
        Some(_) | None => None,
    }
}
