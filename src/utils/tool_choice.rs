use crate::types::ToolChoice;

/// Encode a request-level tool choice into the vendor's wire object.
///
/// Absent input defaults to `auto` (let the model decide). Mode strings are
/// passed through verbatim — the caller is responsible for using recognized
/// values; this function performs no validation and never fails.
pub fn format_tool_choice(choice: Option<&ToolChoice>) -> serde_json::Value {
    match choice {
        None | Some(ToolChoice::Auto) => serde_json::json!({
            "type": "auto"
        }),
        Some(ToolChoice::Any) => serde_json::json!({
            "type": "any"
        }),
        Some(ToolChoice::None) => serde_json::json!({
            "type": "none"
        }),
        Some(ToolChoice::Other(mode)) => serde_json::json!({
            "type": mode
        }),
        Some(ToolChoice::Tool { name }) => serde_json::json!({
            "type": "tool",
            "name": name
        }),
    }
}
