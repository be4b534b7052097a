use crate::protocol::{StreamEvent, UsageUpdate};
use crate::types::Usage;

/// Convert a wire usage payload into the normalized record.
///
/// An absent `output_tokens` counts as zero; the record itself is only built
/// when the provider actually sent a usage object.
pub fn usage_from_update(update: &UsageUpdate) -> Usage {
    Usage {
        input_tokens: update.input_tokens,
        output_tokens: update.output_tokens.unwrap_or(0),
    }
}

/// Extract the usage update carried by a `message_delta` event.
///
/// Returns `Some` if and only if the event carries a usage field; a reported
/// zero is a present value, distinct from "no result". Other event variants
/// never carry usage in this model and yield `None`.
pub fn extract_usage(event: &StreamEvent) -> Option<Usage> {
    match event {
        StreamEvent::MessageDelta {
            usage: Some(update),
            ..
        } => Some(usage_from_update(update)),
        _ => None,
    }
}

#[cfg(test)]
mod usage_tests {
    use super::*;
    use crate::protocol::MessageDeltaBody;

    fn message_delta(usage: Option<UsageUpdate>) -> StreamEvent {
        StreamEvent::MessageDelta {
            delta: MessageDeltaBody::default(),
            usage,
        }
    }

    #[test]
    fn zero_output_tokens_is_present_not_absent() {
        let with_zero = message_delta(Some(UsageUpdate {
            input_tokens: None,
            output_tokens: Some(0),
        }));
        let without = message_delta(None);

        assert_eq!(
            extract_usage(&with_zero),
            Some(Usage {
                input_tokens: None,
                output_tokens: 0
            })
        );
        assert_eq!(extract_usage(&without), None);
    }

    #[test]
    fn non_delta_events_carry_no_usage() {
        assert_eq!(extract_usage(&StreamEvent::Ping), None);
        assert_eq!(extract_usage(&StreamEvent::MessageStop), None);
    }
}
