//! Typed wire model for the Anthropic Messages protocol
//!
//! Leaf data types only: the SSE event stream and the non-streaming response
//! object, as the vendor frames them. Parsing the SSE framing itself (and the
//! HTTP transport underneath) is the calling client's job; these types assume
//! well-formed individual payloads.

mod events;
mod response;

pub use events::{
    BlockDelta, BlockStart, ErrorDetail, MessageDeltaBody, MessageEnvelope, StreamEvent,
    UsageUpdate,
};
pub use response::{MessagesResponse, ResponseContentBlock};
