//! anthropic-messages
//!
//! Anthropic Messages protocol normalization for Rust clients.
//!
//! This crate maps the vendor's request/response and streaming event shapes
//! into a provider-neutral model:
//!
//! - [`protocol`] — typed wire model for the SSE event stream and the
//!   non-streaming response object.
//! - [`utils`] — pure field mappers (finish reason, tool choice, usage).
//! - [`streaming`] — the [`StreamAccumulator`] state machine that folds an
//!   ordered event sequence into a single [`NormalizedResponse`].
//!
//! HTTP transport, authentication and retry policy live in the calling
//! client; this crate only consumes typed events and produces normalized
//! values.
#![deny(unsafe_code)]

pub mod error;
pub mod protocol;
pub mod streaming;
pub mod types;
pub mod utils;

pub use error::NormalizeError;
pub use protocol::{BlockDelta, MessagesResponse, StreamEvent};
pub use streaming::{StreamAccumulator, StreamState, accumulate, accumulate_stream};
pub use types::{ContentBlock, FinishReason, MessageRole, NormalizedResponse, ToolChoice, Usage};
pub use utils::{extract_usage, format_tool_choice, normalize_response, parse_finish_reason};
