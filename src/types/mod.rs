//! Provider-neutral types produced by the normalizer

mod common;
mod response;
mod tools;

pub use common::{FinishReason, MessageRole, Usage};
pub use response::{ContentBlock, NormalizedResponse};
pub use tools::ToolChoice;
