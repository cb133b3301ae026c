//! mindcheck-bedrock
//!
//! Optional AI feedback over the Bedrock Converse API. Every failure is
//! absorbed here: callers only ever see `Some(text)` or `None`.

pub mod client;
pub mod converse;
pub mod error;
pub mod feedback;
pub mod prompt;
pub mod tokens;
