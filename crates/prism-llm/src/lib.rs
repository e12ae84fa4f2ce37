//! Prism adapter core
//!
//! Adapts a generic chat-completion surface onto the Anthropic Messages
//! API: normalizes caller message and tool shapes, enforces a
//! character-heuristic input budget, and transcodes streaming responses
//! into line-delimited JSON while accounting usage concurrently.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod adapt;
pub mod budget;
pub mod catalog;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod state;
pub mod tools;
pub mod transcode;
pub mod types;
pub mod upstream;

pub use error::AdapterError;
pub use handler::adapter_router;
pub use state::{AdapterState, Completion};
pub use types::{CompletionRequest, StreamHandle, StreamLine, SyncCompletion, UsageCounts};
pub use upstream::{HttpUpstream, Upstream};
