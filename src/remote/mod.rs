//! Unified client for the remote OpenAI-compatible API.
//!
//! Both workflow calls go through one `RemoteClient`:
//! - POST {base_url}/audio/transcriptions - speech-to-text (multipart)
//! - POST {base_url}/chat/completions - transcript summarization (JSON)
//!
//! One `reqwest::Client` with a single configured timeout serves both;
//! there is no retry policy. Failures map to exactly two kinds: the
//! service answered badly (`RemoteError::Service`) or the request never
//! completed (`RemoteError::Transport`).

mod client;
mod error;
mod messages;

pub use client::RemoteClient;
pub use error::RemoteError;
pub use messages::{ChatChoice, ChatChoiceMessage, ChatMessage, ChatRequest, ChatResponse};
