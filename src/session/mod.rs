//! Session workflow management
//!
//! This module provides the `WorkflowSession` abstraction that runs the
//! upload → transcribe → (optional) summarize → cleanup sequence:
//! - Temporary audio file storage, one file per session
//! - Remote transcription and summarization calls
//! - Running token counters (transcription, summary, derived total)
//! - Phase tracking and status snapshots
//! - Cleanup of the temp file, exactly once per session

mod config;
mod session;
mod stats;

pub use config::{is_valid_session_id, SessionConfig};
pub use session::WorkflowSession;
pub use stats::{Phase, SessionStatus, TokenUsage};
