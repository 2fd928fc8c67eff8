use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow phase of a session.
///
/// Error outcomes do not get their own phase; a failed transcription or
/// summarization leaves the session in `Transcribed`/`Summarized` with the
/// error message recorded in the status snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Session created, nothing uploaded yet.
    Idle,

    /// Audio stored on disk, transcription not started.
    FileUploaded,

    /// Transcription call in flight.
    Transcribing,

    /// Transcription attempted (successfully or not).
    Transcribed,

    /// Summarization call in flight.
    Summarizing,

    /// Summarization attempted (successfully or not).
    Summarized,

    /// Session ended, temp file cleaned up.
    Closed,
}

/// Running token counters for a session.
///
/// The total is always derived from the other two, never stored, so
/// `total_tokens == transcription_tokens + summary_tokens` holds at every
/// observation point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    pub transcription_tokens: u64,
    pub summary_tokens: u64,
    pub total_tokens: u64,
}

impl TokenUsage {
    pub fn new(transcription_tokens: u64, summary_tokens: u64) -> Self {
        Self {
            transcription_tokens,
            summary_tokens,
            total_tokens: transcription_tokens + summary_tokens,
        }
    }
}

/// Point-in-time view of a session, as returned by the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStatus {
    pub session_id: String,

    pub phase: Phase,

    /// When the session was created.
    pub started_at: DateTime<Utc>,

    /// Transcript text; empty until transcription succeeds.
    pub transcript: String,

    /// Summary text; empty until summarization succeeds.
    pub summary: String,

    /// User-visible message from the last failed transcription, if any.
    pub transcription_error: Option<String>,

    /// User-visible message from the last failed summarization, if any.
    pub summary_error: Option<String>,

    pub usage: TokenUsage,
}
