use super::config::SessionConfig;
use super::stats::{Phase, SessionStatus, TokenUsage};
use crate::remote::RemoteClient;
use crate::tokens::count_tokens;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// File extensions accepted for upload.
const ALLOWED_EXTENSIONS: [&str; 2] = ["mp3", "wav"];

struct SessionInner {
    phase: Phase,
    audio_path: Option<PathBuf>,
    transcript: String,
    summary: String,
    transcription_tokens: u64,
    summary_tokens: u64,
    transcription_error: Option<String>,
    summary_error: Option<String>,
    cleaned_up: bool,
}

/// A session that runs the upload → transcribe → summarize → cleanup
/// workflow.
///
/// All mutable state lives behind one mutex; each operation takes the lock
/// around its state transition, releasing it for the duration of the
/// remote call so status and usage queries stay responsive.
pub struct WorkflowSession {
    config: SessionConfig,
    started_at: DateTime<Utc>,
    inner: Mutex<SessionInner>,
}

impl WorkflowSession {
    pub fn new(config: SessionConfig) -> Self {
        info!("Creating workflow session: {}", config.session_id);

        Self {
            config,
            started_at: Utc::now(),
            inner: Mutex::new(SessionInner {
                phase: Phase::Idle,
                audio_path: None,
                transcript: String::new(),
                summary: String::new(),
                transcription_tokens: 0,
                summary_tokens: 0,
                transcription_error: None,
                summary_error: None,
                cleaned_up: false,
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.config.session_id
    }

    /// Store uploaded audio bytes at the session's temp path.
    ///
    /// Only `mp3` and `wav` files are accepted; anything else is rejected
    /// before touching the disk. A re-upload in the same session replaces
    /// the previous file.
    pub async fn store_upload(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let extension = match extension {
            Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => ext,
            _ => bail!(
                "Unsupported file type {:?} (expected mp3 or wav)",
                file_name
            ),
        };

        let mut inner = self.inner.lock().await;

        if inner.phase == Phase::Closed {
            bail!("Session {} is closed", self.config.session_id);
        }

        let path = self
            .config
            .upload_dir
            .join(format!("{}.{}", self.config.session_id, extension));

        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write uploaded audio to {}", path.display()))?;

        info!(
            "Stored {} bytes of audio for session {} at {}",
            bytes.len(),
            self.config.session_id,
            path.display()
        );

        // A re-upload may change the extension; drop the stale file.
        if let Some(old) = inner.audio_path.take() {
            if old != path {
                let _ = tokio::fs::remove_file(&old).await;
            }
        }

        inner.audio_path = Some(path.clone());
        inner.phase = Phase::FileUploaded;

        Ok(path)
    }

    /// Run the transcription call against the stored upload.
    ///
    /// Remote failure is non-fatal: the error message is recorded for
    /// display, the transcript stays empty, the counter stays at zero, and
    /// the session still advances to `Transcribed`. Calling this without
    /// an upload is an ordering violation and does fail.
    pub async fn transcribe(&self, remote: &RemoteClient) -> Result<()> {
        let audio_path = {
            let mut inner = self.inner.lock().await;
            let Some(path) = inner.audio_path.clone() else {
                bail!("No audio uploaded for session {}", self.config.session_id);
            };
            inner.phase = Phase::Transcribing;
            path
        };

        info!("Transcribing audio for session {}", self.config.session_id);
        let result = remote.transcribe(&audio_path).await;

        let mut inner = self.inner.lock().await;
        if inner.phase == Phase::Closed {
            // close() won the race while the call was in flight; the
            // session stays closed and the late result is dropped.
            return Ok(());
        }
        match result {
            Ok(text) => {
                inner.transcription_tokens = count_tokens(&text);
                inner.transcription_error = None;
                info!(
                    "Transcription complete for session {}: {} chars, ~{} tokens",
                    self.config.session_id,
                    text.len(),
                    inner.transcription_tokens
                );
                inner.transcript = text;
            }
            Err(e) => {
                warn!(
                    "Transcription failed for session {}: {}",
                    self.config.session_id, e
                );
                inner.transcript.clear();
                inner.transcription_tokens = 0;
                inner.transcription_error = Some(e.to_string());
            }
        }
        inner.phase = Phase::Transcribed;

        Ok(())
    }

    /// Run the summarization call on the currently held transcript.
    ///
    /// Never triggered automatically; only the explicit summarize action
    /// lands here, and only after a transcription was attempted in this
    /// session. The transcript is sent as-is, including empty. Remote
    /// failure is non-fatal, same as transcription.
    pub async fn summarize(&self, remote: &RemoteClient) -> Result<()> {
        let transcript = {
            let mut inner = self.inner.lock().await;
            if !matches!(
                inner.phase,
                Phase::Transcribed | Phase::Summarizing | Phase::Summarized
            ) {
                bail!(
                    "Nothing to summarize: no transcription attempted in session {}",
                    self.config.session_id
                );
            }
            inner.phase = Phase::Summarizing;
            inner.transcript.clone()
        };

        info!("Summarizing transcript for session {}", self.config.session_id);
        let result = remote.summarize(&transcript).await;

        let mut inner = self.inner.lock().await;
        if inner.phase == Phase::Closed {
            return Ok(());
        }
        match result {
            Ok(text) => {
                inner.summary_tokens = count_tokens(&text);
                inner.summary_error = None;
                info!(
                    "Summary complete for session {}: {} chars, ~{} tokens",
                    self.config.session_id,
                    text.len(),
                    inner.summary_tokens
                );
                inner.summary = text;
            }
            Err(e) => {
                warn!(
                    "Summarization failed for session {}: {}",
                    self.config.session_id, e
                );
                inner.summary.clear();
                inner.summary_tokens = 0;
                inner.summary_error = Some(e.to_string());
            }
        }
        inner.phase = Phase::Summarized;

        Ok(())
    }

    /// Current token counters; the total is derived, never stored.
    pub async fn usage(&self) -> TokenUsage {
        let inner = self.inner.lock().await;
        TokenUsage::new(inner.transcription_tokens, inner.summary_tokens)
    }

    /// Point-in-time view of the whole session.
    pub async fn snapshot(&self) -> SessionStatus {
        let inner = self.inner.lock().await;
        SessionStatus {
            session_id: self.config.session_id.clone(),
            phase: inner.phase,
            started_at: self.started_at,
            transcript: inner.transcript.clone(),
            summary: inner.summary.clone(),
            transcription_error: inner.transcription_error.clone(),
            summary_error: inner.summary_error.clone(),
            usage: TokenUsage::new(inner.transcription_tokens, inner.summary_tokens),
        }
    }

    /// End the session, deleting the temp audio file.
    ///
    /// Deletion failure is logged as a warning and never surfaced as an
    /// error. The file cleanup runs exactly once no matter how often or in
    /// what state `close` is called.
    pub async fn close(&self) {
        let mut inner = self.inner.lock().await;

        if !inner.cleaned_up {
            if let Some(path) = inner.audio_path.take() {
                match tokio::fs::remove_file(&path).await {
                    Ok(()) => info!(
                        "Deleted temp audio for session {}: {}",
                        self.config.session_id,
                        path.display()
                    ),
                    Err(e) => warn!(
                        "Could not delete temp audio {} for session {}: {}",
                        path.display(),
                        self.config.session_id,
                        e
                    ),
                }
            }
            inner.cleaned_up = true;
        }

        inner.phase = Phase::Closed;
    }
}
