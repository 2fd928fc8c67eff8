use anyhow::{bail, Result};
use std::path::PathBuf;

/// Configuration for one workflow session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Unique session identifier; also embedded in the temp file name so
    /// concurrent sessions never collide on disk.
    pub session_id: String,

    /// Directory holding per-session temporary audio files.
    pub upload_dir: PathBuf,
}

impl SessionConfig {
    /// Build a config, generating a `session-<uuid>` id when the caller
    /// did not pick one. Caller-chosen ids must pass
    /// [`is_valid_session_id`]; anything else is rejected before a
    /// session exists.
    pub fn new(session_id: Option<String>, upload_dir: impl Into<PathBuf>) -> Result<Self> {
        let session_id = match session_id {
            Some(id) => {
                if !is_valid_session_id(&id) {
                    bail!(
                        "Invalid session id {:?}: only letters, digits, '-' and '_' are allowed",
                        id
                    );
                }
                id
            }
            None => format!("session-{}", uuid::Uuid::new_v4()),
        };

        Ok(Self {
            session_id,
            upload_dir: upload_dir.into(),
        })
    }
}

/// Session ids become file names under the upload dir, so anything that
/// could name another directory (separators, `..`, empty) is rejected.
pub fn is_valid_session_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 128
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
