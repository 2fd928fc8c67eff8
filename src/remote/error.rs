use thiserror::Error;

/// Failure modes of the remote API calls.
///
/// Both kinds are surfaced to the user as messages and never abort the
/// session; the workflow continues with an empty transcript or summary.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Non-2xx status, or a 2xx body missing the expected fields.
    /// Carries the raw response body so the user sees what the service said.
    #[error("remote service returned HTTP {status}: {body}")]
    Service { status: u16, body: String },

    /// The request never completed: network failure, timeout, or the
    /// local audio file could not be read.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        RemoteError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for RemoteError {
    fn from(err: std::io::Error) -> Self {
        RemoteError::Transport(err.to_string())
    }
}
