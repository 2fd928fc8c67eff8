use crate::config::Config;
use crate::remote::RemoteClient;
use crate::session::WorkflowSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Active workflow sessions (session_id → session)
    pub sessions: Arc<RwLock<HashMap<String, Arc<WorkflowSession>>>>,

    /// Client for the remote transcription/summarization API
    pub remote: Arc<RemoteClient>,

    /// Service configuration (upload dir, model ids, ...)
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, remote: RemoteClient) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            remote: Arc::new(remote),
            config: Arc::new(config),
        }
    }
}
