pub mod config;
pub mod http;
pub mod remote;
pub mod secrets;
pub mod session;
pub mod tokens;

pub use config::Config;
pub use http::{create_router, AppState};
pub use remote::{RemoteClient, RemoteError};
pub use secrets::Secrets;
pub use session::{Phase, SessionConfig, SessionStatus, TokenUsage, WorkflowSession};
pub use tokens::count_tokens;
