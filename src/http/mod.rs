//! HTTP API for driving the transcribe-and-summarize workflow
//!
//! This module provides the REST surface a browser UI talks to:
//! - POST /sessions - create a workflow session
//! - POST /sessions/:id/audio - upload audio and transcribe it
//! - POST /sessions/:id/summarize - explicit summarize action
//! - GET /sessions/:id - full session status
//! - GET /sessions/:id/usage - running token counters
//! - DELETE /sessions/:id - end the session and clean up its temp file
//! - GET /health - health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
