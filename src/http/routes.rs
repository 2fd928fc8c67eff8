use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Audio uploads can be large; axum's 2 MB default is too small.
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Session lifecycle
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/:session_id",
            get(handlers::get_session_status).delete(handlers::close_session),
        )
        // Workflow steps
        .route("/sessions/:session_id/audio", post(handlers::upload_audio))
        .route(
            "/sessions/:session_id/summarize",
            post(handlers::summarize_session),
        )
        // Token counters (side panel data)
        .route(
            "/sessions/:session_id/usage",
            get(handlers::get_session_usage),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        // The expected caller is a browser UI on another origin
        .layer(CorsLayer::permissive())
        .with_state(state)
}
