use super::state::AppState;
use crate::session::{SessionConfig, SessionStatus, TokenUsage, WorkflowSession};
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Optional session ID (if not provided, generate one)
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub session_id: String,
    pub transcript: String,
    pub transcription_tokens: u64,
    /// User-visible message when the remote call failed (the session
    /// continues in a degraded state, so this is still HTTP 200).
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub session_id: String,
    pub summary: String,
    pub summary_tokens: u64,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CloseSessionResponse {
    pub session_id: String,
    pub status: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /sessions
/// Create a new workflow session
pub async fn create_session(
    State(state): State<AppState>,
    body: Option<Json<CreateSessionRequest>>,
) -> impl IntoResponse {
    let requested_id = body.and_then(|Json(req)| req.session_id);

    let config = match SessionConfig::new(requested_id, state.config.storage.upload_dir.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Session creation rejected: {}", e);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: format!("{}", e),
                }),
            )
                .into_response();
        }
    };
    let session_id = config.session_id.clone();

    {
        let mut sessions = state.sessions.write().await;
        if sessions.contains_key(&session_id) {
            return (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    error: format!("Session {} already exists", session_id),
                }),
            )
                .into_response();
        }
        sessions.insert(session_id.clone(), Arc::new(WorkflowSession::new(config)));
    }

    info!("Session created: {}", session_id);

    (
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id: session_id.clone(),
            status: "idle".to_string(),
            message: format!("Session {} created", session_id),
        }),
    )
        .into_response()
}

/// POST /sessions/:session_id/audio
/// Upload an audio file and transcribe it immediately
pub async fn upload_audio(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let Some(session) = get_session(&state, &session_id).await else {
        return session_not_found(&session_id);
    };

    // Pull the `file` field out of the multipart body
    let mut upload: Option<(String, Vec<u8>)> = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                error!("Malformed multipart body: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Malformed multipart body: {}", e),
                    }),
                )
                    .into_response();
            }
        };

        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("audio").to_string();
            match field.bytes().await {
                Ok(bytes) => upload = Some((file_name, bytes.to_vec())),
                Err(e) => {
                    error!("Failed to read upload: {}", e);
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ErrorResponse {
                            error: format!("Failed to read upload: {}", e),
                        }),
                    )
                        .into_response();
                }
            }
        }
    }

    let Some((file_name, bytes)) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing `file` field in multipart body".to_string(),
            }),
        )
            .into_response();
    };

    if let Err(e) = session.store_upload(&file_name, &bytes).await {
        error!("Upload rejected for session {}: {}", session_id, e);
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: format!("{}", e),
            }),
        )
            .into_response();
    }

    // Transcription runs as part of the upload gesture. A remote failure
    // is recorded in the session, not returned as an HTTP error.
    if let Err(e) = session.transcribe(&state.remote).await {
        error!("Transcription not possible for session {}: {}", session_id, e);
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!("{}", e),
            }),
        )
            .into_response();
    }

    let status: SessionStatus = session.snapshot().await;

    (
        StatusCode::OK,
        Json(TranscribeResponse {
            session_id,
            transcript: status.transcript,
            transcription_tokens: status.usage.transcription_tokens,
            error: status.transcription_error,
        }),
    )
        .into_response()
}

/// POST /sessions/:session_id/summarize
/// Explicit "Summarize Text" action on the held transcript
pub async fn summarize_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let Some(session) = get_session(&state, &session_id).await else {
        return session_not_found(&session_id);
    };

    if let Err(e) = session.summarize(&state.remote).await {
        error!("Summarize rejected for session {}: {}", session_id, e);
        return (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!("{}", e),
            }),
        )
            .into_response();
    }

    let status = session.snapshot().await;

    (
        StatusCode::OK,
        Json(SummarizeResponse {
            session_id,
            summary: status.summary,
            summary_tokens: status.usage.summary_tokens,
            error: status.summary_error,
        }),
    )
        .into_response()
}

/// GET /sessions/:session_id
/// Get the full status snapshot of a session
pub async fn get_session_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match get_session(&state, &session_id).await {
        Some(session) => (StatusCode::OK, Json(session.snapshot().await)).into_response(),
        None => session_not_found(&session_id),
    }
}

/// GET /sessions/:session_id/usage
/// Get the running token counters for a session
pub async fn get_session_usage(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    match get_session(&state, &session_id).await {
        Some(session) => (StatusCode::OK, Json(session.usage().await)).into_response(),
        None => session_not_found(&session_id),
    }
}

/// DELETE /sessions/:session_id
/// End a session: delete its temp audio file and drop it from the map
pub async fn close_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let session = {
        let mut sessions = state.sessions.write().await;
        sessions.remove(&session_id)
    };

    match session {
        Some(session) => {
            session.close().await;
            let usage = session.usage().await;
            info!("Session closed: {}", session_id);
            (
                StatusCode::OK,
                Json(CloseSessionResponse {
                    session_id,
                    status: "closed".to_string(),
                    usage,
                }),
            )
                .into_response()
        }
        None => session_not_found(&session_id),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// ============================================================================
// Helpers
// ============================================================================

async fn get_session(state: &AppState, session_id: &str) -> Option<Arc<WorkflowSession>> {
    let sessions = state.sessions.read().await;
    sessions.get(session_id).cloned()
}

fn session_not_found(session_id: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Session {} not found", session_id),
        }),
    )
        .into_response()
}
