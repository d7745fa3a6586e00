use super::state::AppState;
use crate::interview::{script, AnswerTurn, InterviewError};
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    /// Opaque client-supplied session identifier.
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub ai_transcript: String,
    /// Base64-encoded synthesized audio.
    pub audio: String,
    /// Seconds the client should wait before recording, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub user_transcript: String,
    pub ai_transcript: String,
    pub audio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_time: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct TranscriptOnlyResponse {
    pub user_transcript: String,
}

#[derive(Debug, Serialize)]
pub struct ConcludedResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(err: InterviewError) -> Response {
    if err.is_client_error() {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response()
    } else {
        error!("Interview operation failed: {:#}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /question?session_id=...
/// Fetch the next interviewer question, creating the session on first use
pub async fn get_question(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> impl IntoResponse {
    info!("Question fetch for session: {}", query.session_id);

    match state.interviewer.fetch_question(&query.session_id).await {
        Ok(turn) => (
            StatusCode::OK,
            Json(QuestionResponse {
                ai_transcript: turn.text,
                audio: turn.audio,
                wait_time: turn.wait_secs,
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /answer?session_id=...
/// Submit a recorded answer as a multipart `file` field
pub async fn submit_answer(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    info!("Answer submission for session: {}", query.session_id);

    // Pull the recorded blob out of the multipart body.
    let mut upload: Option<(Vec<u8>, String, String)> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }
                let file_name = field.file_name().unwrap_or("audio.webm").to_string();
                let mime_type = field.content_type().unwrap_or("audio/webm").to_string();
                match field.bytes().await {
                    Ok(bytes) => {
                        upload = Some((bytes.to_vec(), file_name, mime_type));
                        break;
                    }
                    Err(e) => {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read uploaded file: {e}"),
                            }),
                        )
                            .into_response();
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Invalid multipart body: {e}"),
                    }),
                )
                    .into_response();
            }
        }
    }

    let Some((audio, file_name, mime_type)) = upload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing multipart field: file".to_string(),
            }),
        )
            .into_response();
    };

    match state
        .interviewer
        .submit_answer(&query.session_id, audio, &file_name, &mime_type)
        .await
    {
        Ok(AnswerTurn::Reply {
            user_transcript,
            text,
            audio,
            wait_secs,
        }) => (
            StatusCode::OK,
            Json(AnswerResponse {
                user_transcript,
                ai_transcript: text,
                audio,
                wait_time: wait_secs,
            }),
        )
            .into_response(),
        Ok(AnswerTurn::TranscriptOnly { user_transcript }) => (
            StatusCode::OK,
            Json(TranscriptOnlyResponse { user_transcript }),
        )
            .into_response(),
        Ok(AnswerTurn::Concluded) => (
            StatusCode::OK,
            Json(ConcludedResponse {
                message: script::CONCLUDED_MESSAGE.to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
