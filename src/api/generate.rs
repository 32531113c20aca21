//! Generation API - AI theme generation for a session
//!
//! POST /sessions/{id}/generate         - Generate a theme from `{prompt}`
//! GET  /sessions/{id}/generate/status  - `{pending, message, lastError}`

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::extract::{ApiJson, ApiPath};
use super::{error_response, AppState};
use crate::generator::GenerateError;
use crate::session::SessionStore;

/// Generation request
#[derive(Debug, Deserialize)]
struct GenerateRequest {
    prompt: String,
}

/// Build the generation router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions/{id}/generate", post(generate_theme))
        .route("/sessions/{id}/generate/status", get(generation_status))
}

/// POST /sessions/{id}/generate
/// Returns the new config; on failure the session config is left as it was
async fn generate_theme(
    ApiPath(id): ApiPath<Uuid>,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> Response {
    if request.prompt.trim().is_empty() {
        return GenerateError::EmptyPrompt.into_response();
    }

    match state.sessions.begin_generation(id).await {
        Ok(true) => {}
        Ok(false) => return GenerateError::Busy.into_response(),
        Err(e) => return e.into_response(),
    }

    // Detached so a dropped client connection cannot leave the session pending
    let task = tokio::spawn(run_generation(state, id, request.prompt));
    match task.await {
        Ok(response) => response,
        Err(e) => {
            error!("Generation task for session {} failed: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Generation task failed")
        }
    }
}

async fn run_generation(state: AppState, id: Uuid, prompt: String) -> Response {
    info!("Generating theme for session {}", id);
    let ticker = spawn_status_ticker(state.sessions.clone(), id, state.status_interval);
    let outcome = state.generator.generate(&prompt).await;
    ticker.abort();

    match outcome {
        Ok(config) => match state.sessions.finish_generation(id, Ok(config)).await {
            Ok(config) => Json(config).into_response(),
            Err(e) => e.into_response(),
        },
        Err(err) => {
            warn!("Generation for session {} failed: {}", id, err);
            if let Err(e) = state
                .sessions
                .finish_generation(id, Err(err.to_string()))
                .await
            {
                return e.into_response();
            }
            err.into_response()
        }
    }
}

/// Rotate the session's status message every `period` until aborted
fn spawn_status_ticker(sessions: Arc<SessionStore>, id: Uuid, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // First tick completes immediately
        interval.tick().await;
        loop {
            interval.tick().await;
            if sessions.advance_status(id).await.is_err() {
                break;
            }
        }
    })
}

/// GET /sessions/{id}/generate/status
async fn generation_status(ApiPath(id): ApiPath<Uuid>, State(state): State<AppState>) -> Response {
    match state.sessions.generation_status(id).await {
        Ok(status) => Json(status).into_response(),
        Err(e) => e.into_response(),
    }
}
