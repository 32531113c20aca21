//! HTTP API module - REST endpoints for rendering, sessions and generation

mod extract;
mod generate;
mod sessions;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::generator::{GenerateError, ThemeGenerator};
use crate::render::render;
use crate::session::{SessionError, SessionStore};
use crate::theme::ThemeConfig;

use extract::ApiJson;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub generator: Arc<ThemeGenerator>,
    /// How often the pending-generation status message rotates
    pub status_interval: Duration,
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .route("/render", post(render_config))
        .merge(sessions::router())
        .merge(generate::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error response
#[derive(Debug, Serialize)]
pub(crate) struct ErrorResponse {
    error: String,
}

/// `{error}` body with a status code
pub(crate) fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = match self {
            SessionError::NotFound(_) | SessionError::UserStyleNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            SessionError::InvalidConfig(_) => StatusCode::BAD_REQUEST,
        };
        error_response(status, self.to_string())
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        let status = match self {
            GenerateError::EmptyPrompt => StatusCode::BAD_REQUEST,
            GenerateError::Busy => StatusCode::CONFLICT,
            GenerateError::MissingCredential(_) => StatusCode::SERVICE_UNAVAILABLE,
            GenerateError::Transport(_)
            | GenerateError::Service { .. }
            | GenerateError::InvalidResponse => StatusCode::BAD_GATEWAY,
        };
        error_response(status, self.to_string())
    }
}

/// Root endpoint
async fn root() -> impl IntoResponse {
    Json(RootResponse {
        name: "cystyle",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        sessions: state.sessions.len().await,
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    sessions: usize,
}

/// POST /render
/// Renders a config without touching any session
async fn render_config(ApiJson(config): ApiJson<ThemeConfig>) -> impl IntoResponse {
    Json(render(&config))
}
