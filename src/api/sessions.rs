//! Session API - Editing a theme held on the server
//!
//! POST   /sessions                                 - New session with the default theme
//! GET    /sessions/{id}                            - Session snapshot
//! DELETE /sessions/{id}                            - Drop the session
//! GET    /sessions/{id}/config                     - Current config
//! PUT    /sessions/{id}/config                     - Replace config
//! PATCH  /sessions/{id}/config                     - Partial update
//! POST   /sessions/{id}/reset                      - Back to defaults
//! POST   /sessions/{id}/user-styles                - Add a blank user style
//! PUT    /sessions/{id}/user-styles/{style_id}     - Overwrite a user style
//! DELETE /sessions/{id}/user-styles/{style_id}     - Remove a user style
//! GET    /sessions/{id}/output                     - Rendered CSS, JS and MOTD

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use super::extract::{ApiJson, ApiPath};
use super::AppState;
use crate::render::render;
use crate::theme::{ThemeConfig, ThemePatch, UserStyle};

/// Response for session creation
#[derive(Debug, Serialize)]
struct SessionCreateResponse {
    id: Uuid,
    config: ThemeConfig,
}

/// Build the sessions router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session).delete(delete_session))
        .route(
            "/sessions/{id}/config",
            get(get_config).put(replace_config).patch(patch_config),
        )
        .route("/sessions/{id}/reset", post(reset_config))
        .route("/sessions/{id}/user-styles", post(add_user_style))
        .route(
            "/sessions/{id}/user-styles/{style_id}",
            put(update_user_style).delete(delete_user_style),
        )
        .route("/sessions/{id}/output", get(get_output))
}

/// Collapse a store result into a JSON response
fn respond<T: Serialize, E: IntoResponse>(result: Result<T, E>) -> Response {
    match result {
        Ok(value) => Json(value).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(SessionCreateResponse {
            id: session.id,
            config: session.config,
        }),
    )
}

async fn get_session(ApiPath(id): ApiPath<Uuid>, State(state): State<AppState>) -> Response {
    respond(state.sessions.get(id).await)
}

async fn delete_session(ApiPath(id): ApiPath<Uuid>, State(state): State<AppState>) -> Response {
    match state.sessions.remove(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

async fn get_config(ApiPath(id): ApiPath<Uuid>, State(state): State<AppState>) -> Response {
    respond(state.sessions.config(id).await)
}

async fn replace_config(
    ApiPath(id): ApiPath<Uuid>,
    State(state): State<AppState>,
    ApiJson(config): ApiJson<ThemeConfig>,
) -> Response {
    respond(state.sessions.replace_config(id, config).await)
}

async fn patch_config(
    ApiPath(id): ApiPath<Uuid>,
    State(state): State<AppState>,
    ApiJson(patch): ApiJson<ThemePatch>,
) -> Response {
    respond(state.sessions.patch_config(id, patch).await)
}

async fn reset_config(ApiPath(id): ApiPath<Uuid>, State(state): State<AppState>) -> Response {
    respond(state.sessions.reset(id).await)
}

async fn add_user_style(ApiPath(id): ApiPath<Uuid>, State(state): State<AppState>) -> Response {
    match state.sessions.add_user_style(id).await {
        Ok(style) => (StatusCode::CREATED, Json(style)).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn update_user_style(
    ApiPath((id, style_id)): ApiPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
    ApiJson(style): ApiJson<UserStyle>,
) -> Response {
    respond(state.sessions.update_user_style(id, style_id, style).await)
}

async fn delete_user_style(
    ApiPath((id, style_id)): ApiPath<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> Response {
    respond(state.sessions.remove_user_style(id, style_id).await)
}

async fn get_output(ApiPath(id): ApiPath<Uuid>, State(state): State<AppState>) -> Response {
    respond(state.sessions.config(id).await.map(|config| render(&config)))
}
