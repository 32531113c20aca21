//! Editing sessions
//!
//! Provides:
//! - One working `ThemeConfig` per session, held in memory
//! - Config replace, patch and reset
//! - User style list edits
//! - Generation bookkeeping: the single-pending guard and status message

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::generator::loading_message;
use crate::theme::{ThemeConfig, ThemeError, ThemePatch, UserStyle};

/// Session errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),

    #[error("user style not found: {0}")]
    UserStyleNotFound(Uuid),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<ThemeError> for SessionError {
    fn from(err: ThemeError) -> Self {
        match err {
            ThemeError::UserStyleNotFound(id) => SessionError::UserStyleNotFound(id),
            other => SessionError::InvalidConfig(other.to_string()),
        }
    }
}

/// Progress of the session's AI generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStatus {
    pub pending: bool,
    /// Rotating status line while pending
    pub message: Option<String>,
    /// Message of the last failed generation, cleared by the next start
    pub last_error: Option<String>,
    #[serde(skip)]
    tick: usize,
}

/// One editing session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub config: ThemeConfig,
    pub generation: GenerationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            config: ThemeConfig::default(),
            generation: GenerationStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// In-memory session registry
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session holding the default config
    pub async fn create(&self) -> Session {
        let session = Session::new();
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        info!("Created session {}", session.id);
        session
    }

    /// Snapshot of a session
    pub async fn get(&self, id: Uuid) -> Result<Session, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))
    }

    /// Drop a session
    pub async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| info!("Removed session {}", id))
            .ok_or(SessionError::NotFound(id))
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Run `f` against a session under the write lock
    async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        f(session)
    }

    /// Current config
    pub async fn config(&self, id: Uuid) -> Result<ThemeConfig, SessionError> {
        self.get(id).await.map(|s| s.config)
    }

    /// Replace the whole config
    pub async fn replace_config(
        &self,
        id: Uuid,
        config: ThemeConfig,
    ) -> Result<ThemeConfig, SessionError> {
        config.validate()?;
        self.with_session(id, |session| {
            session.config = config;
            session.touch();
            Ok(session.config.clone())
        })
        .await
    }

    /// Apply a partial update over the current config
    pub async fn patch_config(
        &self,
        id: Uuid,
        patch: ThemePatch,
    ) -> Result<ThemeConfig, SessionError> {
        self.with_session(id, |session| {
            let mut updated = session.config.clone();
            patch.apply_to(&mut updated);
            updated.validate()?;
            session.config = updated;
            session.touch();
            Ok(session.config.clone())
        })
        .await
    }

    /// Restore the default config
    pub async fn reset(&self, id: Uuid) -> Result<ThemeConfig, SessionError> {
        self.with_session(id, |session| {
            session.config = ThemeConfig::default();
            session.touch();
            debug!("Reset session {}", id);
            Ok(session.config.clone())
        })
        .await
    }

    /// Append a blank user style
    pub async fn add_user_style(&self, id: Uuid) -> Result<UserStyle, SessionError> {
        self.with_session(id, |session| {
            let style = session.config.add_user_style().clone();
            session.touch();
            Ok(style)
        })
        .await
    }

    /// Overwrite a user style, keeping its id
    pub async fn update_user_style(
        &self,
        id: Uuid,
        style_id: Uuid,
        style: UserStyle,
    ) -> Result<UserStyle, SessionError> {
        self.with_session(id, |session| {
            session.config.update_user_style(style_id, style)?;
            session.touch();
            session
                .config
                .user_styles
                .iter()
                .find(|s| s.id == style_id)
                .cloned()
                .ok_or(SessionError::UserStyleNotFound(style_id))
        })
        .await
    }

    /// Remove a user style
    pub async fn remove_user_style(
        &self,
        id: Uuid,
        style_id: Uuid,
    ) -> Result<UserStyle, SessionError> {
        self.with_session(id, |session| {
            let removed = session.config.remove_user_style(style_id)?;
            session.touch();
            Ok(removed)
        })
        .await
    }

    /// Generation status
    pub async fn generation_status(&self, id: Uuid) -> Result<GenerationStatus, SessionError> {
        self.get(id).await.map(|s| s.generation)
    }

    /// Mark a generation as started
    ///
    /// Returns `false` without changes when one is already pending.
    pub async fn begin_generation(&self, id: Uuid) -> Result<bool, SessionError> {
        self.with_session(id, |session| {
            let status = &mut session.generation;
            if status.pending {
                return Ok(false);
            }
            *status = GenerationStatus {
                pending: true,
                message: Some(loading_message(0).to_string()),
                last_error: None,
                tick: 0,
            };
            Ok(true)
        })
        .await
    }

    /// Rotate the status message of a pending generation
    pub async fn advance_status(&self, id: Uuid) -> Result<(), SessionError> {
        self.with_session(id, |session| {
            let status = &mut session.generation;
            if status.pending {
                status.tick += 1;
                status.message = Some(loading_message(status.tick).to_string());
            }
            Ok(())
        })
        .await
    }

    /// Finish a generation, installing the new config on success
    ///
    /// A failed generation leaves the config untouched.
    pub async fn finish_generation(
        &self,
        id: Uuid,
        outcome: Result<ThemeConfig, String>,
    ) -> Result<ThemeConfig, SessionError> {
        self.with_session(id, |session| {
            session.generation.pending = false;
            session.generation.message = None;
            match outcome {
                Ok(config) => {
                    session.config = config;
                    session.generation.last_error = None;
                    session.touch();
                }
                Err(message) => session.generation.last_error = Some(message),
            }
            Ok(session.config.clone())
        })
        .await
    }
}
