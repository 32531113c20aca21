//! cystyle - Cytube theme configurator
//!
//! Builds channel CSS, JavaScript and MOTD markup from a declarative theme
//! config, with optional AI-generated themes via Venice.

pub mod api;
pub mod generator;
pub mod render;
pub mod session;
pub mod theme;
pub mod venice;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use api::AppState;
use generator::ThemeGenerator;
use session::SessionStore;
use venice::{VeniceClient, VeniceConfig};

/// Config file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "cystyle.toml";

/// Environment prefix for config overrides (`__` separates nested keys)
pub const ENV_PREFIX: &str = "CYSTYLE_";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Rotation period of the pending-generation status message
    pub status_interval_ms: u64,
    pub venice: VeniceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            status_interval_ms: 2000,
            venice: VeniceConfig::default(),
        }
    }
}

impl Config {
    /// Layer defaults, the TOML file (if present) and `CYSTYLE_*` variables
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load the layered configuration
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Ok(Self::figment(path).extract()?)
    }
}

/// The cystyle server instance
pub struct Server {
    config: Config,
    state: AppState,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Result<Self> {
        let venice = VeniceClient::new(config.venice.clone())?;
        if !venice.is_configured() {
            info!(
                "No Venice API key yet ({} unset); generation will fail until it is provided",
                config.venice.api_key_env
            );
        }

        let state = AppState {
            sessions: Arc::new(SessionStore::new()),
            generator: Arc::new(ThemeGenerator::new(venice)),
            status_interval: Duration::from_millis(config.status_interval_ms.max(1)),
        };
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            state,
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Build the router
    fn router(&self) -> Router {
        api::router(self.state.clone())
    }

    /// Run the server until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("cystyle listening on {}", local_addr);

        let router = self.router();
        let mut shutdown_rx = self.shutdown_rx.clone();

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.changed().await.ok();
            })
            .await?;

        info!("cystyle shutdown complete");
        Ok(())
    }

    /// Signal the server to shutdown
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }
}
