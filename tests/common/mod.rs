//! Common test utilities - CystyleTest harness and a mock Venice endpoint

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use cystyle::{Config, Server};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test harness that spawns a real cystyle server on a random port
pub struct CystyleTest {
    pub addr: SocketAddr,
    pub client: Client,
    server: Arc<Server>,
    _handle: JoinHandle<()>,
}

impl CystyleTest {
    /// Start a server with default settings and no reachable AI backend
    pub async fn start() -> Result<Self> {
        Self::start_with(|config| {
            config.venice.base_url = "http://127.0.0.1:9".to_string();
            config.venice.api_key_env = "CYSTYLE_TEST_NO_SUCH_KEY".to_string();
        })
        .await
    }

    /// Start a server wired to a mock Venice endpoint
    pub async fn with_venice(mock: &MockVenice) -> Result<Self> {
        let base_url = mock.base_url();
        Self::start_with(move |config| {
            config.venice.base_url = base_url;
            config.venice.api_key = Some("test-key".to_string());
            config.status_interval_ms = 50;
        })
        .await
    }

    /// Start a server after adjusting the default config
    pub async fn start_with(configure: impl FnOnce(&mut Config)) -> Result<Self> {
        // Find a random available port
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);

        let mut config = Config {
            bind_addr: addr,
            ..Config::default()
        };
        configure(&mut config);

        let server = Arc::new(Server::new(config)?);
        let server_clone = server.clone();

        // Spawn the server in a background task
        let handle = tokio::spawn(async move {
            if let Err(e) = server_clone.run().await {
                eprintln!("Server error: {}", e);
            }
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        // Poll until server is ready (max 2 seconds)
        let mut ready = false;
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if client
                .get(format!("http://{}/health", addr))
                .send()
                .await
                .is_ok()
            {
                ready = true;
                break;
            }
        }

        if !ready {
            panic!("Server failed to start within 2 seconds");
        }

        Ok(Self {
            addr,
            client,
            server,
            _handle: handle,
        })
    }

    /// Get the base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        Ok(self.client.patch(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Create a session and return its id
    pub async fn create_session(&self) -> Result<String> {
        let body: Value = self.post_empty("/sessions").await?.json().await?;
        body["id"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("No session id in {}", body))
    }
}

impl Drop for CystyleTest {
    fn drop(&mut self) {
        self.server.shutdown();
    }
}

struct MockState {
    calls: AtomicUsize,
    status: StatusCode,
    content: String,
    delay: Duration,
    last_request: Mutex<Option<Value>>,
}

/// Mock OpenAI-compatible completion endpoint
pub struct MockVenice {
    addr: SocketAddr,
    state: Arc<MockState>,
    _handle: JoinHandle<()>,
}

impl MockVenice {
    /// Answer every completion with `content`
    pub async fn replying(content: &str) -> Result<Self> {
        Self::start(StatusCode::OK, content, Duration::ZERO).await
    }

    /// Answer after `delay`
    pub async fn slow(content: &str, delay: Duration) -> Result<Self> {
        Self::start(StatusCode::OK, content, delay).await
    }

    /// Fail every completion with `status`
    pub async fn failing(status: StatusCode) -> Result<Self> {
        Self::start(status, "", Duration::ZERO).await
    }

    async fn start(status: StatusCode, content: &str, delay: Duration) -> Result<Self> {
        let state = Arc::new(MockState {
            calls: AtomicUsize::new(0),
            status,
            content: content.to_string(),
            delay,
            last_request: Mutex::new(None),
        });

        let router = Router::new()
            .route("/chat/completions", post(completions))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("Mock Venice error: {}", e);
            }
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Completion requests received so far
    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    /// Body of the most recent completion request
    pub fn last_request(&self) -> Option<Value> {
        self.state
            .last_request
            .lock()
            .expect("mock state poisoned")
            .clone()
    }
}

async fn completions(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> impl IntoResponse {
    state.calls.fetch_add(1, Ordering::SeqCst);
    *state.last_request.lock().expect("mock state poisoned") = Some(body);
    tokio::time::sleep(state.delay).await;

    if !state.status.is_success() {
        return (state.status, Json(json!({ "error": "mock failure" })));
    }

    (
        StatusCode::OK,
        Json(json!({
            "choices": [
                { "message": { "role": "assistant", "content": state.content } }
            ]
        })),
    )
}
