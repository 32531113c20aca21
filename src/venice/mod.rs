//! Venice AI integration
//!
//! Provides:
//! - Chat completions via the Venice API (OpenAI-compatible)
//! - Structured output through a JSON schema `response_format`
//! - Credential lookup at call time, so the key can be set after startup

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.venice.ai/api/v1";

/// Default environment variable holding the API key
pub const DEFAULT_API_KEY_ENV: &str = "VENICE_API_KEY";

/// Venice client errors
#[derive(Debug, Error)]
pub enum VeniceError {
    #[error("{0} environment variable not found")]
    MissingCredential(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: {status}")]
    Service { status: u16, body: String },

    #[error("no response from API")]
    EmptyResponse,
}

/// Client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VeniceConfig {
    /// API base URL, without the trailing `/chat/completions`
    pub base_url: String,
    /// Chat model name
    pub model: String,
    /// Explicit API key; takes precedence over the environment
    pub api_key: Option<String>,
    /// Environment variable read for the key when `api_key` is unset
    pub api_key_env: String,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for VeniceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: "llama-3.3-70b".to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_secs: 60,
            max_tokens: 4096,
            temperature: 0.7,
        }
    }
}

/// Chat message for LLM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

/// `response_format` asking for JSON that matches a schema
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Clone, Serialize)]
struct JsonSchemaFormat {
    name: String,
    strict: bool,
    schema: serde_json::Value,
}

impl ResponseFormat {
    /// Non-strict schema: the model may leave properties out
    pub fn json_schema(name: &str, schema: serde_json::Value) -> Self {
        Self {
            kind: "json_schema",
            json_schema: JsonSchemaFormat {
                name: name.to_string(),
                strict: false,
                schema,
            },
        }
    }
}

/// Chat completion request
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a ResponseFormat>,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Venice AI client
#[derive(Debug, Clone)]
pub struct VeniceClient {
    client: Client,
    config: VeniceConfig,
}

impl VeniceClient {
    /// Create a client from settings
    pub fn new(config: VeniceConfig) -> Result<Self, VeniceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Resolve the API key, explicit setting first, then the environment
    pub fn api_key(&self) -> Result<String, VeniceError> {
        if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            return Ok(key.to_string());
        }
        std::env::var(&self.config.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| VeniceError::MissingCredential(self.config.api_key_env.clone()))
    }

    /// Whether a key is currently available
    pub fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }

    /// Send a chat completion request and return the first choice's content
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        response_format: Option<&ResponseFormat>,
    ) -> Result<String, VeniceError> {
        let api_key = self.api_key()?;

        let request = ChatRequest {
            model: &self.config.model,
            messages,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            response_format,
        };

        debug!("Sending chat request to Venice API: {}", request.model);

        let response = self
            .client
            .post(format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Venice API error: {} - {}", status, body);
            return Err(VeniceError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(VeniceError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_env(var: &str) -> VeniceConfig {
        VeniceConfig {
            api_key_env: var.to_string(),
            ..VeniceConfig::default()
        }
    }

    #[test]
    fn test_chat_message_creation() {
        let user = ChatMessage::user("Hello");
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "Hello");
    }

    #[test]
    fn test_missing_credential() {
        let client = VeniceClient::new(config_with_env("CYSTYLE_TEST_UNSET_KEY_1")).unwrap();
        assert!(!client.is_configured());
        match client.api_key() {
            Err(VeniceError::MissingCredential(var)) => {
                assert_eq!(var, "CYSTYLE_TEST_UNSET_KEY_1")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_credential_read_at_call_time() {
        let var = "CYSTYLE_TEST_LATE_KEY";
        let client = VeniceClient::new(config_with_env(var)).unwrap();
        assert!(!client.is_configured());

        std::env::set_var(var, "secret");
        assert_eq!(client.api_key().unwrap(), "secret");
        std::env::remove_var(var);
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = VeniceConfig {
            api_key: Some("explicit".to_string()),
            ..config_with_env("CYSTYLE_TEST_UNSET_KEY_2")
        };
        let client = VeniceClient::new(config).unwrap();
        assert_eq!(client.api_key().unwrap(), "explicit");
    }

    #[test]
    fn test_request_shape() {
        let format = ResponseFormat::json_schema("theme", serde_json::json!({"type": "object"}));
        let messages = [ChatMessage::user("hi")];
        let request = ChatRequest {
            model: "m",
            messages: &messages,
            max_tokens: 10,
            temperature: 0.5,
            response_format: Some(&format),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"]["type"], "json_schema");
        assert_eq!(value["response_format"]["json_schema"]["name"], "theme");
        assert_eq!(value["response_format"]["json_schema"]["schema"]["type"], "object");
        assert_eq!(value["messages"][0]["content"], "hi");
    }

    #[test]
    fn test_plain_request_omits_format() {
        let request = ChatRequest {
            model: "m",
            messages: &[],
            max_tokens: 10,
            temperature: 0.5,
            response_format: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("response_format").is_none());
    }
}
