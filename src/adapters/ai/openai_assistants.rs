//! OpenAI Assistants client - Implementation of AssistantProvider.
//!
//! Talks to the Assistants v2 REST API (threads, thread messages, runs).
//! Every port method is a single round trip; failed calls are classified into
//! `ProviderError` and surfaced to the caller without retry.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiAssistantsConfig::new(api_key)
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let provider = OpenAiAssistants::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{AssistantProvider, ProviderError, RunStatus, ThreadMessage};

/// Configuration for the OpenAI Assistants client.
#[derive(Debug, Clone)]
pub struct OpenAiAssistantsConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiAssistantsConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI Assistants API client.
pub struct OpenAiAssistants {
    config: OpenAiAssistantsConfig,
    client: Client,
}

impl OpenAiAssistants {
    /// Creates a new client with the given configuration.
    pub fn new(config: OpenAiAssistantsConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("OpenAI-Beta", "assistants=v2")
    }

    /// Sends a request and classifies transport-level failures.
    async fn send(&self, builder: RequestBuilder) -> Result<Response, ProviderError> {
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    timeout_secs: self.config.timeout.as_secs() as u32,
                }
            } else if e.is_connect() {
                ProviderError::network(format!("Connection failed: {}", e))
            } else {
                ProviderError::network(e.to_string())
            }
        })?;

        self.handle_response_status(response).await
    }

    /// Parses the API response status and handles errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ProviderError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 => Err(ProviderError::AuthenticationFailed),
            429 => {
                let retry_after = Self::parse_retry_after(&error_body);
                Err(ProviderError::rate_limited(retry_after))
            }
            400 | 404 => Err(ProviderError::InvalidRequest(error_body)),
            500..=599 => Err(ProviderError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(ProviderError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    /// Parses retry-after from error response.
    fn parse_retry_after(error_body: &str) -> u32 {
        // OpenAI includes retry-after in the error message sometimes
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
            if let Some(msg) = parsed.get("error").and_then(|e| e.get("message")) {
                if let Some(s) = msg.as_str() {
                    // Try to find "try again in Xs" pattern
                    if let Some(idx) = s.find("try again in ") {
                        let rest = &s[idx + 13..];
                        if let Some(num_end) = rest.find(|c: char| !c.is_ascii_digit()) {
                            if let Ok(secs) = rest[..num_end].parse::<u32>() {
                                return secs;
                            }
                        }
                    }
                }
            }
        }
        30 // Default retry after
    }

    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: Response,
    ) -> Result<T, ProviderError> {
        response
            .json()
            .await
            .map_err(|e| ProviderError::parse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl AssistantProvider for OpenAiAssistants {
    async fn create_thread(&self) -> Result<String, ProviderError> {
        let response = self
            .send(
                self.request(Method::POST, "/threads")
                    .json(&serde_json::json!({})),
            )
            .await?;

        let thread: ThreadObject = Self::parse_json(response).await?;
        Ok(thread.id)
    }

    async fn add_user_message(&self, thread_id: &str, text: &str) -> Result<(), ProviderError> {
        let path = format!("/threads/{}/messages", thread_id);
        self.send(self.request(Method::POST, &path).json(&CreateMessageBody {
            role: "user",
            content: text,
        }))
        .await?;

        Ok(())
    }

    async fn create_run(
        &self,
        thread_id: &str,
        assistant_id: &str,
    ) -> Result<String, ProviderError> {
        let path = format!("/threads/{}/runs", thread_id);
        let response = self
            .send(
                self.request(Method::POST, &path)
                    .json(&CreateRunBody { assistant_id }),
            )
            .await?;

        let run: RunObject = Self::parse_json(response).await?;
        Ok(run.id)
    }

    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus, ProviderError> {
        let path = format!("/threads/{}/runs/{}", thread_id, run_id);
        let response = self.send(self.request(Method::GET, &path)).await?;

        let run: RunObject = Self::parse_json(response).await?;
        Ok(run.status)
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, ProviderError> {
        let path = format!("/threads/{}/messages", thread_id);
        let response = self.send(self.request(Method::GET, &path)).await?;

        let list: MessageListObject = Self::parse_json(response).await?;
        Ok(list.data)
    }
}

// ----- Assistants API Wire Types -----

#[derive(Debug, Serialize)]
struct CreateMessageBody<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateRunBody<'a> {
    assistant_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct ThreadObject {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RunObject {
    id: String,
    status: RunStatus,
}

#[derive(Debug, Deserialize)]
struct MessageListObject {
    data: Vec<ThreadMessage>,
}
