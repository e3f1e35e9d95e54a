//! Assistant Provider Port - Interface for the hosted-assistant API.
//!
//! This port abstracts the conversation provider (OpenAI Assistants), letting
//! the HTTP façade create threads, append messages, and start runs without
//! coupling to a specific client implementation.
//!
//! # Design
//!
//! - One method per provider round trip; no batching, no retries at this seam
//! - Thread and run identifiers are opaque strings owned by the provider;
//!   nothing here retains them between calls
//! - Error types cover the common failure modes (auth, rate limits, network)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for hosted-assistant conversation operations.
///
/// Implementations connect to the external assistant API and translate
/// between its wire format and these provider-agnostic types.
#[async_trait]
pub trait AssistantProvider: Send + Sync {
    /// Create a new conversation thread, returning its opaque identifier.
    async fn create_thread(&self) -> Result<String, ProviderError>;

    /// Append a user-role message to an existing thread.
    async fn add_user_message(&self, thread_id: &str, text: &str) -> Result<(), ProviderError>;

    /// Start a run of the given assistant against a thread, returning the
    /// run's opaque identifier.
    async fn create_run(&self, thread_id: &str, assistant_id: &str)
        -> Result<String, ProviderError>;

    /// Fetch the current status of a run.
    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus, ProviderError>;

    /// Fetch the full message list for a thread, in provider order.
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, ProviderError>;
}

/// A message record as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadMessage {
    /// Provider-assigned message identifier.
    pub id: String,
    /// Who sent this message.
    pub role: MessageRole,
    /// Message content blocks.
    pub content: Vec<MessageContent>,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

/// Role of a thread message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One content block of a thread message.
///
/// The provider may emit block types beyond text (e.g. image attachments);
/// those are tolerated on decode and relayed as `Unsupported`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: TextBlock },
    #[serde(other)]
    Unsupported,
}

/// Text payload of a content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub value: String,
}

/// Provider-defined run status progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Incomplete,
    Expired,
}

/// Assistant provider errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Request rejected by the provider (bad or unknown identifiers).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl ProviderError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
