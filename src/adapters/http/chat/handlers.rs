//! HTTP handlers for chat relay endpoints.
//!
//! Each handler validates field presence, makes the provider round trip(s),
//! and translates failures through `ChatApiError`. Upstream error detail is
//! logged server-side only.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::ports::AssistantProvider;

use super::dto::{
    ErrorResponse, ListMessagesRequest, ListMessagesResponse, NewThreadResponse,
    SendMessageRequest, SendMessageResponse,
};

/// 400 message when /chat/send lacks a thread id or text.
pub const MISSING_SEND_FIELDS: &str = "Missing required fields: threadId and text";
/// 400 message when /chat/list lacks a thread id.
pub const MISSING_THREAD_ID: &str = "Missing required field: threadId";

// ----- Application State -----

/// Shared application state for chat handlers.
#[derive(Clone)]
pub struct ChatAppState {
    /// The configured provider, shared for the process lifetime.
    pub provider: Arc<dyn AssistantProvider>,
    /// Assistant identity used for every run.
    pub assistant_id: String,
}

impl ChatAppState {
    /// Creates a new ChatAppState.
    pub fn new(provider: Arc<dyn AssistantProvider>, assistant_id: impl Into<String>) -> Self {
        Self {
            provider,
            assistant_id: assistant_id.into(),
        }
    }
}

// ----- GET / -----

/// GET / - liveness probe.
pub async fn root() -> &'static str {
    "Hello World!"
}

// ----- POST /chat/new -----

/// POST /chat/new - Create a new conversation thread.
///
/// # Errors
/// - 500: provider call failed
pub async fn create_thread(
    State(state): State<ChatAppState>,
) -> Result<impl IntoResponse, ChatApiError> {
    let thread_id = state.provider.create_thread().await.map_err(|err| {
        tracing::error!(error = %err, "Error creating thread");
        ChatApiError::Upstream(ChatOperation::CreateThread)
    })?;

    Ok((StatusCode::OK, Json(NewThreadResponse { thread_id })))
}

// ----- POST /chat/send -----

/// POST /chat/send - Append a user message and start a run.
///
/// Appends the message first, then starts the run, in that order.
///
/// # Errors
/// - 400: `threadId` or `text` missing (or empty)
/// - 500: provider call failed
pub async fn send_message(
    State(state): State<ChatAppState>,
    Json(request): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ChatApiError> {
    let (thread_id, text) = match (present(&request.thread_id), present(&request.text)) {
        (Some(thread_id), Some(text)) => (thread_id, text),
        _ => return Err(ChatApiError::Validation(MISSING_SEND_FIELDS)),
    };

    state
        .provider
        .add_user_message(thread_id, text)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Error sending message");
            ChatApiError::Upstream(ChatOperation::SendMessage)
        })?;

    let run_id = state
        .provider
        .create_run(thread_id, &state.assistant_id)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Error sending message");
            ChatApiError::Upstream(ChatOperation::SendMessage)
        })?;

    Ok((StatusCode::OK, Json(SendMessageResponse { run_id })))
}

// ----- POST /chat/list -----

/// POST /chat/list - Fetch the message list, and optionally a run's status.
///
/// When no `runId` is supplied the response carries no `status` key.
///
/// # Errors
/// - 400: `threadId` missing (or empty)
/// - 500: provider call failed
pub async fn list_messages(
    State(state): State<ChatAppState>,
    Json(request): Json<ListMessagesRequest>,
) -> Result<impl IntoResponse, ChatApiError> {
    let thread_id =
        present(&request.thread_id).ok_or(ChatApiError::Validation(MISSING_THREAD_ID))?;

    let messages = state.provider.list_messages(thread_id).await.map_err(|err| {
        tracing::error!(error = %err, "Error listing messages");
        ChatApiError::Upstream(ChatOperation::ListMessages)
    })?;

    let status = match present(&request.run_id) {
        Some(run_id) => Some(
            state
                .provider
                .run_status(thread_id, run_id)
                .await
                .map_err(|err| {
                    tracing::error!(error = %err, "Error listing messages");
                    ChatApiError::Upstream(ChatOperation::ListMessages)
                })?,
        ),
        None => None,
    };

    Ok((StatusCode::OK, Json(ListMessagesResponse { messages, status })))
}

/// Treats absent and empty-string fields the same way.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

// ----- Error Handling -----

/// The relay operation a provider failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOperation {
    CreateThread,
    SendMessage,
    ListMessages,
}

impl ChatOperation {
    /// Fixed caller-facing message for a failure in this operation.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ChatOperation::CreateThread => "Failed to create thread",
            ChatOperation::SendMessage => "Failed to send message",
            ChatOperation::ListMessages => "Failed to list messages",
        }
    }
}

/// API error type that maps relay failures to HTTP responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatApiError {
    /// A required request field was missing.
    Validation(&'static str),
    /// The provider call failed; detail was already logged.
    Upstream(ChatOperation),
}

impl ChatApiError {
    /// Translates the error kind into a status code and caller-facing message.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ChatApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ChatApiError::Upstream(operation) => {
                (StatusCode::INTERNAL_SERVER_ERROR, operation.failure_message())
            }
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = self.status_and_message();
        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
