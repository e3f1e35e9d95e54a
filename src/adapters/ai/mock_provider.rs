//! Mock Assistant Provider for testing.
//!
//! Configurable implementation of the AssistantProvider port, allowing tests
//! to run without calling the real API.
//!
//! # Features
//!
//! - Pre-configured identifiers, statuses, and message lists
//! - Error injection for failure-path testing
//! - Call tracking for verification (which ops ran, in what order)
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAssistantProvider::new()
//!     .with_run_id("run_1")
//!     .with_status(RunStatus::Completed);
//!
//! let run_id = provider.create_run("t1", "asst_1").await?;
//! assert_eq!(provider.calls().len(), 1);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{AssistantProvider, ProviderError, RunStatus, ThreadMessage};

/// A recorded provider invocation, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    CreateThread,
    AddUserMessage { thread_id: String, text: String },
    CreateRun { thread_id: String, assistant_id: String },
    RunStatus { thread_id: String, run_id: String },
    ListMessages { thread_id: String },
}

#[derive(Debug)]
struct MockState {
    thread_id: String,
    run_id: String,
    status: RunStatus,
    messages: Vec<ThreadMessage>,
    failure: Option<ProviderError>,
    calls: Vec<ProviderCall>,
}

/// Mock assistant provider for testing.
#[derive(Debug, Clone)]
pub struct MockAssistantProvider {
    state: Arc<Mutex<MockState>>,
}

impl Default for MockAssistantProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAssistantProvider {
    /// Creates a mock that succeeds with default identifiers.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                thread_id: "thread_mock_1".to_string(),
                run_id: "run_mock_1".to_string(),
                status: RunStatus::Queued,
                messages: Vec::new(),
                failure: None,
                calls: Vec::new(),
            })),
        }
    }

    /// Sets the thread id returned by `create_thread`.
    pub fn with_thread_id(self, thread_id: impl Into<String>) -> Self {
        self.state.lock().unwrap().thread_id = thread_id.into();
        self
    }

    /// Sets the run id returned by `create_run`.
    pub fn with_run_id(self, run_id: impl Into<String>) -> Self {
        self.state.lock().unwrap().run_id = run_id.into();
        self
    }

    /// Sets the status returned by `run_status`.
    pub fn with_status(self, status: RunStatus) -> Self {
        self.state.lock().unwrap().status = status;
        self
    }

    /// Sets the messages returned by `list_messages`.
    pub fn with_messages(self, messages: Vec<ThreadMessage>) -> Self {
        self.state.lock().unwrap().messages = messages;
        self
    }

    /// Makes every provider call fail with the given error.
    pub fn failing_with(self, error: ProviderError) -> Self {
        self.state.lock().unwrap().failure = Some(error);
        self
    }

    /// Returns the calls made so far, in order.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: ProviderCall) -> Result<(), ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match &state.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AssistantProvider for MockAssistantProvider {
    async fn create_thread(&self) -> Result<String, ProviderError> {
        self.record(ProviderCall::CreateThread)?;
        Ok(self.state.lock().unwrap().thread_id.clone())
    }

    async fn add_user_message(&self, thread_id: &str, text: &str) -> Result<(), ProviderError> {
        self.record(ProviderCall::AddUserMessage {
            thread_id: thread_id.to_string(),
            text: text.to_string(),
        })
    }

    async fn create_run(
        &self,
        thread_id: &str,
        assistant_id: &str,
    ) -> Result<String, ProviderError> {
        self.record(ProviderCall::CreateRun {
            thread_id: thread_id.to_string(),
            assistant_id: assistant_id.to_string(),
        })?;
        Ok(self.state.lock().unwrap().run_id.clone())
    }

    async fn run_status(&self, thread_id: &str, run_id: &str) -> Result<RunStatus, ProviderError> {
        self.record(ProviderCall::RunStatus {
            thread_id: thread_id.to_string(),
            run_id: run_id.to_string(),
        })?;
        Ok(self.state.lock().unwrap().status)
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>, ProviderError> {
        self.record(ProviderCall::ListMessages {
            thread_id: thread_id.to_string(),
        })?;
        Ok(self.state.lock().unwrap().messages.clone())
    }
}
