//! Ports - interfaces between the HTTP façade and external collaborators.

mod assistant_provider;

pub use assistant_provider::{
    AssistantProvider, MessageContent, MessageRole, ProviderError, RunStatus, TextBlock,
    ThreadMessage,
};
