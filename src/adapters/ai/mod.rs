//! AI adapters - assistant provider implementations.

mod mock_provider;
mod openai_assistants;

pub use mock_provider::{MockAssistantProvider, ProviderCall};
pub use openai_assistants::{OpenAiAssistants, OpenAiAssistantsConfig};
