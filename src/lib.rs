//! Assistant Relay - HTTP façade over the OpenAI Assistants API.
//!
//! Forwards chat requests (create conversation, send message, list messages)
//! to a hosted-assistant provider, holding no state of its own beyond the
//! process configuration.

pub mod adapters;
pub mod config;
pub mod ports;
