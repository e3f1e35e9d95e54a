//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. The relay reads flat, conventional variable
//! names (`OPENAI_API_KEY`, `ASSISTANT_ID`, `PORT`) rather than a prefixed
//! scheme, matching what deployments of this service already set.
//!
//! # Example
//!
//! ```no_run
//! use assistant_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod openai;
mod server;

pub use error::{ConfigError, ValidationError};
pub use openai::OpenAiConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration (host, port)
    pub server: ServerConfig,

    /// OpenAI provider configuration (credential, assistant identity)
    pub openai: OpenAiConfig,
}

/// Flat environment-variable shape the process is configured with.
#[derive(Debug, Deserialize)]
struct RawEnv {
    openai_api_key: String,
    assistant_id: String,
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    openai_base_url: Option<String>,
    #[serde(default)]
    openai_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads the flat environment variables listed in [`RawEnv`]
    /// 3. Assembles typed configuration structs, filling in defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `OPENAI_API_KEY` or `ASSISTANT_ID` is absent,
    /// or if a value cannot be parsed into its expected type.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let raw: RawEnv = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()?;

        Ok(Self {
            server: ServerConfig::from_env_values(raw.host, raw.port),
            openai: OpenAiConfig::from_env_values(
                raw.openai_api_key,
                raw.assistant_id,
                raw.openai_base_url,
                raw.openai_timeout_secs,
            ),
        })
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.openai.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test-xxx");
        env::set_var("ASSISTANT_ID", "asst_test123");
    }

    fn clear_env() {
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("ASSISTANT_ID");
        env::remove_var("PORT");
        env::remove_var("HOST");
        env::remove_var("OPENAI_BASE_URL");
        env::remove_var("OPENAI_TIMEOUT_SECS");
    }

    #[test]
    fn load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.openai.api_key, "sk-test-xxx");
        assert_eq!(config.openai.assistant_id, "asst_test123");
    }

    #[test]
    fn load_fails_without_api_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("ASSISTANT_ID", "asst_test123");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn load_fails_without_assistant_id() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test-xxx");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn server_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("PORT", "8080");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }
}
