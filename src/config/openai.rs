//! OpenAI provider configuration

use std::time::Duration;

use super::error::ValidationError;

/// OpenAI provider configuration
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// OpenAI API key
    pub api_key: String,

    /// Assistant identity used for every run
    pub assistant_id: String,

    /// Base URL for the API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenAiConfig {
    /// Builds a provider config from raw environment values, filling defaults.
    pub(crate) fn from_env_values(
        api_key: String,
        assistant_id: String,
        base_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        Self {
            api_key,
            assistant_id,
            base_url: base_url.unwrap_or_else(default_base_url),
            timeout_secs: timeout_secs.unwrap_or_else(default_timeout),
        }
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate OpenAI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
        }
        if self.assistant_id.is_empty() {
            return Err(ValidationError::MissingRequired("ASSISTANT_ID"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> OpenAiConfig {
        OpenAiConfig::from_env_values("sk-xxx".to_string(), "asst_123".to_string(), None, None)
    }

    #[test]
    fn defaults_applied() {
        let config = valid_config();
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn timeout_duration() {
        let config = OpenAiConfig {
            timeout_secs: 30,
            ..valid_config()
        };
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn validation_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validation_rejects_empty_api_key() {
        let config = OpenAiConfig {
            api_key: String::new(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("OPENAI_API_KEY"))
        ));
    }

    #[test]
    fn validation_rejects_empty_assistant_id() {
        let config = OpenAiConfig {
            assistant_id: String::new(),
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("ASSISTANT_ID"))
        ));
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let config = OpenAiConfig {
            timeout_secs: 0,
            ..valid_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
