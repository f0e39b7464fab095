//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Provider used for drafting, scoring and rephrasing
    #[serde(default)]
    pub provider: AiProvider,

    /// OpenAI API key
    pub openai_api_key: Option<Secret<String>>,

    /// DeepSeek API key
    pub deepseek_api_key: Option<Secret<String>>,

    /// Gemini API key
    pub gemini_api_key: Option<Secret<String>>,

    /// Model override for the selected provider
    pub model: Option<String>,

    /// Base URL override for the selected provider
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Output token cap sent with every request
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    OpenAI,
    DeepSeek,
    Gemini,
    /// No outbound calls; every operation uses the local fallback.
    #[default]
    Offline,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// API key for the selected provider, if one is set
    pub fn api_key(&self) -> Option<&str> {
        let key = match self.provider {
            AiProvider::OpenAI => self.openai_api_key.as_ref(),
            AiProvider::DeepSeek => self.deepseek_api_key.as_ref(),
            AiProvider::Gemini => self.gemini_api_key.as_ref(),
            AiProvider::Offline => None,
        };
        key.map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.provider {
            AiProvider::OpenAI if self.api_key().is_none() => {
                return Err(ValidationError::MissingRequired("OPENAI_API_KEY"));
            }
            AiProvider::DeepSeek if self.api_key().is_none() => {
                return Err(ValidationError::MissingRequired("DEEPSEEK_API_KEY"));
            }
            AiProvider::Gemini if self.api_key().is_none() => {
                return Err(ValidationError::MissingRequired("GEMINI_API_KEY"));
            }
            _ => {}
        }

        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if self.max_output_tokens == 0 {
            return Err(ValidationError::InvalidMaxOutputTokens);
        }
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidBaseUrl(url.clone()));
            }
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            openai_api_key: None,
            deepseek_api_key: None,
            gemini_api_key: None,
            model: None,
            base_url: None,
            timeout_secs: default_timeout(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

fn default_max_output_tokens() -> u32 {
    1000
}
