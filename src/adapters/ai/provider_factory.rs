//! Builds the configured AIProvider.

use std::sync::Arc;

use super::{GeminiConfig, GeminiProvider, OfflineProvider, OpenAIConfig, OpenAIProvider};
use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider};

/// Creates the provider selected by `config.provider`, applying the model,
/// base URL and timeout overrides.
pub fn provider_from_config(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    let provider: Arc<dyn AIProvider> = match config.provider {
        AiProvider::OpenAI | AiProvider::DeepSeek => {
            let key = config.api_key().ok_or(AIError::NotConfigured)?;
            let mut openai = if config.provider == AiProvider::DeepSeek {
                OpenAIConfig::deepseek(key)
            } else {
                OpenAIConfig::new(key)
            }
            .with_timeout(config.timeout());
            if let Some(model) = &config.model {
                openai = openai.with_model(model);
            }
            if let Some(url) = &config.base_url {
                openai = openai.with_base_url(url);
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
        AiProvider::Gemini => {
            let key = config.api_key().ok_or(AIError::NotConfigured)?;
            let mut gemini = GeminiConfig::new(key).with_timeout(config.timeout());
            if let Some(model) = &config.model {
                gemini = gemini.with_model(model);
            }
            if let Some(url) = &config.base_url {
                gemini = gemini.with_base_url(url);
            }
            Arc::new(GeminiProvider::new(gemini)?)
        }
        AiProvider::Offline => Arc::new(OfflineProvider::new()),
    };

    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "AI provider configured");
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ProviderInfo;
    use secrecy::Secret;

    #[test]
    fn offline_is_the_default() {
        let provider = provider_from_config(&AiConfig::default()).unwrap();
        assert_eq!(provider.provider_info().name, "offline");
    }

    #[test]
    fn deepseek_uses_openai_protocol_with_own_defaults() {
        let config = AiConfig {
            provider: AiProvider::DeepSeek,
            deepseek_api_key: Some(Secret::new("sk-ds".to_string())),
            ..Default::default()
        };
        let provider = provider_from_config(&config).unwrap();
        assert_eq!(
            provider.provider_info(),
            ProviderInfo::new("deepseek", "deepseek-chat")
        );
    }

    #[test]
    fn model_override_is_applied() {
        let config = AiConfig {
            provider: AiProvider::Gemini,
            gemini_api_key: Some(Secret::new("AIza".to_string())),
            model: Some("gemini-1.5-flash".to_string()),
            ..Default::default()
        };
        let provider = provider_from_config(&config).unwrap();
        assert_eq!(
            provider.provider_info(),
            ProviderInfo::new("gemini", "gemini-1.5-flash")
        );
    }

    #[test]
    fn missing_key_is_not_configured() {
        let config = AiConfig {
            provider: AiProvider::OpenAI,
            ..Default::default()
        };
        assert!(matches!(
            provider_from_config(&config),
            Err(AIError::NotConfigured)
        ));
    }
}
