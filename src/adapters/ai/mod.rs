//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for various LLM providers.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI chat completions; also serves DeepSeek
//! - `GeminiProvider` - Google Gemini `generateContent`
//! - `OfflineProvider` - Always fails, forcing the local fallback
//! - `MockAIProvider` - Scripted provider for tests
//!
//! `provider_from_config` picks one from `AiConfig`.

mod gemini_provider;
mod mock_provider;
mod offline_provider;
mod openai_provider;
mod provider_factory;

pub use gemini_provider::{GeminiConfig, GeminiProvider, GEMINI_BASE_URL, GEMINI_DEFAULT_MODEL};
pub use mock_provider::{MockAIProvider, MockError};
pub use offline_provider::OfflineProvider;
pub use openai_provider::{
    OpenAIConfig, OpenAIProvider, DEEPSEEK_BASE_URL, DEEPSEEK_DEFAULT_MODEL, OPENAI_BASE_URL,
    OPENAI_DEFAULT_MODEL,
};
pub use provider_factory::provider_from_config;
