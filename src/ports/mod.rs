//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - one completion request against an LLM service
//! - `ContentBackend` - generate, score and rephrase with local fallbacks
//! - `WizardStore` - live wizard sessions, one lock per session

mod ai_provider;
mod content_backend;
mod wizard_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use content_backend::ContentBackend;
pub use wizard_store::{WizardStore, WizardStoreError};
