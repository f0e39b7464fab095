//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - LLM providers (OpenAI, DeepSeek, Gemini, offline, mock)
//! - `content` - Content backend with local fallbacks
//! - `http` - axum routers for the wizard API and the ingest endpoint
//! - `storage` - In-memory wizard session store

pub mod ai;
pub mod content;
pub mod http;
pub mod storage;

pub use content::LlmContentBackend;
pub use http::app_router;
pub use storage::InMemoryWizardStore;
