//! Content backend adapters.

mod llm_backend;

pub use llm_backend::{LlmContentBackend, DEFAULT_MAX_OUTPUT_TOKENS};
