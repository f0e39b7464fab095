//! Offline Provider - an AIProvider that never reaches the network.
//!
//! Selected when no API key is configured. Every completion fails with
//! `AIError::NotConfigured`, so the content backend always answers with its
//! local fallback.

use async_trait::async_trait;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AIProvider for OfflineProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        Err(AIError::NotConfigured)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("offline", "local-fallback")
    }
}
