//! LLM-backed ContentBackend implementation.
//!
//! Each operation sends exactly one completion request. Any provider error,
//! and any blank reply, is logged and answered with the matching local
//! fallback instead.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::content::{
    fallback, prompts, ContentDraft, ContentOperation, KeywordSet, PlagiarismResult, Sourced,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, ContentBackend, MessageRole, ProviderInfo};

/// Default cap on generated tokens per request.
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1000;

/// Content backend that delegates to an [`AIProvider`].
pub struct LlmContentBackend {
    ai_provider: Arc<dyn AIProvider>,
    max_output_tokens: u32,
}

impl LlmContentBackend {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self {
            ai_provider,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    /// Sends one request and returns the reply text.
    async fn ask(&self, operation: ContentOperation, prompt: String) -> Result<String, AIError> {
        let request = CompletionRequest::for_operation(operation)
            .with_system_prompt(prompts::SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt)
            .with_max_tokens(self.max_output_tokens);

        let info = self.ai_provider.provider_info();
        tracing::debug!(
            operation = %operation,
            provider = %info.name,
            model = %info.model,
            "Sending completion request"
        );

        let response = self.ai_provider.complete(request).await?;
        tracing::debug!(
            operation = %operation,
            model = %response.model,
            total_tokens = response.usage.total_tokens,
            finish_reason = ?response.finish_reason,
            "Completion received"
        );

        if response.content.trim().is_empty() {
            return Err(AIError::parse("Empty completion"));
        }
        Ok(response.content)
    }

    fn log_fallback(&self, operation: ContentOperation, error: &AIError) {
        tracing::warn!(
            operation = %operation,
            provider = %self.ai_provider.provider_info().name,
            error = %error,
            "AI request failed, using local fallback"
        );
    }
}

#[async_trait]
impl ContentBackend for LlmContentBackend {
    async fn generate(
        &self,
        title: &str,
        purpose: &str,
        keywords: &KeywordSet,
    ) -> Sourced<ContentDraft> {
        let prompt = prompts::generate_prompt(title, purpose, keywords);
        match self.ask(ContentOperation::Generate, prompt).await {
            Ok(text) => Sourced::live(ContentDraft::new(text)),
            Err(err) => {
                self.log_fallback(ContentOperation::Generate, &err);
                Sourced::fallback(fallback::draft(title, purpose, keywords))
            }
        }
    }

    async fn score(&self, content: &ContentDraft) -> Sourced<PlagiarismResult> {
        let prompt = prompts::score_prompt(content);
        match self.ask(ContentOperation::Score, prompt).await {
            Ok(reply) => Sourced::live(PlagiarismResult::from_reply(&reply, content)),
            Err(err) => {
                self.log_fallback(ContentOperation::Score, &err);
                Sourced::fallback(random_plagiarism(content))
            }
        }
    }

    async fn rephrase(&self, content: &ContentDraft, keywords: &KeywordSet) -> Sourced<ContentDraft> {
        let prompt = prompts::rephrase_prompt(content, keywords);
        match self.ask(ContentOperation::Rephrase, prompt).await {
            Ok(text) => Sourced::live(ContentDraft::new(text)),
            Err(err) => {
                self.log_fallback(ContentOperation::Rephrase, &err);
                Sourced::fallback(fallback::rephrase(content, keywords))
            }
        }
    }

    fn backend_info(&self) -> ProviderInfo {
        self.ai_provider.provider_info()
    }
}

// ThreadRng is not Send, so it must not live inside the async fns.
fn random_plagiarism(content: &ContentDraft) -> PlagiarismResult {
    fallback::plagiarism(content, &mut rand::thread_rng())
}
