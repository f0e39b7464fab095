//! Scripted AI provider for handler and router tests.
//!
//! Replies are queued up front and handed out one per call. A delay can be
//! set to hold a call in flight, which is how tests observe busy steps and
//! abandoned requests.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("# Remote Work")
//!     .with_error(MockError::AuthenticationFailed);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Reply used once the script runs out.
const UNSCRIPTED_REPLY: &str = "Mock response";

/// Provider that replays a script of replies and records every request.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    script: Arc<Mutex<VecDeque<Result<String, MockError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// Failures a script can inject.
#[derive(Debug, Clone)]
pub enum MockError {
    Unavailable { message: String },
    AuthenticationFailed,
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
        }
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(Ok(content.into()))
    }

    /// Queues a failure.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(Err(error))
    }

    /// Holds every call for `delay` before replying.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn push(self, entry: Result<String, MockError>) -> Self {
        self.script.lock().unwrap().push_back(entry);
        self
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.calls.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = self.script.lock().unwrap().pop_front();
        let content = next.unwrap_or_else(|| Ok(UNSCRIPTED_REPLY.to_string()))?;
        Ok(CompletionResponse {
            content,
            usage: TokenUsage::new(10, 20),
            model: self.provider_info().model,
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model-1")
    }
}
