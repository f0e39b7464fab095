//! Content Backend Port - the three content operations the wizard needs.
//!
//! Implementations never fail: when the model cannot be used they return a
//! locally produced result tagged [`Origin::Fallback`].
//!
//! [`Origin::Fallback`]: crate::domain::content::Origin::Fallback

use async_trait::async_trait;

use crate::domain::content::{ContentDraft, KeywordSet, PlagiarismResult, Sourced};
use crate::ports::ProviderInfo;

/// Port for drafting, scoring and rephrasing blog content.
#[async_trait]
pub trait ContentBackend: Send + Sync {
    /// Draft a blog post from a title, purpose and keywords.
    async fn generate(
        &self,
        title: &str,
        purpose: &str,
        keywords: &KeywordSet,
    ) -> Sourced<ContentDraft>;

    /// Score content for duplication and annotate flagged passages.
    async fn score(&self, content: &ContentDraft) -> Sourced<PlagiarismResult>;

    /// Rewrite content while keeping every keyword.
    async fn rephrase(&self, content: &ContentDraft, keywords: &KeywordSet) -> Sourced<ContentDraft>;

    /// Provider behind the backend.
    fn backend_info(&self) -> ProviderInfo;
}
