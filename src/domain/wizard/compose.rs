//! Compose step: title, purpose and keywords in, generated draft out.

use super::activity::{Activity, Ticket};
use super::{WizardError, WizardStep};
use crate::domain::content::{CommitKey, ContentDraft, KeywordEntry, KeywordSet};
use crate::domain::foundation::ValidationError;

/// Validated inputs for a generate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub title: String,
    pub purpose: String,
    pub keywords: KeywordSet,
}

/// Local state of the compose step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeView {
    title: String,
    purpose: String,
    keywords: KeywordSet,
    entry: KeywordEntry,
    content: ContentDraft,
    generated: bool,
    activity: Activity,
}

impl ComposeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn keyword_entry(&self) -> &str {
        self.entry.text()
    }

    pub fn content(&self) -> &ContentDraft {
        &self.content
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn is_busy(&self) -> bool {
        self.activity.is_busy()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_purpose(&mut self, purpose: impl Into<String>) {
        self.purpose = purpose.into();
    }

    pub fn set_keyword_entry(&mut self, text: impl Into<String>) {
        self.entry.set_text(text);
    }

    /// Commits the keyword entry. Returns whether a keyword was added.
    pub fn commit_keyword(&mut self, key: CommitKey) -> bool {
        self.entry.commit(key, &mut self.keywords)
    }

    pub fn remove_keyword(&mut self, index: usize) -> Option<String> {
        self.keywords.remove(index)
    }

    /// Validates the form and marks the view busy.
    ///
    /// # Errors
    ///
    /// - `Validation` for a blank title, blank purpose or no keywords
    /// - `OperationInProgress` if a generate call is already running
    pub fn begin_generate(&mut self) -> Result<(Ticket, GenerateRequest), WizardError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::missing_input("title", "Please enter a blog title").into());
        }
        if self.purpose.trim().is_empty() {
            return Err(
                ValidationError::missing_input("purpose", "Please enter a blog purpose").into(),
            );
        }
        if self.keywords.is_empty() {
            return Err(ValidationError::missing_input(
                "keywords",
                "Please add at least one SEO keyword",
            )
            .into());
        }

        let ticket = self.activity.begin(WizardStep::Compose)?;
        Ok((
            ticket,
            GenerateRequest {
                title: self.title.clone(),
                purpose: self.purpose.clone(),
                keywords: self.keywords.clone(),
            },
        ))
    }

    /// Stores the draft. Returns false if the ticket was stale.
    pub fn finish_generate(&mut self, ticket: &Ticket, draft: ContentDraft) -> bool {
        if !self.activity.finish(ticket) {
            return false;
        }
        self.content = draft;
        self.generated = true;
        true
    }

    /// Content to hand to the analyze step.
    ///
    /// # Errors
    ///
    /// `Validation` until a draft has been generated.
    pub fn proceed(&self) -> Result<ContentDraft, WizardError> {
        if !self.generated || self.content.is_empty() {
            return Err(
                ValidationError::missing_input("content", "Please generate content first").into(),
            );
        }
        Ok(self.content.clone())
    }
}
