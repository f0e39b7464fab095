//! Analyze step: plagiarism check over the composed content.

use super::activity::{Activity, Ticket};
use super::{WizardError, WizardStep};
use crate::domain::content::{ContentDraft, PlagiarismResult, Severity};
use crate::domain::foundation::ValidationError;

/// Local state of the analyze step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeView {
    content: ContentDraft,
    result: Option<PlagiarismResult>,
    activity: Activity,
}

impl AnalyzeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &ContentDraft {
        &self.content
    }

    pub fn result(&self) -> Option<&PlagiarismResult> {
        self.result.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.activity.is_busy()
    }

    /// Takes new content from the controller. A different text clears the
    /// previous result and invalidates a running check.
    pub fn receive(&mut self, content: &ContentDraft) {
        if &self.content == content {
            return;
        }
        self.content = content.clone();
        self.result = None;
        self.activity.reset();
    }

    /// # Errors
    ///
    /// - `Validation` ("No content to check") when there is nothing to score
    /// - `OperationInProgress` if a check is already running
    pub fn begin_check(&mut self) -> Result<(Ticket, ContentDraft), WizardError> {
        if self.content.is_empty() {
            return Err(ValidationError::missing_input("content", "No content to check").into());
        }
        let ticket = self.activity.begin(WizardStep::Analyze)?;
        Ok((ticket, self.content.clone()))
    }

    /// Stores the result. Returns false if the ticket was stale.
    pub fn finish_check(&mut self, ticket: &Ticket, result: PlagiarismResult) -> bool {
        if !self.activity.finish(ticket) {
            return false;
        }
        self.result = Some(result);
        true
    }

    /// Annotated text when a check has run, else the raw content.
    pub fn display_text(&self) -> &ContentDraft {
        self.result
            .as_ref()
            .map(|r| &r.annotated_text)
            .unwrap_or(&self.content)
    }

    pub fn severity(&self) -> Option<Severity> {
        self.result.as_ref().map(PlagiarismResult::severity)
    }

    /// Content to hand to the rephrase step.
    ///
    /// # Errors
    ///
    /// `OperationInProgress` while checking.
    pub fn proceed_payload(&self) -> Result<ContentDraft, WizardError> {
        if self.activity.is_busy() {
            return Err(WizardError::OperationInProgress(WizardStep::Analyze));
        }
        Ok(self.display_text().clone())
    }
}
