//! Rephrase step: keyword-preserving rewrite, manual edits and copy.

use super::activity::{Activity, Ticket};
use super::{WizardError, WizardStep};
use crate::domain::content::{ContentDraft, KeywordSet};
use crate::domain::foundation::ValidationError;

/// Inputs for a rephrase call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RephraseRequest {
    pub content: ContentDraft,
    pub keywords: KeywordSet,
}

/// Local state of the rephrase step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RephraseView {
    input: ContentDraft,
    keywords: KeywordSet,
    result: ContentDraft,
    auto_pending: bool,
    edit_buffer: Option<String>,
    activity: Activity,
}

impl RephraseView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &ContentDraft {
        &self.input
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    /// Latest rephrased (or saved edited) text.
    pub fn result(&self) -> &ContentDraft {
        &self.result
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.edit_buffer.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.activity.is_busy()
    }

    /// Takes content and keywords from the controller. New content queues
    /// one automatic rephrase and drops any previous result.
    pub fn receive(&mut self, content: &ContentDraft, keywords: &KeywordSet) {
        self.keywords = keywords.clone();
        if &self.input == content {
            return;
        }
        self.input = content.clone();
        self.result = ContentDraft::default();
        self.edit_buffer = None;
        self.auto_pending = !content.is_empty();
        self.activity.reset();
    }

    /// Starts the queued automatic rephrase, if one is due.
    pub fn take_auto_request(&mut self) -> Option<(Ticket, RephraseRequest)> {
        if !self.auto_pending || self.activity.is_busy() {
            return None;
        }
        self.begin_rephrase().ok()
    }

    /// # Errors
    ///
    /// - `Validation` ("No content to rephrase") without input
    /// - `OperationInProgress` if a rephrase is already running
    pub fn begin_rephrase(&mut self) -> Result<(Ticket, RephraseRequest), WizardError> {
        if self.input.is_empty() {
            return Err(
                ValidationError::missing_input("content", "No content to rephrase").into(),
            );
        }
        let ticket = self.activity.begin(WizardStep::Rephrase)?;
        self.auto_pending = false;
        Ok((
            ticket,
            RephraseRequest {
                content: self.input.clone(),
                keywords: self.keywords.clone(),
            },
        ))
    }

    /// Stores the rewrite and leaves edit mode. Returns false if the ticket
    /// was stale.
    pub fn finish_rephrase(&mut self, ticket: &Ticket, draft: ContentDraft) -> bool {
        if !self.activity.finish(ticket) {
            return false;
        }
        self.result = draft;
        self.edit_buffer = None;
        true
    }

    /// Enters edit mode with the markup-stripped result as the buffer.
    ///
    /// # Errors
    ///
    /// - `OperationInProgress` while rephrasing
    /// - `Validation` when there is no result to edit
    pub fn begin_edit(&mut self) -> Result<&str, WizardError> {
        if self.activity.is_busy() {
            return Err(WizardError::OperationInProgress(WizardStep::Rephrase));
        }
        if self.result.is_empty() {
            return Err(ValidationError::missing_input("content", "No content to edit").into());
        }
        Ok(self
            .edit_buffer
            .get_or_insert_with(|| self.result.plain_text())
            .as_str())
    }

    pub fn update_edit(&mut self, text: impl Into<String>) -> Result<(), WizardError> {
        let buffer = self.edit_buffer.as_mut().ok_or(WizardError::NotEditing)?;
        *buffer = text.into();
        Ok(())
    }

    /// Replaces the result with the edited plain text.
    pub fn save_edit(&mut self) -> Result<(), WizardError> {
        let buffer = self.edit_buffer.take().ok_or(WizardError::NotEditing)?;
        self.result = ContentDraft::new(buffer);
        Ok(())
    }

    pub fn cancel_edit(&mut self) -> Result<(), WizardError> {
        self.edit_buffer
            .take()
            .map(|_| ())
            .ok_or(WizardError::NotEditing)
    }

    /// Text that recheck and copy act on: the unsaved buffer while editing,
    /// otherwise the result.
    pub fn current_text(&self) -> ContentDraft {
        match &self.edit_buffer {
            Some(buffer) => ContentDraft::new(buffer.clone()),
            None => self.result.clone(),
        }
    }

    /// Plain text for the clipboard.
    ///
    /// # Errors
    ///
    /// `NothingToCopy` when there is no text.
    pub fn copy_text(&self) -> Result<String, WizardError> {
        let current = self.current_text();
        if current.is_empty() {
            return Err(WizardError::NothingToCopy);
        }
        Ok(current.plain_text())
    }

    /// Content to send back for another plagiarism check.
    pub fn recheck_payload(&self) -> Result<ContentDraft, WizardError> {
        if self.activity.is_busy() {
            return Err(WizardError::OperationInProgress(WizardStep::Rephrase));
        }
        let current = self.current_text();
        if current.is_empty() {
            return Err(ValidationError::missing_input("content", "No content to check").into());
        }
        Ok(current)
    }

    pub fn ensure_idle(&self) -> Result<(), WizardError> {
        if self.activity.is_busy() {
            Err(WizardError::OperationInProgress(WizardStep::Rephrase))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> KeywordSet {
        ["seo"].into_iter().collect()
    }

    fn rephrased(view: &mut RephraseView, text: &str) {
        let (ticket, _) = view.begin_rephrase().unwrap();
        assert!(view.finish_rephrase(&ticket, ContentDraft::new(text)));
    }

    #[test]
    fn new_content_queues_one_auto_rephrase() {
        let mut view = RephraseView::new();
        view.receive(&ContentDraft::new("draft"), &keywords());

        let (_, request) = view.take_auto_request().unwrap();
        assert_eq!(request.content.as_str(), "draft");
        assert_eq!(request.keywords, keywords());
        assert!(view.take_auto_request().is_none());
    }

    #[test]
    fn same_content_does_not_requeue() {
        let mut view = RephraseView::new();
        view.receive(&ContentDraft::new("draft"), &keywords());
        let (ticket, _) = view.take_auto_request().unwrap();
        view.finish_rephrase(&ticket, ContentDraft::new("better draft"));

        view.receive(&ContentDraft::new("draft"), &keywords());
        assert!(view.take_auto_request().is_none());
        assert_eq!(view.result().as_str(), "better draft");
    }

    #[test]
    fn empty_input_queues_nothing() {
        let mut view = RephraseView::new();
        view.receive(&ContentDraft::new(""), &keywords());
        assert!(view.take_auto_request().is_none());
        assert_eq!(view.begin_rephrase().unwrap_err().to_string(), "No content to rephrase");
    }

    #[test]
    fn edit_buffer_starts_as_plain_text_and_saves() {
        let mut view = RephraseView::new();
        view.receive(&ContentDraft::new("draft"), &keywords());
        rephrased(&mut view, r#"Use <span class="highlight">seo</span> &amp; more"#);

        assert_eq!(view.begin_edit().unwrap(), "Use seo & more");
        view.update_edit("Use seo wisely").unwrap();
        view.save_edit().unwrap();
        assert!(!view.is_editing());
        assert_eq!(view.result().as_str(), "Use seo wisely");
    }

    #[test]
    fn cancel_edit_keeps_result() {
        let mut view = RephraseView::new();
        view.receive(&ContentDraft::new("draft"), &keywords());
        rephrased(&mut view, "rewritten");
        view.begin_edit().unwrap();
        view.update_edit("scrap").unwrap();
        view.cancel_edit().unwrap();
        assert_eq!(view.result().as_str(), "rewritten");
        assert_eq!(view.cancel_edit().unwrap_err(), WizardError::NotEditing);
    }

    #[test]
    fn copy_returns_plain_text() {
        let mut view = RephraseView::new();
        assert_eq!(view.copy_text().unwrap_err(), WizardError::NothingToCopy);

        view.receive(&ContentDraft::new("draft"), &keywords());
        rephrased(&mut view, r#"<span class="highlight">seo</span> tips"#);
        assert_eq!(view.copy_text().unwrap(), "seo tips");
    }

    #[test]
    fn recheck_uses_unsaved_edit() {
        let mut view = RephraseView::new();
        view.receive(&ContentDraft::new("draft"), &keywords());
        rephrased(&mut view, "rewritten");
        view.begin_edit().unwrap();
        view.update_edit("edited").unwrap();
        assert_eq!(view.recheck_payload().unwrap().as_str(), "edited");
    }

    #[test]
    fn back_and_recheck_blocked_while_rephrasing() {
        let mut view = RephraseView::new();
        view.receive(&ContentDraft::new("draft"), &keywords());
        view.take_auto_request().unwrap();
        assert!(view.ensure_idle().is_err());
        assert!(matches!(
            view.recheck_payload().unwrap_err(),
            WizardError::OperationInProgress(WizardStep::Rephrase)
        ));
    }

    #[test]
    fn stale_rephrase_is_dropped() {
        let mut view = RephraseView::new();
        view.receive(&ContentDraft::new("first"), &keywords());
        let (stale, _) = view.take_auto_request().unwrap();
        view.receive(&ContentDraft::new("second"), &keywords());

        assert!(!view.finish_rephrase(&stale, ContentDraft::new("for first")));
        assert!(view.result().is_empty());
        assert!(view.take_auto_request().is_some());
    }
}
