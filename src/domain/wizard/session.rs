//! Wizard session aggregate.
//!
//! Ties the controller state to the three step views. Operations that call
//! the content backend are split in two: a `begin_*` half that validates,
//! marks the view busy and returns a [`Ticket`] with the request, and a
//! `finish_*` half that applies the result if the ticket is still current.
//! The caller releases the session between the halves.

use super::activity::Ticket;
use super::analyze::AnalyzeView;
use super::compose::{ComposeView, GenerateRequest};
use super::rephrase::{RephraseRequest, RephraseView};
use super::state::{NavigationPolicy, WizardEvent, WizardState};
use super::{WizardError, WizardStep};
use crate::domain::content::{CommitKey, ContentDraft, ContentOperation, PlagiarismResult, Sourced};
use crate::domain::foundation::{Notice, Timestamp, WizardId};

/// One user's pass through the wizard.
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: WizardId,
    state: WizardState,
    policy: NavigationPolicy,
    compose: ComposeView,
    analyze: AnalyzeView,
    rephrase: RephraseView,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl WizardSession {
    /// Starts a session on the compose step.
    pub fn new(id: WizardId, policy: NavigationPolicy) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            state: WizardState::new(),
            policy,
            compose: ComposeView::new(),
            analyze: AnalyzeView::new(),
            rephrase: RephraseView::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &WizardId {
        &self.id
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn active_step(&self) -> WizardStep {
        self.state.active_step
    }

    pub fn policy(&self) -> NavigationPolicy {
        self.policy
    }

    pub fn compose(&self) -> &ComposeView {
        &self.compose
    }

    pub fn analyze(&self) -> &AnalyzeView {
        &self.analyze
    }

    pub fn rephrase(&self) -> &RephraseView {
        &self.rephrase
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// True while any step has an outbound call in flight.
    pub fn is_busy(&self) -> bool {
        self.compose.is_busy() || self.analyze.is_busy() || self.rephrase.is_busy()
    }

    /// Whether the tab for `step` can currently be selected.
    pub fn is_reachable(&self, step: WizardStep) -> bool {
        self.state.is_reachable(step, self.policy)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Compose
    // ─────────────────────────────────────────────────────────────────────────

    /// Updates whichever form fields are given.
    pub fn edit_compose(
        &mut self,
        title: Option<String>,
        purpose: Option<String>,
        keyword_entry: Option<String>,
    ) -> Result<(), WizardError> {
        self.require_active(WizardStep::Compose, "edit_compose")?;
        if let Some(title) = title {
            self.compose.set_title(title);
        }
        if let Some(purpose) = purpose {
            self.compose.set_purpose(purpose);
        }
        if let Some(entry) = keyword_entry {
            self.compose.set_keyword_entry(entry);
        }
        self.touch();
        Ok(())
    }

    /// Sets the keyword entry to `entry` and commits it.
    pub fn commit_keyword(&mut self, entry: String, key: CommitKey) -> Result<bool, WizardError> {
        self.require_active(WizardStep::Compose, "commit_keyword")?;
        self.compose.set_keyword_entry(entry);
        let added = self.compose.commit_keyword(key);
        self.touch();
        Ok(added)
    }

    pub fn remove_keyword(&mut self, index: usize) -> Result<Option<String>, WizardError> {
        self.require_active(WizardStep::Compose, "remove_keyword")?;
        let removed = self.compose.remove_keyword(index);
        self.touch();
        Ok(removed)
    }

    pub fn begin_generate(&mut self) -> Result<(Ticket, GenerateRequest), WizardError> {
        self.require_active(WizardStep::Compose, "generate")?;
        let started = self.compose.begin_generate()?;
        self.touch();
        Ok(started)
    }

    /// Stores the draft and confirms the keywords with the controller.
    pub fn finish_generate(
        &mut self,
        ticket: &Ticket,
        draft: Sourced<ContentDraft>,
    ) -> Result<Vec<Notice>, WizardError> {
        let origin_notice = fallback_notice(ContentOperation::Generate, &draft);
        if !self.compose.finish_generate(ticket, draft.value) {
            return Ok(Vec::new());
        }
        let keywords = self.compose.keywords().clone();
        self.transition(WizardEvent::KeywordsConfirmed(keywords))?;

        let mut notices = vec![Notice::success("Blog content generated successfully")];
        notices.extend(origin_notice);
        Ok(notices)
    }

    pub fn proceed_to_analyze(&mut self) -> Result<(), WizardError> {
        self.require_active(WizardStep::Compose, "proceed_to_analyze")?;
        let content = self.compose.proceed()?;
        self.transition(WizardEvent::ProceedToAnalyze(content))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Analyze
    // ─────────────────────────────────────────────────────────────────────────

    pub fn begin_check(&mut self) -> Result<(Ticket, ContentDraft), WizardError> {
        self.require_active(WizardStep::Analyze, "check")?;
        let started = self.analyze.begin_check()?;
        self.touch();
        Ok(started)
    }

    pub fn finish_check(&mut self, ticket: &Ticket, result: Sourced<PlagiarismResult>) -> Vec<Notice> {
        let origin_notice = fallback_notice(ContentOperation::Score, &result);
        let severity = result.value.severity();
        if !self.analyze.finish_check(ticket, result.value) {
            return Vec::new();
        }
        self.touch();

        let mut notices = vec![severity.notice()];
        notices.extend(origin_notice);
        notices
    }

    /// Moves to the rephrase step. Returns the automatic rephrase to run
    /// when the step received new content.
    pub fn proceed_to_rephrase(
        &mut self,
    ) -> Result<Option<(Ticket, RephraseRequest)>, WizardError> {
        self.require_active(WizardStep::Analyze, "proceed_to_rephrase")?;
        let content = self.analyze.proceed_payload()?;
        self.transition(WizardEvent::ProceedToRephrase(content))?;
        Ok(self.rephrase.take_auto_request())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rephrase
    // ─────────────────────────────────────────────────────────────────────────

    pub fn begin_rephrase(&mut self) -> Result<(Ticket, RephraseRequest), WizardError> {
        self.require_active(WizardStep::Rephrase, "rephrase")?;
        let started = self.rephrase.begin_rephrase()?;
        self.touch();
        Ok(started)
    }

    pub fn finish_rephrase(&mut self, ticket: &Ticket, draft: Sourced<ContentDraft>) -> Vec<Notice> {
        let origin_notice = fallback_notice(ContentOperation::Rephrase, &draft);
        if !self.rephrase.finish_rephrase(ticket, draft.value) {
            return Vec::new();
        }
        self.touch();

        let mut notices = vec![Notice::success("Content rephrased successfully")];
        notices.extend(origin_notice);
        notices
    }

    pub fn begin_edit(&mut self) -> Result<(), WizardError> {
        self.require_active(WizardStep::Rephrase, "begin_edit")?;
        self.rephrase.begin_edit()?;
        self.touch();
        Ok(())
    }

    pub fn update_edit(&mut self, text: String) -> Result<(), WizardError> {
        self.require_active(WizardStep::Rephrase, "update_edit")?;
        self.rephrase.update_edit(text)?;
        self.touch();
        Ok(())
    }

    pub fn save_edit(&mut self) -> Result<(), WizardError> {
        self.require_active(WizardStep::Rephrase, "save_edit")?;
        self.rephrase.save_edit()?;
        self.touch();
        Ok(())
    }

    pub fn cancel_edit(&mut self) -> Result<(), WizardError> {
        self.require_active(WizardStep::Rephrase, "cancel_edit")?;
        self.rephrase.cancel_edit()?;
        self.touch();
        Ok(())
    }

    /// Plain text for the clipboard, with its notice.
    pub fn copy_text(&self) -> Result<(String, Notice), WizardError> {
        let text = self.rephrase.copy_text()?;
        Ok((text, Notice::success("Content copied to clipboard")))
    }

    pub fn recheck(&mut self) -> Result<(), WizardError> {
        self.require_active(WizardStep::Rephrase, "recheck_plagiarism")?;
        let content = self.rephrase.recheck_payload()?;
        self.transition(WizardEvent::RecheckPlagiarism(content))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Steps back from `from`, which must be the active step.
    pub fn back(&mut self, from: WizardStep) -> Result<(), WizardError> {
        self.require_active(from, "back")?;
        if from == WizardStep::Rephrase {
            self.rephrase.ensure_idle()?;
        }
        self.transition(WizardEvent::Back)
    }

    pub fn select_step(&mut self, step: WizardStep) -> Result<(), WizardError> {
        self.transition(WizardEvent::SelectStep(step))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn require_active(&self, step: WizardStep, event: &'static str) -> Result<(), WizardError> {
        if self.state.active_step == step {
            Ok(())
        } else {
            Err(WizardError::EventNotAllowed {
                step: self.state.active_step,
                event,
            })
        }
    }

    fn transition(&mut self, event: WizardEvent) -> Result<(), WizardError> {
        self.state = self.state.clone().apply(event, self.policy)?;
        self.sync_views();
        self.touch();
        Ok(())
    }

    /// Pushes the controller payload into the views that consume it.
    fn sync_views(&mut self) {
        self.analyze.receive(&self.state.composed_content);
        self.rephrase
            .receive(&self.state.rephrased_content, &self.state.keywords);
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

fn fallback_notice<T>(operation: ContentOperation, result: &Sourced<T>) -> Option<Notice> {
    if !result.is_fallback() {
        return None;
    }
    let message = match operation {
        ContentOperation::Generate => "AI service unavailable. Showing a locally generated draft.",
        ContentOperation::Score => "AI service unavailable. The plagiarism score is an estimate.",
        ContentOperation::Rephrase => "AI service unavailable. Content was rephrased locally.",
    };
    Some(Notice::info(message))
}
