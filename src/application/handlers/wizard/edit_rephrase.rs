//! EditRephraseHandler - Command handler for manual edits and copy.

use std::sync::Arc;

use super::WizardOutcome;
use crate::domain::foundation::{Notice, WizardId};
use crate::domain::wizard::WizardError;
use crate::ports::WizardStore;

/// An edit-mode action on the rephrase step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RephraseEdit {
    Begin,
    Update(String),
    Save,
    Cancel,
}

/// Command to act on the rephrase edit buffer.
#[derive(Debug, Clone)]
pub struct EditRephraseCommand {
    pub wizard_id: WizardId,
    pub edit: RephraseEdit,
}

/// Query for the clipboard text.
#[derive(Debug, Clone)]
pub struct CopyRephrasedQuery {
    pub wizard_id: WizardId,
}

/// Clipboard text and its notice.
#[derive(Debug, Clone)]
pub struct CopyRephrasedResult {
    pub text: String,
    pub notice: Notice,
}

/// Handler for rephrase edits and copy.
pub struct EditRephraseHandler {
    store: Arc<dyn WizardStore>,
}

impl EditRephraseHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EditRephraseCommand) -> Result<WizardOutcome, WizardError> {
        let mut session = self.store.checkout(&cmd.wizard_id).await?;
        match cmd.edit {
            RephraseEdit::Begin => session.begin_edit()?,
            RephraseEdit::Update(text) => session.update_edit(text)?,
            RephraseEdit::Save => session.save_edit()?,
            RephraseEdit::Cancel => session.cancel_edit()?,
        }
        Ok(WizardOutcome::quiet(session.clone()))
    }

    pub async fn copy(&self, query: CopyRephrasedQuery) -> Result<CopyRephrasedResult, WizardError> {
        let session = self.store.checkout(&query.wizard_id).await?;
        let (text, notice) = session.copy_text()?;
        Ok(CopyRephrasedResult { text, notice })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::wizard::test_support::{filled_session, store};
    use crate::domain::content::{ContentDraft, Sourced};

    async fn rephrased(store: &crate::adapters::storage::InMemoryWizardStore) -> WizardId {
        let id = filled_session(store).await;
        let mut session = store.checkout(&id).await.unwrap();
        let (ticket, _) = session.begin_generate().unwrap();
        session
            .finish_generate(&ticket, Sourced::live(ContentDraft::new("Draft")))
            .unwrap();
        session.proceed_to_analyze().unwrap();
        let (ticket, _) = session.proceed_to_rephrase().unwrap().unwrap();
        session.finish_rephrase(
            &ticket,
            Sourced::live(ContentDraft::new(
                r#"Boost <span class="highlight">productivity</span> today"#,
            )),
        );
        id
    }

    fn edit(wizard_id: WizardId, edit: RephraseEdit) -> EditRephraseCommand {
        EditRephraseCommand { wizard_id, edit }
    }

    #[tokio::test]
    async fn edit_then_save_replaces_result() {
        let store = store();
        let id = rephrased(&store).await;
        let handler = EditRephraseHandler::new(store);

        let outcome = handler.handle(edit(id, RephraseEdit::Begin)).await.unwrap();
        assert_eq!(
            outcome.session.rephrase().edit_buffer(),
            Some("Boost productivity today")
        );

        handler
            .handle(edit(id, RephraseEdit::Update("Boost output".into())))
            .await
            .unwrap();
        let outcome = handler.handle(edit(id, RephraseEdit::Save)).await.unwrap();

        assert_eq!(outcome.session.rephrase().result().as_str(), "Boost output");
        assert!(!outcome.session.rephrase().is_editing());
    }

    #[tokio::test]
    async fn update_without_begin_is_rejected() {
        let store = store();
        let id = rephrased(&store).await;
        let handler = EditRephraseHandler::new(store);

        let err = handler
            .handle(edit(id, RephraseEdit::Update("x".into())))
            .await
            .unwrap_err();
        assert_eq!(err, WizardError::NotEditing);
    }

    #[tokio::test]
    async fn copy_returns_plain_text() {
        let store = store();
        let id = rephrased(&store).await;
        let handler = EditRephraseHandler::new(store);

        let copied = handler.copy(CopyRephrasedQuery { wizard_id: id }).await.unwrap();
        assert_eq!(copied.text, "Boost productivity today");
        assert_eq!(copied.notice, Notice::success("Content copied to clipboard"));
    }

    #[tokio::test]
    async fn copy_with_nothing_fails() {
        let store = store();
        let id = filled_session(&store).await;
        let handler = EditRephraseHandler::new(store);

        let err = handler
            .copy(CopyRephrasedQuery { wizard_id: id })
            .await
            .unwrap_err();
        assert_eq!(err, WizardError::NothingToCopy);
    }
}
