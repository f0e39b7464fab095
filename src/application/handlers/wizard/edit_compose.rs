//! EditComposeHandler - Command handler for the compose form.

use std::sync::Arc;

use super::WizardOutcome;
use crate::domain::content::CommitKey;
use crate::domain::foundation::WizardId;
use crate::domain::wizard::WizardError;
use crate::ports::WizardStore;

/// A change to the compose form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeEdit {
    /// Overwrite whichever fields are present.
    Fields {
        title: Option<String>,
        purpose: Option<String>,
        keyword_entry: Option<String>,
    },
    /// Type `entry` and press the commit key.
    CommitKeyword { entry: String, trigger: CommitKey },
    /// Remove the keyword at `index`.
    RemoveKeyword { index: usize },
}

/// Command to edit the compose form.
#[derive(Debug, Clone)]
pub struct EditComposeCommand {
    pub wizard_id: WizardId,
    pub edit: ComposeEdit,
}

/// Handler for compose form edits.
pub struct EditComposeHandler {
    store: Arc<dyn WizardStore>,
}

impl EditComposeHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EditComposeCommand) -> Result<WizardOutcome, WizardError> {
        let mut session = self.store.checkout(&cmd.wizard_id).await?;

        match cmd.edit {
            ComposeEdit::Fields {
                title,
                purpose,
                keyword_entry,
            } => session.edit_compose(title, purpose, keyword_entry)?,
            ComposeEdit::CommitKeyword { entry, trigger } => {
                let added = session.commit_keyword(entry, trigger)?;
                tracing::debug!(wizard_id = %cmd.wizard_id, added, "Keyword entry committed");
            }
            ComposeEdit::RemoveKeyword { index } => {
                session.remove_keyword(index)?;
            }
        }

        Ok(WizardOutcome::quiet(session.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::wizard::test_support::{filled_session, store};

    #[tokio::test]
    async fn fields_are_updated_independently() {
        let store = store();
        let id = filled_session(&store).await;
        let handler = EditComposeHandler::new(store);

        let outcome = handler
            .handle(EditComposeCommand {
                wizard_id: id,
                edit: ComposeEdit::Fields {
                    title: None,
                    purpose: Some("persuade".into()),
                    keyword_entry: None,
                },
            })
            .await
            .unwrap();

        assert_eq!(outcome.session.compose().title(), "Remote Work");
        assert_eq!(outcome.session.compose().purpose(), "persuade");
    }

    #[tokio::test]
    async fn duplicate_keyword_stays_in_entry() {
        let store = store();
        let id = filled_session(&store).await;
        let handler = EditComposeHandler::new(store);

        let outcome = handler
            .handle(EditComposeCommand {
                wizard_id: id,
                edit: ComposeEdit::CommitKeyword {
                    entry: "productivity".into(),
                    trigger: CommitKey::Enter,
                },
            })
            .await
            .unwrap();

        assert_eq!(outcome.session.compose().keywords().len(), 1);
        assert_eq!(outcome.session.compose().keyword_entry(), "productivity");
    }

    #[tokio::test]
    async fn remove_keyword_by_index() {
        let store = store();
        let id = filled_session(&store).await;
        let handler = EditComposeHandler::new(store);

        let outcome = handler
            .handle(EditComposeCommand {
                wizard_id: id,
                edit: ComposeEdit::RemoveKeyword { index: 0 },
            })
            .await
            .unwrap();
        assert!(outcome.session.compose().keywords().is_empty());
    }
}
