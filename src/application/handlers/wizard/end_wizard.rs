//! EndWizardHandler - Command handler for discarding a wizard session.

use std::sync::Arc;

use crate::domain::foundation::WizardId;
use crate::domain::wizard::WizardError;
use crate::ports::WizardStore;

/// Command to end a wizard.
#[derive(Debug, Clone)]
pub struct EndWizardCommand {
    pub wizard_id: WizardId,
}

/// Handler for ending wizards.
pub struct EndWizardHandler {
    store: Arc<dyn WizardStore>,
}

impl EndWizardHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: EndWizardCommand) -> Result<(), WizardError> {
        if !self.store.remove(&cmd.wizard_id).await? {
            return Err(WizardError::NotFound(cmd.wizard_id));
        }
        tracing::info!(wizard_id = %cmd.wizard_id, "Wizard ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::wizard::test_support::{filled_session, store};

    #[tokio::test]
    async fn removes_session_once() {
        let store = store();
        let id = filled_session(&store).await;
        let handler = EndWizardHandler::new(store.clone());

        handler.handle(EndWizardCommand { wizard_id: id }).await.unwrap();
        assert_eq!(store.count().await, 0);

        let err = handler.handle(EndWizardCommand { wizard_id: id }).await.unwrap_err();
        assert_eq!(err, WizardError::NotFound(id));
    }
}
