//! StartWizardHandler - Command handler for opening a wizard session.

use std::sync::Arc;

use crate::domain::foundation::WizardId;
use crate::domain::wizard::{NavigationPolicy, WizardError, WizardSession};
use crate::ports::WizardStore;

/// Command to start a new wizard.
#[derive(Debug, Clone, Copy, Default)]
pub struct StartWizardCommand;

/// Handler for starting wizards.
pub struct StartWizardHandler {
    store: Arc<dyn WizardStore>,
    policy: NavigationPolicy,
}

impl StartWizardHandler {
    pub fn new(store: Arc<dyn WizardStore>, policy: NavigationPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, _cmd: StartWizardCommand) -> Result<WizardSession, WizardError> {
        let session = WizardSession::new(WizardId::new(), self.policy);
        self.store.insert(session.clone()).await?;

        tracing::info!(wizard_id = %session.id(), policy = ?self.policy, "Wizard started");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::wizard::test_support::store;
    use crate::domain::wizard::WizardStep;

    #[tokio::test]
    async fn starts_on_compose_and_stores_session() {
        let store = store();
        let handler = StartWizardHandler::new(store.clone(), NavigationPolicy::Free);

        let session = handler.handle(StartWizardCommand).await.unwrap();

        assert_eq!(session.active_step(), WizardStep::Compose);
        assert_eq!(session.policy(), NavigationPolicy::Free);
        assert_eq!(store.count().await, 1);
    }
}
