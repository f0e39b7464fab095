//! GenerateContentHandler - Command handler for drafting the blog post.

use std::sync::Arc;

use super::{detached, WizardOutcome};
use crate::domain::foundation::WizardId;
use crate::domain::wizard::WizardError;
use crate::ports::{ContentBackend, WizardStore};

/// Command to generate a draft from the compose form.
#[derive(Debug, Clone)]
pub struct GenerateContentCommand {
    pub wizard_id: WizardId,
}

/// Handler for draft generation.
pub struct GenerateContentHandler {
    store: Arc<dyn WizardStore>,
    backend: Arc<dyn ContentBackend>,
}

impl GenerateContentHandler {
    pub fn new(store: Arc<dyn WizardStore>, backend: Arc<dyn ContentBackend>) -> Self {
        Self { store, backend }
    }

    pub async fn handle(&self, cmd: GenerateContentCommand) -> Result<WizardOutcome, WizardError> {
        // 1. Validate and mark busy; nothing is sent if validation fails
        let (ticket, request) = {
            let mut session = self.store.checkout(&cmd.wizard_id).await?;
            session.begin_generate()?
        };

        // 2. Outbound call with the session released, then apply
        let store = Arc::clone(&self.store);
        let backend = Arc::clone(&self.backend);
        let wizard_id = cmd.wizard_id;
        detached(async move {
            let draft = backend
                .generate(&request.title, &request.purpose, &request.keywords)
                .await;
            tracing::debug!(wizard_id = %wizard_id, origin = ?draft.origin, "Draft generated");

            let mut session = store.checkout(&wizard_id).await?;
            let notices = session.finish_generate(&ticket, draft)?;
            Ok(WizardOutcome::new(session.clone(), notices))
        })
        .await
    }
}
