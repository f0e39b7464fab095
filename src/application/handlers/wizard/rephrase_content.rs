//! RephraseContentHandler - Command handler for the keyword-preserving rewrite.

use std::sync::Arc;

use super::{detached, WizardOutcome};
use crate::domain::foundation::{Notice, WizardId};
use crate::domain::wizard::{RephraseRequest, Ticket, WizardError};
use crate::ports::{ContentBackend, WizardStore};

/// Command to (re)run the rewrite on the rephrase step.
#[derive(Debug, Clone)]
pub struct RephraseContentCommand {
    pub wizard_id: WizardId,
}

/// Handler for manual rephrase runs.
pub struct RephraseContentHandler {
    store: Arc<dyn WizardStore>,
    backend: Arc<dyn ContentBackend>,
}

impl RephraseContentHandler {
    pub fn new(store: Arc<dyn WizardStore>, backend: Arc<dyn ContentBackend>) -> Self {
        Self { store, backend }
    }

    pub async fn handle(&self, cmd: RephraseContentCommand) -> Result<WizardOutcome, WizardError> {
        let started = {
            let mut session = self.store.checkout(&cmd.wizard_id).await?;
            session.begin_rephrase()?
        };
        run_rephrase(&self.store, &self.backend, cmd.wizard_id, started).await
    }
}

/// Sends a started rephrase to the backend and applies the result.
pub(super) async fn run_rephrase(
    store: &Arc<dyn WizardStore>,
    backend: &Arc<dyn ContentBackend>,
    wizard_id: WizardId,
    (ticket, request): (Ticket, RephraseRequest),
) -> Result<WizardOutcome, WizardError> {
    let store = Arc::clone(store);
    let backend = Arc::clone(backend);
    detached(async move {
        let draft = backend.rephrase(&request.content, &request.keywords).await;
        tracing::debug!(wizard_id = %wizard_id, origin = ?draft.origin, "Content rephrased");

        let mut session = store.checkout(&wizard_id).await?;
        let notices: Vec<Notice> = session.finish_rephrase(&ticket, draft);
        Ok(WizardOutcome::new(session.clone(), notices))
    })
    .await
}
