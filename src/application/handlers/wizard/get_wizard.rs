//! GetWizardHandler - Query handler for a session snapshot.

use std::sync::Arc;

use crate::domain::foundation::WizardId;
use crate::domain::wizard::{WizardError, WizardSession};
use crate::ports::WizardStore;

/// Query to get a wizard by ID.
#[derive(Debug, Clone)]
pub struct GetWizardQuery {
    pub wizard_id: WizardId,
}

/// Handler for retrieving wizard snapshots.
pub struct GetWizardHandler {
    store: Arc<dyn WizardStore>,
}

impl GetWizardHandler {
    pub fn new(store: Arc<dyn WizardStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetWizardQuery) -> Result<WizardSession, WizardError> {
        let session = self.store.checkout(&query.wizard_id).await?;
        Ok(session.clone())
    }
}
