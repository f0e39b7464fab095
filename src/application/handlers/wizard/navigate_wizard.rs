//! NavigateWizardHandler - Command handler for step transitions.

use std::sync::Arc;

use super::rephrase_content::run_rephrase;
use super::WizardOutcome;
use crate::domain::foundation::WizardId;
use crate::domain::wizard::{WizardError, WizardStep};
use crate::ports::{ContentBackend, WizardStore};

/// A step transition requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Compose "Check plagiarism".
    ProceedToAnalyze,
    /// Analyze "Rephrase content"; runs the automatic rephrase.
    ProceedToRephrase,
    /// "Back" from the named step, which must be active.
    Back(WizardStep),
    /// Rephrase "Check plagiarism again".
    Recheck,
    /// Tab selection.
    Select(WizardStep),
}

/// Command to move between steps.
#[derive(Debug, Clone)]
pub struct NavigateWizardCommand {
    pub wizard_id: WizardId,
    pub navigation: Navigation,
}

/// Handler for step transitions.
pub struct NavigateWizardHandler {
    store: Arc<dyn WizardStore>,
    backend: Arc<dyn ContentBackend>,
}

impl NavigateWizardHandler {
    pub fn new(store: Arc<dyn WizardStore>, backend: Arc<dyn ContentBackend>) -> Self {
        Self { store, backend }
    }

    pub async fn handle(&self, cmd: NavigateWizardCommand) -> Result<WizardOutcome, WizardError> {
        let mut session = self.store.checkout(&cmd.wizard_id).await?;
        let from = session.active_step();

        let auto_rephrase = match cmd.navigation {
            Navigation::ProceedToAnalyze => {
                session.proceed_to_analyze()?;
                None
            }
            Navigation::ProceedToRephrase => session.proceed_to_rephrase()?,
            Navigation::Back(step) => {
                session.back(step)?;
                None
            }
            Navigation::Recheck => {
                session.recheck()?;
                None
            }
            Navigation::Select(step) => {
                session.select_step(step)?;
                None
            }
        };

        tracing::debug!(
            wizard_id = %cmd.wizard_id,
            from = %from,
            to = %session.active_step(),
            navigation = ?cmd.navigation,
            "Wizard step changed"
        );

        match auto_rephrase {
            Some(started) => {
                drop(session);
                run_rephrase(&self.store, &self.backend, cmd.wizard_id, started).await
            }
            None => Ok(WizardOutcome::quiet(session.clone())),
        }
    }
}
