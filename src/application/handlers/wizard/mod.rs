//! Wizard command and query handlers.
//!
//! Handlers that call the content backend follow one pattern: check the
//! session out, begin the operation, release the session for the outbound
//! call, then check it out again to finish. The call and the finish run on
//! their own task, so a caller that stops waiting cannot leave a step busy.

mod check_plagiarism;
mod edit_compose;
mod edit_rephrase;
mod end_wizard;
mod generate_content;
mod get_wizard;
mod navigate_wizard;
mod rephrase_content;
mod start_wizard;

pub use check_plagiarism::{CheckPlagiarismCommand, CheckPlagiarismHandler};
pub use edit_compose::{ComposeEdit, EditComposeCommand, EditComposeHandler};
pub use edit_rephrase::{
    CopyRephrasedQuery, CopyRephrasedResult, EditRephraseCommand, EditRephraseHandler, RephraseEdit,
};
pub use end_wizard::{EndWizardCommand, EndWizardHandler};
pub use generate_content::{GenerateContentCommand, GenerateContentHandler};
pub use get_wizard::{GetWizardHandler, GetWizardQuery};
pub use navigate_wizard::{Navigation, NavigateWizardCommand, NavigateWizardHandler};
pub use rephrase_content::{RephraseContentCommand, RephraseContentHandler};
pub use start_wizard::{StartWizardCommand, StartWizardHandler};

use std::future::Future;

use crate::domain::foundation::Notice;
use crate::domain::wizard::{WizardError, WizardSession};

/// Session state after a command, with the notices it raised.
#[derive(Debug, Clone)]
pub struct WizardOutcome {
    pub session: WizardSession,
    pub notices: Vec<Notice>,
}

impl WizardOutcome {
    pub fn new(session: WizardSession, notices: Vec<Notice>) -> Self {
        Self { session, notices }
    }

    pub fn quiet(session: WizardSession) -> Self {
        Self::new(session, Vec::new())
    }
}

/// Runs the outbound half of an operation to completion on a separate task.
async fn detached<F>(work: F) -> Result<WizardOutcome, WizardError>
where
    F: Future<Output = Result<WizardOutcome, WizardError>> + Send + 'static,
{
    tokio::spawn(work).await.map_err(|err| {
        tracing::error!(error = %err, "Wizard operation task failed");
        WizardError::Store(format!("operation task failed: {err}"))
    })?
}
