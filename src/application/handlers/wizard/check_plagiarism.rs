//! CheckPlagiarismHandler - Command handler for scoring analyzed content.

use std::sync::Arc;

use super::{detached, WizardOutcome};
use crate::domain::foundation::WizardId;
use crate::domain::wizard::WizardError;
use crate::ports::{ContentBackend, WizardStore};

/// Command to score the content on the analyze step.
#[derive(Debug, Clone)]
pub struct CheckPlagiarismCommand {
    pub wizard_id: WizardId,
}

/// Handler for plagiarism checks.
pub struct CheckPlagiarismHandler {
    store: Arc<dyn WizardStore>,
    backend: Arc<dyn ContentBackend>,
}

impl CheckPlagiarismHandler {
    pub fn new(store: Arc<dyn WizardStore>, backend: Arc<dyn ContentBackend>) -> Self {
        Self { store, backend }
    }

    pub async fn handle(&self, cmd: CheckPlagiarismCommand) -> Result<WizardOutcome, WizardError> {
        let (ticket, content) = {
            let mut session = self.store.checkout(&cmd.wizard_id).await?;
            session.begin_check()?
        };

        let store = Arc::clone(&self.store);
        let backend = Arc::clone(&self.backend);
        let wizard_id = cmd.wizard_id;
        detached(async move {
            let result = backend.score(&content).await;
            tracing::debug!(
                wizard_id = %wizard_id,
                origin = ?result.origin,
                score = %result.value.score,
                "Plagiarism scored"
            );

            let mut session = store.checkout(&wizard_id).await?;
            let notices = session.finish_check(&ticket, result);
            Ok(WizardOutcome::new(session.clone(), notices))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::application::handlers::wizard::test_support::{backend, filled_session, store};
    use crate::domain::content::{ContentDraft, Severity, Sourced};
    use crate::domain::foundation::NoticeLevel;

    async fn analyzed_session(store: &crate::adapters::storage::InMemoryWizardStore) -> WizardId {
        let id = filled_session(store).await;
        let mut session = store.checkout(&id).await.unwrap();
        let (ticket, _) = session.begin_generate().unwrap();
        session
            .finish_generate(&ticket, Sourced::live(ContentDraft::new("First. Second. Third")))
            .unwrap();
        session.proceed_to_analyze().unwrap();
        id
    }

    #[tokio::test]
    async fn high_score_warns() {
        let store = store();
        let id = analyzed_session(&store).await;
        let mock = MockAIProvider::new()
            .with_response(r#"42% First. <span class="plagiarism">Second.</span> Third"#);
        let handler = CheckPlagiarismHandler::new(store, backend(&mock));

        let outcome = handler
            .handle(CheckPlagiarismCommand { wizard_id: id })
            .await
            .unwrap();

        let analyze = outcome.session.analyze();
        assert_eq!(analyze.result().unwrap().score.value(), 42);
        assert_eq!(analyze.severity(), Some(Severity::High));
        assert!(analyze.display_text().has_spans());
        assert_eq!(outcome.notices[0].level, NoticeLevel::Warning);
    }

    #[tokio::test]
    async fn check_outside_analyze_is_rejected() {
        let store = store();
        let id = filled_session(&store).await;
        let mock = MockAIProvider::new();
        let handler = CheckPlagiarismHandler::new(store, backend(&mock));

        let err = handler
            .handle(CheckPlagiarismCommand { wizard_id: id })
            .await
            .unwrap_err();
        assert!(matches!(err, WizardError::EventNotAllowed { .. }));
        assert_eq!(mock.call_count(), 0);
    }
}
