//! HTTP DTOs for wizard endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{CopyRephrasedResult, WizardOutcome};
use crate::domain::content::{CommitKey, Severity};
use crate::domain::foundation::{ErrorCode, Notice};
use crate::domain::wizard::{NavigationPolicy, WizardSession, WizardStep};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to update the compose form. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComposeRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub keyword_entry: Option<String>,
}

/// Request to commit the keyword entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitKeywordRequest {
    pub entry: String,
    pub trigger: CommitKey,
}

/// Request to replace the rephrase edit buffer.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEditRequest {
    pub text: String,
}

/// Tab selection.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub step: WizardStep,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One entry of the tab bar.
#[derive(Debug, Clone, Serialize)]
pub struct StepTabResponse {
    pub step: WizardStep,
    pub label: &'static str,
    pub active: bool,
    pub reachable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposeResponse {
    pub title: String,
    pub purpose: String,
    pub keywords: Vec<String>,
    pub keyword_entry: String,
    pub content: String,
    pub generated: bool,
    pub busy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub score: u8,
    pub severity: Severity,
    pub indicator: &'static str,
    pub advisory: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub content: String,
    /// Annotated text when a result exists, otherwise the content.
    pub display_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScoreResponse>,
    pub busy: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RephraseResponse {
    pub input: String,
    pub keywords: Vec<String>,
    pub result: String,
    pub editing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_buffer: Option<String>,
    pub busy: bool,
}

/// Full wizard snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct WizardResponse {
    pub id: String,
    pub active_step: WizardStep,
    pub navigation: NavigationPolicy,
    pub steps: Vec<StepTabResponse>,
    pub compose: ComposeResponse,
    pub analyze: AnalyzeResponse,
    pub rephrase: RephraseResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&WizardSession> for WizardResponse {
    fn from(session: &WizardSession) -> Self {
        let compose = session.compose();
        let analyze = session.analyze();
        let rephrase = session.rephrase();

        Self {
            id: session.id().to_string(),
            active_step: session.active_step(),
            navigation: session.policy(),
            steps: WizardStep::all()
                .iter()
                .map(|&step| StepTabResponse {
                    step,
                    label: step.display_name(),
                    active: step == session.active_step(),
                    reachable: session.is_reachable(step),
                })
                .collect(),
            compose: ComposeResponse {
                title: compose.title().to_string(),
                purpose: compose.purpose().to_string(),
                keywords: compose.keywords().as_slice().to_vec(),
                keyword_entry: compose.keyword_entry().to_string(),
                content: compose.content().to_string(),
                generated: compose.is_generated(),
                busy: compose.is_busy(),
            },
            analyze: AnalyzeResponse {
                content: analyze.content().to_string(),
                display_text: analyze.display_text().to_string(),
                result: analyze.result().map(|result| {
                    let severity = result.severity();
                    ScoreResponse {
                        score: result.score.value(),
                        severity,
                        indicator: severity.indicator(),
                        advisory: severity.advisory(),
                    }
                }),
                busy: analyze.is_busy(),
            },
            rephrase: RephraseResponse {
                input: rephrase.input().to_string(),
                keywords: rephrase.keywords().as_slice().to_vec(),
                result: rephrase.result().to_string(),
                editing: rephrase.is_editing(),
                edit_buffer: rephrase.edit_buffer().map(str::to_string),
                busy: rephrase.is_busy(),
            },
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

/// Snapshot plus the notices raised by the command.
#[derive(Debug, Clone, Serialize)]
pub struct WizardCommandResponse {
    pub wizard: WizardResponse,
    pub notices: Vec<Notice>,
}

impl From<WizardOutcome> for WizardCommandResponse {
    fn from(outcome: WizardOutcome) -> Self {
        Self {
            wizard: WizardResponse::from(&outcome.session),
            notices: outcome.notices,
        }
    }
}

/// Clipboard text for the rephrase step.
#[derive(Debug, Clone, Serialize)]
pub struct CopyResponse {
    pub text: String,
    pub notices: Vec<Notice>,
}

impl From<CopyRephrasedResult> for CopyResponse {
    fn from(result: CopyRephrasedResult) -> Self {
        Self {
            text: result.text,
            notices: vec![result.notice],
        }
    }
}

/// Liveness plus the active backend.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: String,
    pub model: String,
    pub active_wizards: usize,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentDraft, Sourced};
    use crate::domain::foundation::WizardId;

    #[test]
    fn commit_keyword_request_deserializes() {
        let json = r#"{"entry": "seo", "trigger": "comma"}"#;
        let req: CommitKeywordRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.entry, "seo");
        assert_eq!(req.trigger, CommitKey::Comma);
    }

    #[test]
    fn update_compose_request_allows_partial_bodies() {
        let req: UpdateComposeRequest = serde_json::from_str(r#"{"title": "T"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("T"));
        assert!(req.purpose.is_none());
        assert!(req.keyword_entry.is_none());
    }

    #[test]
    fn navigate_request_uses_snake_case_steps() {
        let req: NavigateRequest = serde_json::from_str(r#"{"step": "rephrase"}"#).unwrap();
        assert_eq!(req.step, WizardStep::Rephrase);
    }

    #[test]
    fn fresh_session_snapshot() {
        let session = WizardSession::new(WizardId::new(), NavigationPolicy::Gated);
        let response = WizardResponse::from(&session);

        assert_eq!(response.active_step, WizardStep::Compose);
        assert_eq!(response.steps.len(), 3);
        assert!(response.steps[0].active);
        assert!(!response.steps[1].reachable);
        assert!(response.analyze.result.is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["navigation"], "gated");
        assert_eq!(json["steps"][0]["label"], "Write");
        assert!(json["analyze"].get("result").is_none());
    }

    #[test]
    fn snapshot_carries_score_reading() {
        let mut session = WizardSession::new(WizardId::new(), NavigationPolicy::Gated);
        session
            .edit_compose(Some("T".into()), Some("P".into()), None)
            .unwrap();
        session.commit_keyword("k".into(), CommitKey::Enter).unwrap();
        let (ticket, _) = session.begin_generate().unwrap();
        session
            .finish_generate(&ticket, Sourced::live(ContentDraft::new("Body")))
            .unwrap();
        session.proceed_to_analyze().unwrap();
        let (ticket, _) = session.begin_check().unwrap();
        session.finish_check(
            &ticket,
            Sourced::live(crate::domain::content::PlagiarismResult::from_reply(
                "25%",
                &ContentDraft::new("Body"),
            )),
        );

        let response = WizardResponse::from(&session);
        let result = response.analyze.result.unwrap();
        assert_eq!(result.score, 25);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(result.indicator, "red");
    }

    #[test]
    fn error_response_uses_error_code() {
        let error = ErrorResponse::new(ErrorCode::StepLocked, "locked");
        assert_eq!(error.code, "STEP_LOCKED");
        assert!(error.details.is_none());
    }
}
