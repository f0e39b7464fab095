//! HTTP handlers for wizard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::{
    CheckPlagiarismCommand, CheckPlagiarismHandler, ComposeEdit, CopyRephrasedQuery,
    EditComposeCommand, EditComposeHandler, EditRephraseCommand, EditRephraseHandler,
    EndWizardCommand, EndWizardHandler, GenerateContentCommand, GenerateContentHandler,
    GetWizardHandler, GetWizardQuery, NavigateWizardCommand, NavigateWizardHandler, Navigation,
    RephraseContentCommand, RephraseContentHandler, RephraseEdit, StartWizardCommand,
    StartWizardHandler, WizardOutcome,
};
use crate::domain::foundation::WizardId;
use crate::domain::wizard::{NavigationPolicy, WizardError, WizardStep};
use crate::ports::{ContentBackend, WizardStore};

use super::dto::{
    CommitKeywordRequest, CopyResponse, ErrorResponse, HealthResponse, NavigateRequest,
    UpdateComposeRequest, UpdateEditRequest, WizardCommandResponse, WizardResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WizardHandlers {
    start_handler: Arc<StartWizardHandler>,
    get_handler: Arc<GetWizardHandler>,
    end_handler: Arc<EndWizardHandler>,
    compose_handler: Arc<EditComposeHandler>,
    generate_handler: Arc<GenerateContentHandler>,
    check_handler: Arc<CheckPlagiarismHandler>,
    rephrase_handler: Arc<RephraseContentHandler>,
    edit_handler: Arc<EditRephraseHandler>,
    navigate_handler: Arc<NavigateWizardHandler>,
    store: Arc<dyn WizardStore>,
    backend: Arc<dyn ContentBackend>,
}

impl WizardHandlers {
    pub fn new(
        store: Arc<dyn WizardStore>,
        backend: Arc<dyn ContentBackend>,
        policy: NavigationPolicy,
    ) -> Self {
        Self {
            start_handler: Arc::new(StartWizardHandler::new(store.clone(), policy)),
            get_handler: Arc::new(GetWizardHandler::new(store.clone())),
            end_handler: Arc::new(EndWizardHandler::new(store.clone())),
            compose_handler: Arc::new(EditComposeHandler::new(store.clone())),
            generate_handler: Arc::new(GenerateContentHandler::new(
                store.clone(),
                backend.clone(),
            )),
            check_handler: Arc::new(CheckPlagiarismHandler::new(store.clone(), backend.clone())),
            rephrase_handler: Arc::new(RephraseContentHandler::new(
                store.clone(),
                backend.clone(),
            )),
            edit_handler: Arc::new(EditRephraseHandler::new(store.clone())),
            navigate_handler: Arc::new(NavigateWizardHandler::new(store.clone(), backend.clone())),
            store,
            backend,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/wizards - Start a new wizard session
pub async fn start_wizard(State(handlers): State<WizardHandlers>) -> Response {
    match handlers.start_handler.handle(StartWizardCommand).await {
        Ok(session) => {
            let response = WizardCommandResponse::from(WizardOutcome::quiet(session));
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_wizard_error(e),
    }
}

/// GET /api/wizards/:id - Current snapshot
pub async fn get_wizard(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetWizardQuery { wizard_id }).await {
        Ok(session) => (StatusCode::OK, Json(WizardResponse::from(&session))).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// DELETE /api/wizards/:id - End the session and drop its state
pub async fn end_wizard(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.end_handler.handle(EndWizardCommand { wizard_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// PUT /api/wizards/:id/compose - Update title, purpose or keyword entry
pub async fn update_compose(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<UpdateComposeRequest>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = EditComposeCommand {
        wizard_id,
        edit: ComposeEdit::Fields {
            title: req.title,
            purpose: req.purpose,
            keyword_entry: req.keyword_entry,
        },
    };
    respond(handlers.compose_handler.handle(cmd).await)
}

/// POST /api/wizards/:id/compose/keywords - Commit the keyword entry
pub async fn commit_keyword(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<CommitKeywordRequest>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = EditComposeCommand {
        wizard_id,
        edit: ComposeEdit::CommitKeyword {
            entry: req.entry,
            trigger: req.trigger,
        },
    };
    respond(handlers.compose_handler.handle(cmd).await)
}

/// DELETE /api/wizards/:id/compose/keywords/:index - Remove a keyword chip
pub async fn remove_keyword(
    State(handlers): State<WizardHandlers>,
    Path((wizard_id, index)): Path<(String, usize)>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = EditComposeCommand {
        wizard_id,
        edit: ComposeEdit::RemoveKeyword { index },
    };
    respond(handlers.compose_handler.handle(cmd).await)
}

/// POST /api/wizards/:id/compose/generate - Draft the post
pub async fn generate_content(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond(
        handlers
            .generate_handler
            .handle(GenerateContentCommand { wizard_id })
            .await,
    )
}

/// POST /api/wizards/:id/compose/proceed - Move to the analyze step
pub async fn proceed_to_analyze(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    navigate_to(handlers, &wizard_id, Navigation::ProceedToAnalyze).await
}

/// POST /api/wizards/:id/analyze/check - Score the content
pub async fn check_plagiarism(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond(
        handlers
            .check_handler
            .handle(CheckPlagiarismCommand { wizard_id })
            .await,
    )
}

/// POST /api/wizards/:id/analyze/proceed - Move to rephrase and run it
pub async fn proceed_to_rephrase(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    navigate_to(handlers, &wizard_id, Navigation::ProceedToRephrase).await
}

/// POST /api/wizards/:id/analyze/back - Return to the compose step
pub async fn back_from_analyze(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    navigate_to(handlers, &wizard_id, Navigation::Back(WizardStep::Analyze)).await
}

/// POST /api/wizards/:id/rephrase/back - Return to the analyze step
pub async fn back_from_rephrase(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    navigate_to(handlers, &wizard_id, Navigation::Back(WizardStep::Rephrase)).await
}

/// POST /api/wizards/:id/rephrase/run - Rewrite the content again
pub async fn rephrase_content(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond(
        handlers
            .rephrase_handler
            .handle(RephraseContentCommand { wizard_id })
            .await,
    )
}

/// POST /api/wizards/:id/rephrase/edit - Enter edit mode
pub async fn begin_edit(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    edit_rephrased(handlers, &wizard_id, RephraseEdit::Begin).await
}

/// PUT /api/wizards/:id/rephrase/edit - Replace the edit buffer
pub async fn update_edit(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<UpdateEditRequest>,
) -> Response {
    edit_rephrased(handlers, &wizard_id, RephraseEdit::Update(req.text)).await
}

/// POST /api/wizards/:id/rephrase/edit/save - Keep the edit
pub async fn save_edit(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    edit_rephrased(handlers, &wizard_id, RephraseEdit::Save).await
}

/// DELETE /api/wizards/:id/rephrase/edit - Discard the edit
pub async fn cancel_edit(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    edit_rephrased(handlers, &wizard_id, RephraseEdit::Cancel).await
}

/// GET /api/wizards/:id/rephrase/copy - Plain text for the clipboard
pub async fn copy_rephrased(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    let wizard_id = match parse_wizard_id(&wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .edit_handler
        .copy(CopyRephrasedQuery { wizard_id })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(CopyResponse::from(result))).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

/// POST /api/wizards/:id/rephrase/recheck - Send the rewrite back to analyze
pub async fn recheck_plagiarism(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
) -> Response {
    navigate_to(handlers, &wizard_id, Navigation::Recheck).await
}

/// POST /api/wizards/:id/navigate - Tab selection
pub async fn navigate(
    State(handlers): State<WizardHandlers>,
    Path(wizard_id): Path<String>,
    Json(req): Json<NavigateRequest>,
) -> Response {
    navigate_to(handlers, &wizard_id, Navigation::Select(req.step)).await
}

/// GET /health - Liveness and backend identity
pub async fn health(State(handlers): State<WizardHandlers>) -> Response {
    let info = handlers.backend.backend_info();
    let response = HealthResponse {
        status: "ok",
        provider: info.name,
        model: info.model,
        active_wizards: handlers.store.count().await,
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Shared plumbing
// ════════════════════════════════════════════════════════════════════════════

async fn navigate_to(handlers: WizardHandlers, wizard_id: &str, navigation: Navigation) -> Response {
    let wizard_id = match parse_wizard_id(wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = NavigateWizardCommand {
        wizard_id,
        navigation,
    };
    respond(handlers.navigate_handler.handle(cmd).await)
}

async fn edit_rephrased(handlers: WizardHandlers, wizard_id: &str, edit: RephraseEdit) -> Response {
    let wizard_id = match parse_wizard_id(wizard_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    respond(
        handlers
            .edit_handler
            .handle(EditRephraseCommand { wizard_id, edit })
            .await,
    )
}

fn respond(result: Result<WizardOutcome, WizardError>) -> Response {
    match result {
        Ok(outcome) => (StatusCode::OK, Json(WizardCommandResponse::from(outcome))).into_response(),
        Err(e) => handle_wizard_error(e),
    }
}

fn parse_wizard_id(raw: &str) -> Result<WizardId, Response> {
    raw.parse::<WizardId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid wizard ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_wizard_error(error: WizardError) -> Response {
    let status = match &error {
        WizardError::Validation(_) | WizardError::NothingToCopy => StatusCode::BAD_REQUEST,
        WizardError::NotFound(_) => StatusCode::NOT_FOUND,
        WizardError::EventNotAllowed { .. }
        | WizardError::StepLocked(_)
        | WizardError::OperationInProgress(_)
        | WizardError::NotEditing => StatusCode::CONFLICT,
        WizardError::Store(msg) => {
            tracing::error!(error = %msg, "Wizard store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let mut body = ErrorResponse::new(error.code(), error.to_string());
    if let WizardError::Validation(validation) = &error {
        body = body.with_details(json!({ "field": validation.field() }));
    }

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;

    #[test]
    fn validation_maps_to_400() {
        let error: WizardError =
            ValidationError::missing_input("title", "Please enter a blog title").into();
        let response = handle_wizard_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_wizard_error(WizardError::NotFound(WizardId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn state_conflicts_map_to_409() {
        for error in [
            WizardError::StepLocked(WizardStep::Analyze),
            WizardError::OperationInProgress(WizardStep::Compose),
            WizardError::NotEditing,
            WizardError::EventNotAllowed {
                step: WizardStep::Compose,
                event: "back",
            },
        ] {
            assert_eq!(handle_wizard_error(error).status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn nothing_to_copy_maps_to_400() {
        let response = handle_wizard_error(WizardError::NothingToCopy);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let response = handle_wizard_error(WizardError::Store("poisoned".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let response = parse_wizard_id("not-a-uuid").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
