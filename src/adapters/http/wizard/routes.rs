//! HTTP routes for wizard endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    back_from_analyze, back_from_rephrase, begin_edit, cancel_edit, check_plagiarism,
    commit_keyword, copy_rephrased, end_wizard, generate_content, get_wizard, health, navigate,
    proceed_to_analyze, proceed_to_rephrase, recheck_plagiarism, remove_keyword,
    rephrase_content, save_edit, start_wizard, update_compose, update_edit, WizardHandlers,
};

/// Creates the wizard router, mounted under `/api/wizards`.
pub fn wizard_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/", post(start_wizard))
        .route("/:id", get(get_wizard).delete(end_wizard))
        .route("/:id/compose", put(update_compose))
        .route("/:id/compose/keywords", post(commit_keyword))
        .route("/:id/compose/keywords/:index", delete(remove_keyword))
        .route("/:id/compose/generate", post(generate_content))
        .route("/:id/compose/proceed", post(proceed_to_analyze))
        .route("/:id/analyze/check", post(check_plagiarism))
        .route("/:id/analyze/proceed", post(proceed_to_rephrase))
        .route("/:id/analyze/back", post(back_from_analyze))
        .route("/:id/rephrase/run", post(rephrase_content))
        .route(
            "/:id/rephrase/edit",
            post(begin_edit).put(update_edit).delete(cancel_edit),
        )
        .route("/:id/rephrase/edit/save", post(save_edit))
        .route("/:id/rephrase/copy", get(copy_rephrased))
        .route("/:id/rephrase/recheck", post(recheck_plagiarism))
        .route("/:id/rephrase/back", post(back_from_rephrase))
        .route("/:id/navigate", post(navigate))
        .with_state(handlers)
}

/// Creates the health router, mounted at the root.
pub fn health_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(handlers)
}
