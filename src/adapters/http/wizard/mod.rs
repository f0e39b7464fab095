//! HTTP adapter for wizard endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CommitKeywordRequest, CopyResponse, ErrorResponse, HealthResponse, NavigateRequest,
    UpdateComposeRequest, UpdateEditRequest, WizardCommandResponse, WizardResponse,
};
pub use handlers::WizardHandlers;
pub use routes::{health_routes, wizard_routes};
