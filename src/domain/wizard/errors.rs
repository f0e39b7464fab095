//! Wizard error types.

use thiserror::Error;

use super::WizardStep;
use crate::domain::foundation::{ErrorCode, ValidationError, WizardId};

/// Errors raised by wizard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Wizard not found: {0}")]
    NotFound(WizardId),

    #[error("'{event}' is not allowed on the {step} step")]
    EventNotAllowed { step: WizardStep, event: &'static str },

    #[error("The {0} step is not available until its content exists")]
    StepLocked(WizardStep),

    #[error("An operation is already running on the {0} step")]
    OperationInProgress(WizardStep),

    #[error("Edit mode is not active")]
    NotEditing,

    #[error("No content to copy")]
    NothingToCopy,

    #[error("Wizard store error: {0}")]
    Store(String),
}

impl WizardError {
    /// Code reported to API clients.
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::Validation(_) => ErrorCode::ValidationFailed,
            WizardError::NotFound(_) => ErrorCode::WizardNotFound,
            WizardError::EventNotAllowed { .. } | WizardError::NotEditing => {
                ErrorCode::InvalidStateTransition
            }
            WizardError::StepLocked(_) => ErrorCode::StepLocked,
            WizardError::OperationInProgress(_) => ErrorCode::OperationInProgress,
            WizardError::NothingToCopy => ErrorCode::NothingToCopy,
            WizardError::Store(_) => ErrorCode::StoreError,
        }
    }
}
