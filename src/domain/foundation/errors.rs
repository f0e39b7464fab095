//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and user input checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Missing user input, carrying the notice shown to the user.
    #[error("{message}")]
    MissingInput { field: String, message: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing input error with a user-facing message.
    pub fn missing_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::MissingInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidFormat { field, .. }
            | ValidationError::MissingInput { field, .. } => field,
        }
    }
}

/// Error codes exposed to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    NothingToCopy,

    // Not found errors
    WizardNotFound,

    // State errors
    InvalidStateTransition,
    StepLocked,
    OperationInProgress,

    // Infrastructure errors
    StoreError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NothingToCopy => "NOTHING_TO_COPY",
            ErrorCode::WizardNotFound => "WIZARD_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::StepLocked => "STEP_LOCKED",
            ErrorCode::OperationInProgress => "OPERATION_IN_PROGRESS",
            ErrorCode::StoreError => "STORE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}
