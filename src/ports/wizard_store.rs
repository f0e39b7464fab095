//! Wizard Store Port - Interface for holding live wizard sessions.
//!
//! Sessions are held in memory only. Each one sits behind its own async
//! mutex so a handler can lock a session, release it across an outbound
//! call, and lock it again to apply the result.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::OwnedMutexGuard;

use crate::domain::foundation::WizardId;
use crate::domain::wizard::WizardSession;

/// Errors that can occur during wizard store operations
#[derive(Debug, thiserror::Error)]
pub enum WizardStoreError {
    #[error("Wizard not found: {0}")]
    NotFound(WizardId),

    #[error("Wizard already exists: {0}")]
    AlreadyExists(WizardId),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Port for the live session table
#[async_trait]
pub trait WizardStore: Send + Sync {
    /// Add a new session.
    ///
    /// # Errors
    /// Returns `WizardStoreError::AlreadyExists` on an id collision
    async fn insert(&self, session: WizardSession) -> Result<(), WizardStoreError>;

    /// Lock a session for exclusive use.
    ///
    /// # Errors
    /// Returns `WizardStoreError::NotFound` if no session has this id
    async fn checkout(&self, id: &WizardId)
        -> Result<OwnedMutexGuard<WizardSession>, WizardStoreError>;

    /// Drop a session. Returns whether it existed.
    async fn remove(&self, id: &WizardId) -> Result<bool, WizardStoreError>;

    /// Number of live sessions.
    async fn count(&self) -> usize;

    /// Drop sessions untouched for longer than `max_idle`.
    ///
    /// Sessions that are locked or have an operation in flight are kept.
    /// Returns how many were dropped.
    async fn evict_idle(&self, max_idle: Duration) -> Result<usize, WizardStoreError>;
}

impl From<WizardStoreError> for crate::domain::wizard::WizardError {
    fn from(err: WizardStoreError) -> Self {
        match err {
            WizardStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other.to_string()),
        }
    }
}
