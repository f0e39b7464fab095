//! In-Memory Wizard Store Adapter
//!
//! Holds live wizard sessions in a map, each behind its own mutex.
//! Sessions are gone when they are removed, evicted as idle, or the
//! process exits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::domain::foundation::{Timestamp, WizardId};
use crate::domain::wizard::WizardSession;
use crate::ports::{WizardStore, WizardStoreError};

/// In-memory storage for wizard sessions
#[derive(Debug, Clone, Default)]
pub struct InMemoryWizardStore {
    sessions: Arc<RwLock<HashMap<WizardId, Arc<Mutex<WizardSession>>>>>,
}

impl InMemoryWizardStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every session (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl WizardStore for InMemoryWizardStore {
    async fn insert(&self, session: WizardSession) -> Result<(), WizardStoreError> {
        let id = *session.id();
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&id) {
            return Err(WizardStoreError::AlreadyExists(id));
        }
        sessions.insert(id, Arc::new(Mutex::new(session)));
        Ok(())
    }

    async fn checkout(
        &self,
        id: &WizardId,
    ) -> Result<OwnedMutexGuard<WizardSession>, WizardStoreError> {
        // Clone the handle and drop the map lock before waiting on the session.
        let entry = {
            let sessions = self.sessions.read().await;
            sessions
                .get(id)
                .cloned()
                .ok_or(WizardStoreError::NotFound(*id))?
        };
        Ok(entry.lock_owned().await)
    }

    async fn remove(&self, id: &WizardId) -> Result<bool, WizardStoreError> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn evict_idle(&self, max_idle: Duration) -> Result<usize, WizardStoreError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, entry| {
            // A held lock means a handler is using the session right now
            let Ok(session) = entry.try_lock() else {
                return true;
            };
            if session.is_busy() {
                return true;
            }
            let idle = now
                .duration_since(session.updated_at())
                .to_std()
                .unwrap_or_default();
            idle <= max_idle
        });

        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::CommitKey;
    use crate::domain::wizard::{NavigationPolicy, WizardStep};
    use std::time::Duration;

    fn session() -> WizardSession {
        WizardSession::new(WizardId::new(), NavigationPolicy::Gated)
    }

    #[tokio::test]
    async fn insert_and_checkout() {
        let store = InMemoryWizardStore::new();
        let s = session();
        let id = *s.id();
        store.insert(s).await.unwrap();

        let guard = store.checkout(&id).await.unwrap();
        assert_eq!(guard.active_step(), WizardStep::Compose);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = InMemoryWizardStore::new();
        let s = session();
        store.insert(s.clone()).await.unwrap();
        assert!(matches!(
            store.insert(s).await,
            Err(WizardStoreError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn checkout_unknown_is_not_found() {
        let store = InMemoryWizardStore::new();
        let id = WizardId::new();
        assert!(matches!(
            store.checkout(&id).await,
            Err(WizardStoreError::NotFound(missing)) if missing == id
        ));
    }

    #[tokio::test]
    async fn remove_reports_existence() {
        let store = InMemoryWizardStore::new();
        let s = session();
        let id = *s.id();
        store.insert(s).await.unwrap();

        assert!(store.remove(&id).await.unwrap());
        assert!(!store.remove(&id).await.unwrap());
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn checkout_waits_for_holder() {
        let store = InMemoryWizardStore::new();
        let s = session();
        let id = *s.id();
        store.insert(s).await.unwrap();

        let guard = store.checkout(&id).await.unwrap();
        let second = tokio::time::timeout(Duration::from_millis(20), store.checkout(&id)).await;
        assert!(second.is_err());

        drop(guard);
        assert!(store.checkout(&id).await.is_ok());
    }

    #[tokio::test]
    async fn evict_idle_drops_only_stale_sessions() {
        let store = InMemoryWizardStore::new();
        let s = session();
        let id = *s.id();
        store.insert(s).await.unwrap();

        assert_eq!(store.evict_idle(Duration::from_secs(3600)).await.unwrap(), 0);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(store.evict_idle(Duration::ZERO).await.unwrap(), 1);
        assert!(matches!(
            store.checkout(&id).await,
            Err(WizardStoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn evict_idle_keeps_locked_and_busy_sessions() {
        let store = InMemoryWizardStore::new();
        let held = session();
        let held_id = *held.id();
        let mut busy = session();
        busy.edit_compose(Some("T".into()), Some("P".into()), None).unwrap();
        busy.commit_keyword("k".into(), CommitKey::Enter).unwrap();
        busy.begin_generate().unwrap();
        store.insert(held).await.unwrap();
        store.insert(busy).await.unwrap();
        store.insert(session()).await.unwrap();

        let _guard = store.checkout(&held_id).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(store.evict_idle(Duration::ZERO).await.unwrap(), 1);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn other_sessions_are_not_blocked() {
        let store = InMemoryWizardStore::new();
        let a = session();
        let b = session();
        let (a_id, b_id) = (*a.id(), *b.id());
        store.insert(a).await.unwrap();
        store.insert(b).await.unwrap();

        let _held = store.checkout(&a_id).await.unwrap();
        assert!(
            tokio::time::timeout(Duration::from_millis(50), store.checkout(&b_id))
                .await
                .is_ok()
        );
    }
}
