//! Idle Session Sweeper
//!
//! Periodically evicts wizard sessions that were abandoned without being
//! ended.
//!
//! | Setting | Default | Meaning |
//! |---------|---------|---------|
//! | `max_idle` | 30 min | Sessions untouched this long are dropped |
//! | `interval` | 60 s | Time between sweeps |

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::ports::WizardStore;

/// Background task that drops idle sessions from a store.
pub struct IdleSessionSweeper {
    store: Arc<dyn WizardStore>,
    max_idle: Duration,
    interval: Duration,
}

impl IdleSessionSweeper {
    pub fn new(store: Arc<dyn WizardStore>, max_idle: Duration, interval: Duration) -> Self {
        Self {
            store,
            max_idle,
            interval,
        }
    }

    /// Sweep on every interval tick until `shutdown` turns true or its
    /// sender is dropped.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.interval);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        return;
                    }
                }
                _ = interval.tick() => {
                    self.sweep_once().await;
                }
            }
        }
    }

    /// Run a single sweep. Returns the number of sessions evicted.
    pub async fn sweep_once(&self) -> usize {
        match self.store.evict_idle(self.max_idle).await {
            Ok(0) => 0,
            Ok(evicted) => {
                tracing::info!(
                    evicted,
                    max_idle_secs = self.max_idle.as_secs(),
                    "Evicted idle wizard sessions"
                );
                evicted
            }
            Err(e) => {
                tracing::warn!(error = %e, "Idle session sweep failed");
                0
            }
        }
    }
}
