//! Storage Adapters
//!
//! Implementations of the WizardStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryWizardStore** - Live sessions in memory, one lock per session
//! - **IdleSessionSweeper** - Background eviction of abandoned sessions
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryWizardStore;
//!
//! let store = Arc::new(InMemoryWizardStore::new());
//! ```

mod idle_sweeper;
mod in_memory_wizard_store;

pub use idle_sweeper::IdleSessionSweeper;
pub use in_memory_wizard_store::InMemoryWizardStore;
