//! Wizard module - the three-step compose, analyze and rephrase flow.
//!
//! `state` holds the pure controller transitions, the view modules hold each
//! step's local state, and `session` ties them into one aggregate.

mod activity;
mod analyze;
mod compose;
mod errors;
mod rephrase;
mod session;
mod state;
mod step;

pub use activity::{Activity, Ticket};
pub use analyze::AnalyzeView;
pub use compose::{ComposeView, GenerateRequest};
pub use errors::WizardError;
pub use rephrase::{RephraseRequest, RephraseView};
pub use session::WizardSession;
pub use state::{NavigationPolicy, WizardEvent, WizardState};
pub use step::WizardStep;
