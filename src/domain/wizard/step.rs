//! WizardStep enum representing the three wizard screens.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The three wizard screens, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Compose,
    Analyze,
    Rephrase,
}

impl WizardStep {
    /// Returns all steps in flow order.
    pub fn all() -> &'static [WizardStep] {
        &[WizardStep::Compose, WizardStep::Analyze, WizardStep::Rephrase]
    }

    /// Step reached by the "back" action, if any.
    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Compose => None,
            WizardStep::Analyze => Some(WizardStep::Compose),
            WizardStep::Rephrase => Some(WizardStep::Analyze),
        }
    }

    /// Tab label.
    pub fn display_name(&self) -> &'static str {
        match self {
            WizardStep::Compose => "Write",
            WizardStep::Analyze => "Check",
            WizardStep::Rephrase => "Rephrase",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Flow transitions (proceed, back, recheck). Tab selection is governed
/// separately by the navigation policy.
impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStep::*;
        matches!(
            (self, target),
            (Compose, Analyze) | (Analyze, Rephrase) | (Analyze, Compose) | (Rephrase, Analyze)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStep::*;
        match self {
            Compose => vec![Analyze],
            Analyze => vec![Rephrase, Compose],
            Rephrase => vec![Analyze],
        }
    }
}
