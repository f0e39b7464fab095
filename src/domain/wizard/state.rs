//! Wizard controller state and its pure transition function.

use serde::{Deserialize, Serialize};

use super::{WizardError, WizardStep};
use crate::domain::content::{ContentDraft, KeywordSet};
use crate::domain::foundation::{StateMachine, ValidationError};

/// Whether tabs may be selected before their prerequisite content exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPolicy {
    /// Analyze needs composed content, Rephrase needs rephrase input.
    #[default]
    Gated,
    /// Every tab is always selectable.
    Free,
}

/// Events that drive the wizard controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// Compose produced a draft; keywords are handed to later steps.
    KeywordsConfirmed(KeywordSet),
    /// "Check plagiarism" from Compose.
    ProceedToAnalyze(ContentDraft),
    /// "Rephrase content" from Analyze.
    ProceedToRephrase(ContentDraft),
    /// "Back" from Analyze or Rephrase.
    Back,
    /// "Check plagiarism again" from Rephrase.
    RecheckPlagiarism(ContentDraft),
    /// Tab click.
    SelectStep(WizardStep),
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::KeywordsConfirmed(_) => "keywords_confirmed",
            WizardEvent::ProceedToAnalyze(_) => "proceed_to_analyze",
            WizardEvent::ProceedToRephrase(_) => "proceed_to_rephrase",
            WizardEvent::Back => "back",
            WizardEvent::RecheckPlagiarism(_) => "recheck_plagiarism",
            WizardEvent::SelectStep(_) => "select_step",
        }
    }
}

/// Which step is active and the payload handed between steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub active_step: WizardStep,
    /// Content under plagiarism review.
    pub composed_content: ContentDraft,
    /// Content handed to the rephrase step.
    pub rephrased_content: ContentDraft,
    pub keywords: KeywordSet,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            active_step: WizardStep::Compose,
            composed_content: ContentDraft::default(),
            rephrased_content: ContentDraft::default(),
            keywords: KeywordSet::new(),
        }
    }

    /// True when the tab for `step` can be selected under `policy`.
    pub fn is_reachable(&self, step: WizardStep, policy: NavigationPolicy) -> bool {
        match (policy, step) {
            (NavigationPolicy::Free, _) | (_, WizardStep::Compose) => true,
            (NavigationPolicy::Gated, WizardStep::Analyze) => !self.composed_content.is_empty(),
            (NavigationPolicy::Gated, WizardStep::Rephrase) => !self.rephrased_content.is_empty(),
        }
    }

    /// Applies an event, returning the next state.
    pub fn apply(self, event: WizardEvent, policy: NavigationPolicy) -> Result<Self, WizardError> {
        let name = event.name();
        match event {
            WizardEvent::KeywordsConfirmed(keywords) => Ok(Self { keywords, ..self }),

            WizardEvent::ProceedToAnalyze(content) => {
                self.require_step(WizardStep::Compose, name)?;
                require_content(&content, "Please generate content first")?;
                let active_step = self.step_to(WizardStep::Analyze, name)?;
                Ok(Self {
                    active_step,
                    composed_content: content,
                    ..self
                })
            }

            WizardEvent::ProceedToRephrase(content) => {
                self.require_step(WizardStep::Analyze, name)?;
                require_content(&content, "No content to rephrase")?;
                let active_step = self.step_to(WizardStep::Rephrase, name)?;
                Ok(Self {
                    active_step,
                    rephrased_content: content,
                    ..self
                })
            }

            WizardEvent::Back => {
                let target = self.active_step.previous().ok_or(WizardError::EventNotAllowed {
                    step: self.active_step,
                    event: name,
                })?;
                let active_step = self.step_to(target, name)?;
                Ok(Self {
                    active_step,
                    ..self
                })
            }

            WizardEvent::RecheckPlagiarism(content) => {
                self.require_step(WizardStep::Rephrase, name)?;
                require_content(&content, "No content to check")?;
                let active_step = self.step_to(WizardStep::Analyze, name)?;
                Ok(Self {
                    active_step,
                    composed_content: content,
                    ..self
                })
            }

            WizardEvent::SelectStep(step) => {
                if !self.is_reachable(step, policy) {
                    return Err(WizardError::StepLocked(step));
                }
                Ok(Self {
                    active_step: step,
                    ..self
                })
            }
        }
    }

    fn require_step(&self, step: WizardStep, event: &'static str) -> Result<(), WizardError> {
        if self.active_step == step {
            Ok(())
        } else {
            Err(WizardError::EventNotAllowed {
                step: self.active_step,
                event,
            })
        }
    }

    fn step_to(&self, target: WizardStep, event: &'static str) -> Result<WizardStep, WizardError> {
        self.active_step
            .transition_to(target)
            .map_err(|_| WizardError::EventNotAllowed {
                step: self.active_step,
                event,
            })
    }
}

fn require_content(content: &ContentDraft, message: &str) -> Result<(), WizardError> {
    if content.is_empty() {
        Err(ValidationError::missing_input("content", message).into())
    } else {
        Ok(())
    }
}
