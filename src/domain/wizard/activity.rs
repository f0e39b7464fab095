//! Busy tracking for step views.
//!
//! An operation is started with [`Activity::begin`], which hands out a
//! [`Ticket`] stamped with the view's current input generation. The result
//! is only applied if the ticket is still current when it comes back.

use super::{WizardError, WizardStep};

/// Proof that an operation was started on a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    step: WizardStep,
    generation: u64,
}

impl Ticket {
    pub fn step(&self) -> WizardStep {
        self.step
    }
}

/// Busy flag plus input generation for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activity {
    generation: u64,
    busy: bool,
}

impl Activity {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Marks the view busy.
    ///
    /// # Errors
    ///
    /// `OperationInProgress` if the view is already busy.
    pub fn begin(&mut self, step: WizardStep) -> Result<Ticket, WizardError> {
        if self.busy {
            return Err(WizardError::OperationInProgress(step));
        }
        self.busy = true;
        Ok(Ticket {
            step,
            generation: self.generation,
        })
    }

    /// Clears the busy flag if `ticket` is current. Returns false for a
    /// stale ticket, whose result must be dropped.
    pub fn finish(&mut self, ticket: &Ticket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.busy = false;
        true
    }

    /// New input arrived: outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_while_busy() {
        let mut activity = Activity::default();
        activity.begin(WizardStep::Analyze).unwrap();
        let err = activity.begin(WizardStep::Analyze).unwrap_err();
        assert_eq!(err, WizardError::OperationInProgress(WizardStep::Analyze));
    }

    #[test]
    fn finish_with_current_ticket_clears_busy() {
        let mut activity = Activity::default();
        let ticket = activity.begin(WizardStep::Compose).unwrap();
        assert!(activity.finish(&ticket));
        assert!(!activity.is_busy());
    }

    #[test]
    fn reset_makes_ticket_stale() {
        let mut activity = Activity::default();
        let stale = activity.begin(WizardStep::Rephrase).unwrap();
        activity.reset();
        let fresh = activity.begin(WizardStep::Rephrase).unwrap();

        assert!(!activity.finish(&stale));
        assert!(activity.is_busy());
        assert!(activity.finish(&fresh));
    }
}
