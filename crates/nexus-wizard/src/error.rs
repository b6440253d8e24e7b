//! Error types for the wizard
//!
//! Every error here is scoped to one wizard session; none is fatal to the
//! process. Each leaves the user able to retry or switch to manual entry.

use crate::step::Step;
use nexus_report::ReportError;

/// Main wizard error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Submission reached with no tier selected
    ///
    /// Unreachable under normal gating; recovery resets the wizard to
    /// step 1.
    #[error("no report tier selected")]
    MissingTier,

    /// Request assembly or dispatch failed
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// Forward navigation refused
    #[error("cannot advance from step {step}: {reason}")]
    StepGated { step: Step, reason: &'static str },

    /// Submission preconditions not met
    #[error("submission not ready: {}", .0.join("; "))]
    NotReady(Vec<&'static str>),

    /// Value outside the field's option list
    #[error("invalid {field}: '{value}'")]
    InvalidChoice { field: &'static str, value: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl WizardError {
    /// Check if the user can recover within the same session
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }

    /// Alert-level message for errors that must interrupt the user
    #[must_use]
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            Self::MissingTier => Some("An error occurred. Please restart the process."),
            Self::Report(ReportError::Precondition(_)) => {
                Some("The report could not be prepared. Please try again.")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_error_display() {
        let err = WizardError::StepGated {
            step: Step::TIER,
            reason: "select a tier first",
        };
        assert_eq!(err.to_string(), "cannot advance from step 3: select a tier first");

        let err = WizardError::NotReady(vec!["objective is empty", "not on the final step"]);
        assert!(err.to_string().contains("objective is empty; not on the final step"));
    }

    #[test]
    fn missing_tier_alerts() {
        assert!(WizardError::MissingTier.alert_message().is_some());
        assert!(WizardError::MissingTier.is_recoverable());
        assert!(WizardError::Report(ReportError::InFlight)
            .alert_message()
            .is_none());
    }

    #[test]
    fn config_error_is_not_recoverable() {
        assert!(!WizardError::Config("bad".into()).is_recoverable());
    }
}
