//! Wizard step positions and transitions
//!
//! Steps are linear positions 1..=5. Forward navigation is gated at the
//! tier step: 3 → 4 happens only through tier selection, which may jump to
//! 4 from any step.

use crate::error::WizardError;
use nexus_report::Tier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in the wizard, always within `[1, 5]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Step(u8);

impl Step {
    pub const PROFILE: Step = Step(1);
    pub const SCOPE: Step = Step(2);
    pub const TIER: Step = Step(3);
    pub const OPTIONS: Step = Step(4);
    pub const FINALIZE: Step = Step(5);

    /// First and last positions
    pub const FIRST: Step = Self::PROFILE;
    pub const LAST: Step = Self::FINALIZE;

    /// All steps in order
    pub const ALL: [Step; 5] = [
        Self::PROFILE,
        Self::SCOPE,
        Self::TIER,
        Self::OPTIONS,
        Self::FINALIZE,
    ];

    /// Step at 1-based position, if in range
    #[inline]
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&number)
            .then_some(Self(number))
    }

    #[inline]
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Label shown on the progress indicator
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Profile",
            2 => "Scope",
            3 => "Tier",
            4 => "Options",
            _ => "Finalize",
        }
    }

    /// Next position, saturating at the last step
    #[inline]
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::LAST.0))
    }

    /// Previous position, saturating at the first step
    #[inline]
    #[must_use]
    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::FIRST.0))
    }

    #[inline]
    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// How this step renders relative to `current`
    #[must_use]
    pub fn progress(self, current: Step) -> StepProgress {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepProgress::Completed,
            std::cmp::Ordering::Equal => StepProgress::Current,
            std::cmp::Ordering::Greater => StepProgress::Upcoming,
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Step {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("step {value} is outside 1..=5"))
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> Self {
        step.0
    }
}

/// Progress indicator state of a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepProgress {
    Completed,
    Current,
    Upcoming,
}

/// Validates a forward move from `from`.
///
/// Returns the destination step. The tier step refuses to advance until a
/// tier is chosen.
pub fn validate_advance(from: Step, tier: Option<Tier>) -> Result<Step, WizardError> {
    if from == Step::TIER && tier.is_none() {
        return Err(WizardError::StepGated {
            step: from,
            reason: "select a report tier first",
        });
    }
    Ok(from.next())
}

/// Destinations reachable from `from` in one action
pub fn allowed_transitions(from: Step, tier: Option<Tier>) -> Vec<Step> {
    let mut targets = vec![from.prev()];
    if let Ok(next) = validate_advance(from, tier) {
        targets.push(next);
    }
    // Tier selection jumps to the options step from anywhere
    targets.push(Step::OPTIONS);
    targets.sort();
    targets.dedup();
    targets
}
