//! Wizard session state
//!
//! Plain data, read through [`crate::WizardController::state`]. All
//! mutation goes through the controller so the step and field invariants
//! hold.

use crate::config::WizardConfig;
use crate::options::{default_department, COMPANY_SIZES};
use crate::step::Step;
use indexmap::IndexSet;
use nexus_report::{ReportOption, Tier, UserType};
use serde::{Deserialize, Serialize};

/// Step 1: who commissions the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub user_type: UserType,
    pub user_name: String,
    pub user_department: String,
    pub user_country: String,
    pub is_manual_department: bool,
}

/// Step 2: geographic and industrial focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFields {
    pub target_country: String,
    /// Selected or typed city; empty while a lookup is loading
    pub regional_city: String,
    pub is_manual_city: bool,
    pub industry: String,
    pub is_manual_industry: bool,
    pub manual_industry_text: String,
}

/// Step 5: objective and partner profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeFields {
    pub objective: String,
    pub company_size: String,
    pub target_markets: IndexSet<String>,
    pub key_technologies: IndexSet<String>,
    pub is_manual_tech: bool,
    pub manual_tech_text: String,
}

/// Everything collected during one wizard session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub current_step: Step,
    pub profile: ProfileFields,
    pub scope: ScopeFields,
    pub tier: Option<Tier>,
    /// Insertion-ordered set of add-on modules
    pub selected_options: IndexSet<ReportOption>,
    pub finalize: FinalizeFields,
}

impl WizardState {
    /// Fresh state with the configured defaults
    #[must_use]
    pub fn new(config: &WizardConfig) -> Self {
        let user_type = UserType::default();
        Self {
            current_step: Step::FIRST,
            profile: ProfileFields {
                user_type,
                user_name: String::new(),
                user_department: default_department(user_type).to_string(),
                user_country: config.default_user_country.clone(),
                is_manual_department: false,
            },
            scope: ScopeFields {
                target_country: config.default_target_country.clone(),
                regional_city: String::new(),
                is_manual_city: false,
                industry: config.default_industry.clone(),
                is_manual_industry: false,
                manual_industry_text: String::new(),
            },
            tier: None,
            selected_options: IndexSet::new(),
            finalize: FinalizeFields {
                objective: String::new(),
                company_size: COMPANY_SIZES[0].to_string(),
                target_markets: IndexSet::new(),
                key_technologies: IndexSet::new(),
                is_manual_tech: false,
                manual_tech_text: String::new(),
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn has_objective(&self) -> bool {
        !self.finalize.objective.is_empty()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new(&WizardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::GOVERNMENT_DEPARTMENTS;

    #[test]
    fn fresh_state_defaults() {
        let state = WizardState::default();
        assert_eq!(state.current_step, Step::PROFILE);
        assert_eq!(state.profile.user_type, UserType::Government);
        assert_eq!(state.profile.user_department, GOVERNMENT_DEPARTMENTS[0]);
        assert_eq!(state.profile.user_country, "Australia");
        assert_eq!(state.scope.target_country, "Philippines");
        assert!(state.tier.is_none());
        assert!(state.selected_options.is_empty());
        assert!(!state.has_objective());
    }

    #[test]
    fn any_text_counts_as_objective() {
        let mut state = WizardState::default();
        state.finalize.objective = "Expand".into();
        assert!(state.has_objective());
    }
}
