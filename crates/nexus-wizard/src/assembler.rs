//! Report request assembly
//!
//! Pure transform from [`WizardState`] to [`ReportRequest`]. Only the tier
//! is checked; field completeness is the caller's gating concern.

use crate::state::{FinalizeFields, ScopeFields, WizardState};
use nexus_report::{ReportDraft, ReportError, ReportRequest};

/// Build the immutable request for a submission
///
/// # Errors
/// `ReportError::Precondition` if no tier is selected
pub fn assemble(state: &WizardState) -> Result<ReportRequest, ReportError> {
    let draft = ReportDraft {
        user_name: state.profile.user_name.clone(),
        user_type: state.profile.user_type,
        user_department: state.profile.user_department.clone(),
        user_country: state.profile.user_country.clone(),
        custom_objective: state.finalize.objective.clone(),
        industry: resolve_industry(&state.scope),
        region: format_region(&state.scope),
        tier: state.tier,
        company_size: state.finalize.company_size.clone(),
        key_technologies: resolve_key_technologies(&state.finalize),
        target_markets: state.finalize.target_markets.iter().cloned().collect(),
        selected_options: state.selected_options.iter().copied().collect(),
    };
    ReportRequest::try_from(draft)
}

/// Manual text when in manual mode, otherwise the selected industry
#[must_use]
pub fn resolve_industry(scope: &ScopeFields) -> String {
    if scope.is_manual_industry {
        scope.manual_industry_text.clone()
    } else {
        scope.industry.clone()
    }
}

/// `"<city>, <country>"`
///
/// The city field holds either the typed or the selected value.
#[must_use]
pub fn format_region(scope: &ScopeFields) -> String {
    format!("{}, {}", scope.regional_city, scope.target_country)
}

/// Parsed manual list when in manual mode, otherwise the selection in order
#[must_use]
pub fn resolve_key_technologies(finalize: &FinalizeFields) -> Vec<String> {
    if finalize.is_manual_tech {
        split_manual_list(&finalize.manual_tech_text)
    } else {
        finalize.key_technologies.iter().cloned().collect()
    }
}

/// Comma-split, trimmed, empties dropped; order and duplicates kept
#[must_use]
pub fn split_manual_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nexus_report::{ReportOption, Tier};
    use pretty_assertions::assert_eq;

    fn ready_state() -> WizardState {
        let mut state = WizardState::default();
        state.tier = Some(Tier::CompetitiveLandscape);
        state.scope.regional_city = "Davao City".into();
        state.finalize.objective = "Attract a solar partner".into();
        state
    }

    #[test]
    fn manual_industry_passes_through_exactly() {
        let mut state = ready_state();
        state.scope.is_manual_industry = true;
        state.scope.manual_industry_text = "Quantum Sensing".into();

        assert_eq!(assemble(&state).unwrap().industry(), "Quantum Sensing");
    }

    #[test]
    fn selected_industry_used_outside_manual_mode() {
        let mut state = ready_state();
        state.scope.manual_industry_text = "ignored".into();

        assert_eq!(assemble(&state).unwrap().industry(), "Renewable Energy");
    }

    #[test]
    fn region_joins_city_and_country() {
        let request = assemble(&ready_state()).unwrap();
        assert_eq!(request.region(), "Davao City, Philippines");
    }

    #[test]
    fn manual_tech_list_keeps_order_and_duplicates() {
        let mut state = ready_state();
        state.finalize.is_manual_tech = true;
        state.finalize.manual_tech_text = "AI, , Robotics ,AI".into();

        assert_eq!(
            assemble(&state).unwrap().key_technologies(),
            ["AI", "Robotics", "AI"]
        );
    }

    #[test]
    fn selected_tech_in_insertion_order() {
        let mut state = ready_state();
        state.finalize.key_technologies.insert("Robotics & Automation".into());
        state.finalize.key_technologies.insert("Blockchain".into());
        state.finalize.manual_tech_text = "ignored".into();

        assert_eq!(
            assemble(&state).unwrap().key_technologies(),
            ["Robotics & Automation", "Blockchain"]
        );
    }

    #[test]
    fn other_fields_pass_through() {
        let mut state = ready_state();
        state.profile.user_name = "Jane Doe".into();
        state.selected_options.insert(ReportOption::Esg);
        state.selected_options.insert(ReportOption::Geopolitical);
        state.finalize.target_markets.insert("ASEAN".into());

        let request = assemble(&state).unwrap();
        assert_eq!(request.user_name(), "Jane Doe");
        assert_eq!(request.custom_objective(), "Attract a solar partner");
        assert_eq!(request.tier(), Tier::CompetitiveLandscape);
        assert_eq!(
            request.selected_options(),
            [ReportOption::Esg, ReportOption::Geopolitical]
        );
        assert_eq!(request.target_markets(), ["ASEAN"]);
        assert_eq!(request.company_size(), "Any Size");
    }

    #[test]
    fn missing_tier_is_precondition_error() {
        let mut state = ready_state();
        state.tier = None;
        assert!(matches!(assemble(&state), Err(ReportError::Precondition(_))));
    }

    #[test]
    fn split_handles_blank_text() {
        assert!(split_manual_list("").is_empty());
        assert!(split_manual_list(" , ,").is_empty());
    }
}
