//! Wizard controller
//!
//! Owns the step position and every collected field. Mutations are
//! synchronous; the only asynchronous work (the regional city lookup) is
//! returned to the caller as a [`PendingLookup`] to run, and its outcome is
//! fed back through [`WizardController::apply_lookup`].

use crate::assembler::assemble;
use crate::config::WizardConfig;
use crate::error::WizardError;
use crate::options::{
    default_department, departments_for, COMPANY_SIZES, COUNTRIES, INDUSTRIES, KEY_TECHNOLOGIES,
    TARGET_MARKETS,
};
use crate::state::WizardState;
use crate::step::{validate_advance, Step};
use nexus_lookup::{
    LookupEffect, LookupOutcome, PendingLookup, PlaceResolver, RegionalLookupResolver,
    RegionalLookupState,
};
use nexus_report::{ReportOption, ReportRequest, Tier, UserType};
use std::sync::Arc;

/// Reasons submission is currently disabled
const NOT_ON_FINAL_STEP: &str = "not on the final step";
const OBJECTIVE_EMPTY: &str = "objective is empty";
const CITY_LOADING: &str = "regional city lookup still in progress";

fn check_choice(
    field: &'static str,
    value: String,
    choices: &[&str],
) -> Result<String, WizardError> {
    if choices.contains(&value.as_str()) {
        Ok(value)
    } else {
        Err(WizardError::InvalidChoice { field, value })
    }
}

fn check_choices<I, S>(
    field: &'static str,
    values: I,
    choices: &[&str],
) -> Result<Vec<String>, WizardError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|value| check_choice(field, value.into(), choices))
        .collect()
}

/// Single-owner controller for one wizard session
#[derive(Debug)]
pub struct WizardController {
    state: WizardState,
    lookup: RegionalLookupResolver,
}

impl WizardController {
    /// Create controller with fresh state
    #[must_use]
    pub fn new(config: &WizardConfig, places: Arc<dyn PlaceResolver>) -> Self {
        let lookup = RegionalLookupResolver::new(places)
            .with_debounce(config.debounce())
            .with_max_candidates(config.max_candidates);

        Self {
            state: WizardState::new(config),
            lookup,
        }
    }

    /// Issue the lookup for the default target country
    #[must_use = "the lookup stays loading until the pending lookup is run and applied"]
    pub fn start(&mut self) -> Option<PendingLookup> {
        self.refresh_lookup()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn lookup_state(&self) -> &RegionalLookupState {
        self.lookup.state()
    }

    #[inline]
    #[must_use]
    pub fn current_step(&self) -> Step {
        self.state.current_step
    }

    // --- Step 1: profile ---

    /// Switch organisation type; department resets to the type's first entry
    pub fn select_user_type(&mut self, user_type: UserType) {
        let profile = &mut self.state.profile;
        profile.user_type = user_type;
        profile.user_department = default_department(user_type).to_string();
        profile.is_manual_department = false;
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.state.profile.user_name = name.into();
    }

    /// Set home country from the country list
    ///
    /// # Errors
    /// `WizardError::InvalidChoice` for an unlisted country
    pub fn set_user_country(&mut self, country: impl Into<String>) -> Result<(), WizardError> {
        self.state.profile.user_country = check_choice("country", country.into(), COUNTRIES)?;
        Ok(())
    }

    /// Set department; outside manual mode it must come from the type's list
    ///
    /// # Errors
    /// `WizardError::InvalidChoice` for an unlisted department
    pub fn set_user_department(&mut self, department: impl Into<String>) -> Result<(), WizardError> {
        let department = department.into();
        let profile = &mut self.state.profile;
        if !profile.is_manual_department
            && !departments_for(profile.user_type).contains(&department.as_str())
        {
            return Err(WizardError::InvalidChoice {
                field: "department",
                value: department,
            });
        }
        profile.user_department = department;
        Ok(())
    }

    pub fn toggle_manual_department(&mut self, manual: bool) {
        self.state.profile.is_manual_department = manual;
    }

    // --- Step 2: scope ---

    /// Change target country
    ///
    /// Free text, stored trimmed. A new country re-enables automatic lookup
    /// and triggers it. Setting the same country again is a no-op.
    #[must_use = "the lookup stays loading until the pending lookup is run and applied"]
    pub fn set_target_country(&mut self, country: impl Into<String>) -> Option<PendingLookup> {
        let country = country.into().trim().to_string();
        if country == self.state.scope.target_country {
            return None;
        }
        self.state.scope.target_country = country;
        self.state.scope.is_manual_city = false;
        self.refresh_lookup()
    }

    /// Switch city entry mode
    ///
    /// Entering manual mode cancels any pending lookup; leaving it triggers
    /// a fresh one for the current country.
    #[must_use = "the lookup stays loading until the pending lookup is run and applied"]
    pub fn toggle_manual_city(&mut self, manual: bool) -> Option<PendingLookup> {
        if manual == self.state.scope.is_manual_city {
            return None;
        }
        self.state.scope.is_manual_city = manual;
        self.refresh_lookup()
    }

    /// Set city; outside manual mode it must be a current candidate
    ///
    /// # Errors
    /// `WizardError::InvalidChoice` if not among the resolved candidates
    pub fn set_regional_city(&mut self, city: impl Into<String>) -> Result<(), WizardError> {
        let city = city.into();
        if !self.state.scope.is_manual_city && !self.lookup.state().contains(&city) {
            return Err(WizardError::InvalidChoice {
                field: "regional city",
                value: city,
            });
        }
        self.state.scope.regional_city = city;
        Ok(())
    }

    /// Select an industry from the list; free text goes through
    /// [`Self::set_manual_industry_text`]
    ///
    /// # Errors
    /// `WizardError::InvalidChoice` for an unlisted industry
    pub fn set_industry(&mut self, industry: impl Into<String>) -> Result<(), WizardError> {
        self.state.scope.industry = check_choice("industry", industry.into(), INDUSTRIES)?;
        Ok(())
    }

    pub fn set_manual_industry_text(&mut self, text: impl Into<String>) {
        self.state.scope.manual_industry_text = text.into();
    }

    pub fn toggle_manual_industry(&mut self, manual: bool) {
        self.state.scope.is_manual_industry = manual;
    }

    /// Feed a finished lookup back into the form
    ///
    /// Stale outcomes change nothing.
    pub fn apply_lookup(&mut self, outcome: LookupOutcome) -> LookupEffect {
        let effect = self.lookup.apply(outcome);
        match &effect {
            LookupEffect::Select(city) => {
                self.state.scope.regional_city.clone_from(city);
            }
            LookupEffect::ForceManual(_) => {
                self.state.scope.is_manual_city = true;
                self.state.scope.regional_city.clear();
            }
            LookupEffect::Discarded => {}
        }
        effect
    }

    fn refresh_lookup(&mut self) -> Option<PendingLookup> {
        self.state.scope.regional_city.clear();

        let country = &self.state.scope.target_country;
        if self.state.scope.is_manual_city || country.is_empty() {
            self.lookup.cancel();
            return None;
        }
        Some(self.lookup.request(country))
    }

    // --- Step 3 / 4: tier and options ---

    /// Choose the base tier and jump straight to the options step
    pub fn select_tier(&mut self, tier: Tier) {
        tracing::debug!("Tier selected: {}", tier.id());
        self.state.tier = Some(tier);
        self.state.current_step = Step::OPTIONS;
    }

    /// Add the option if absent, remove it if present
    pub fn toggle_option(&mut self, option: ReportOption) {
        if !self.state.selected_options.shift_remove(&option) {
            self.state.selected_options.insert(option);
        }
    }

    // --- Step 5: finalize ---

    pub fn set_objective(&mut self, objective: impl Into<String>) {
        self.state.finalize.objective = objective.into();
    }

    /// # Errors
    /// `WizardError::InvalidChoice` for an unlisted size
    pub fn set_company_size(&mut self, size: impl Into<String>) -> Result<(), WizardError> {
        self.state.finalize.company_size =
            check_choice("company size", size.into(), COMPANY_SIZES)?;
        Ok(())
    }

    /// Replace the target market selection
    ///
    /// # Errors
    /// `WizardError::InvalidChoice` naming the first unlisted market; the
    /// previous selection is kept
    pub fn set_target_markets<I, S>(&mut self, markets: I) -> Result<(), WizardError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markets = check_choices("target market", markets, TARGET_MARKETS)?;
        self.state.finalize.target_markets = markets.into_iter().collect();
        Ok(())
    }

    /// Replace the key technology selection
    ///
    /// Free-text technologies go through [`Self::set_manual_tech_text`].
    ///
    /// # Errors
    /// `WizardError::InvalidChoice` naming the first unlisted technology;
    /// the previous selection is kept
    pub fn set_key_technologies<I, S>(&mut self, technologies: I) -> Result<(), WizardError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let technologies = check_choices("key technology", technologies, KEY_TECHNOLOGIES)?;
        self.state.finalize.key_technologies = technologies.into_iter().collect();
        Ok(())
    }

    pub fn set_manual_tech_text(&mut self, text: impl Into<String>) {
        self.state.finalize.manual_tech_text = text.into();
    }

    pub fn toggle_manual_tech(&mut self, manual: bool) {
        self.state.finalize.is_manual_tech = manual;
    }

    // --- Navigation ---

    /// Move forward one step, capped at the last step
    ///
    /// # Errors
    /// `WizardError::StepGated` on the tier step while no tier is selected
    pub fn advance_step(&mut self) -> Result<Step, WizardError> {
        let from = self.state.current_step;
        let to = validate_advance(from, self.state.tier)?;
        self.state.current_step = to;
        tracing::debug!("Advanced from step {} to {}", from, to);
        Ok(to)
    }

    /// Move back one step, floored at the first step
    pub fn retreat_step(&mut self) -> Step {
        self.state.current_step = self.state.current_step.prev();
        self.state.current_step
    }

    // --- Submission ---

    /// Reasons the submit control is disabled (empty when enabled)
    #[must_use]
    pub fn submission_blockers(&self) -> Vec<&'static str> {
        let mut blockers = Vec::new();
        if !self.state.current_step.is_last() {
            blockers.push(NOT_ON_FINAL_STEP);
        }
        if !self.state.has_objective() {
            blockers.push(OBJECTIVE_EMPTY);
        }
        if !self.state.scope.is_manual_city && self.lookup.state().is_loading() {
            blockers.push(CITY_LOADING);
        }
        blockers
    }

    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submission_blockers().is_empty()
    }

    /// Assemble the request for hand-off to report generation
    ///
    /// Does not change the current step on success.
    ///
    /// # Errors
    /// - `WizardError::MissingTier` if no tier is selected; the wizard is
    ///   reset to step 1
    /// - `WizardError::NotReady` while the submit control is disabled
    /// - `WizardError::Report` if assembly fails
    pub fn submit(&mut self) -> Result<ReportRequest, WizardError> {
        if self.state.tier.is_none() {
            tracing::error!("Submission attempted without a tier; restarting wizard");
            self.state.current_step = Step::FIRST;
            return Err(WizardError::MissingTier);
        }

        let blockers = self.submission_blockers();
        if !blockers.is_empty() {
            return Err(WizardError::NotReady(blockers));
        }

        let request = assemble(&self.state)?;
        tracing::info!(
            "Submitting report request: tier={}, region={}",
            request.tier().id(),
            request.region()
        );
        Ok(request)
    }
}
