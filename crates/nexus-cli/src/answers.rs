//! Answers file replay
//!
//! An answers file holds what a user would enter on each wizard step. It is
//! replayed through a [`WizardSession`] exactly as the form would drive it,
//! so every gate and dependent-field rule applies.

use anyhow::{bail, Context, Result};
use nexus_lookup::LookupEffect;
use nexus_report::{ReportOption, Tier, UserType};
use nexus_wizard::WizardSession;
use serde::Deserialize;
use std::path::Path;

/// Form answers, one section per concern
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Answers {
    pub(crate) user_type: UserType,
    pub(crate) user_name: String,
    /// Listed department; typed verbatim if `manual_department` is set
    pub(crate) department: Option<String>,
    pub(crate) manual_department: bool,
    pub(crate) user_country: Option<String>,

    pub(crate) target_country: Option<String>,
    /// City to pick; entered manually when the lookup yields nothing
    pub(crate) city: Option<String>,
    pub(crate) manual_city: bool,
    pub(crate) industry: Option<String>,
    pub(crate) manual_industry: Option<String>,

    pub(crate) tier: String,
    pub(crate) options: Vec<ReportOption>,

    pub(crate) objective: String,
    pub(crate) company_size: Option<String>,
    pub(crate) target_markets: Vec<String>,
    pub(crate) key_technologies: Vec<String>,
    /// Comma-separated list; replaces `key_technologies` when present
    pub(crate) manual_technologies: Option<String>,
}

impl Answers {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading answers file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing answers file {}", path.display()))
    }
}

/// Drive `session` through all five steps
///
/// Leaves the session on the final step, ready to submit.
pub(crate) async fn replay(answers: &Answers, session: &mut WizardSession) -> Result<()> {
    session.settle_lookups().await;

    // Step 1
    let wizard = session.controller_mut();
    wizard.select_user_type(answers.user_type);
    wizard.set_user_name(answers.user_name.as_str());
    if let Some(department) = &answers.department {
        wizard.toggle_manual_department(answers.manual_department);
        wizard.set_user_department(department.as_str())?;
    }
    if let Some(country) = &answers.user_country {
        wizard.set_user_country(country.as_str())?;
    }
    wizard.advance_step()?;

    // Step 2
    if let Some(country) = &answers.target_country {
        session.set_target_country(country.as_str());
    }
    if answers.manual_city {
        session.toggle_manual_city(true);
    }
    if let Some(LookupEffect::ForceManual(reason)) = session.settle_lookups().await {
        tracing::warn!("City lookup fell back to manual entry: {}", reason);
    }

    let wizard = session.controller_mut();
    match &answers.city {
        Some(city) => wizard.set_regional_city(city.as_str())?,
        None if wizard.state().scope.regional_city.is_empty() => {
            bail!(
                "no city could be selected for {}; add `city` to the answers file",
                wizard.state().scope.target_country
            );
        }
        None => {}
    }
    if let Some(industry) = &answers.industry {
        wizard.set_industry(industry.as_str())?;
    }
    if let Some(text) = &answers.manual_industry {
        wizard.toggle_manual_industry(true);
        wizard.set_manual_industry_text(text.as_str());
    }
    wizard.advance_step()?;

    // Step 3 jumps straight to step 4
    let tier: Tier = answers.tier.parse()?;
    wizard.select_tier(tier);

    // Step 4
    for option in &answers.options {
        wizard.toggle_option(*option);
    }
    wizard.advance_step()?;

    // Step 5
    wizard.set_objective(answers.objective.as_str());
    if let Some(size) = &answers.company_size {
        wizard.set_company_size(size.as_str())?;
    }
    wizard.set_target_markets(answers.target_markets.iter().cloned())?;
    wizard.set_key_technologies(answers.key_technologies.iter().cloned())?;
    if let Some(text) = &answers.manual_technologies {
        wizard.toggle_manual_tech(true);
        wizard.set_manual_tech_text(text.as_str());
    }

    Ok(())
}
