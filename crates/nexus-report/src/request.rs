//! Report request types
//!
//! A [`ReportDraft`] is the mutable, possibly incomplete bag of resolved
//! field values. Converting it into a [`ReportRequest`] checks the one
//! load-bearing precondition (a tier is set) and freezes the result.

use crate::catalog::{ReportOption, Tier, UserType};
use crate::error::ReportError;
use serde::{Deserialize, Serialize};

/// Resolved field values awaiting the tier check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub user_name: String,
    pub user_type: UserType,
    pub user_department: String,
    pub user_country: String,
    pub custom_objective: String,
    pub industry: String,
    pub region: String,
    pub tier: Option<Tier>,
    pub company_size: String,
    pub key_technologies: Vec<String>,
    pub target_markets: Vec<String>,
    pub selected_options: Vec<ReportOption>,
}

/// Immutable report request handed to the generation collaborator
///
/// Fields are only readable; a new request is built per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    user_name: String,
    user_type: UserType,
    user_department: String,
    user_country: String,
    custom_objective: String,
    industry: String,
    region: String,
    tier: Tier,
    company_size: String,
    key_technologies: Vec<String>,
    target_markets: Vec<String>,
    selected_options: Vec<ReportOption>,
}

impl TryFrom<ReportDraft> for ReportRequest {
    type Error = ReportError;

    fn try_from(draft: ReportDraft) -> Result<Self, Self::Error> {
        let tier = draft
            .tier
            .ok_or_else(|| ReportError::Precondition("a report tier must be selected".into()))?;

        Ok(Self {
            user_name: draft.user_name,
            user_type: draft.user_type,
            user_department: draft.user_department,
            user_country: draft.user_country,
            custom_objective: draft.custom_objective,
            industry: draft.industry,
            region: draft.region,
            tier,
            company_size: draft.company_size,
            key_technologies: draft.key_technologies,
            target_markets: draft.target_markets,
            selected_options: draft.selected_options,
        })
    }
}

impl ReportRequest {
    #[inline]
    #[must_use]
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    #[inline]
    #[must_use]
    pub fn user_type(&self) -> UserType {
        self.user_type
    }

    #[inline]
    #[must_use]
    pub fn user_department(&self) -> &str {
        &self.user_department
    }

    #[inline]
    #[must_use]
    pub fn user_country(&self) -> &str {
        &self.user_country
    }

    /// Free-text strategic objective
    #[inline]
    #[must_use]
    pub fn custom_objective(&self) -> &str {
        &self.custom_objective
    }

    #[inline]
    #[must_use]
    pub fn industry(&self) -> &str {
        &self.industry
    }

    /// `"<city>, <country>"`
    #[inline]
    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    #[inline]
    #[must_use]
    pub fn company_size(&self) -> &str {
        &self.company_size
    }

    #[inline]
    #[must_use]
    pub fn key_technologies(&self) -> &[String] {
        &self.key_technologies
    }

    #[inline]
    #[must_use]
    pub fn target_markets(&self) -> &[String] {
        &self.target_markets
    }

    #[inline]
    #[must_use]
    pub fn selected_options(&self) -> &[ReportOption] {
        &self.selected_options
    }

    /// Whether the partner profile section applies
    #[inline]
    #[must_use]
    pub fn has_partner_profile(&self) -> bool {
        !self.key_technologies.is_empty()
    }
}
