//! Fixed report catalog
//!
//! Defines the closed enumerations a report request is built from:
//! - Commissioning organisation type
//! - Base report tiers (market analysis and partner finding families)
//! - Add-on option modules

use crate::error::ParseCatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of organisation commissioning the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    /// Government body
    #[default]
    Government,
    /// Any other organisation
    NonGovernment,
}

impl UserType {
    /// All user types in display order
    pub const ALL: [UserType; 2] = [UserType::Government, UserType::NonGovernment];

    /// Stable identifier
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Government => "government",
            Self::NonGovernment => "non-government",
        }
    }

    /// Human-facing label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Government => "Government Body",
            Self::NonGovernment => "Non-Government Org",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCatalogError::new("user type", s))
    }
}

/// Product family a tier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TierFamily {
    /// Regional market analysis
    MarketAnalysis,
    /// Foreign partner matchmaking
    PartnerFinding,
}

/// Base report tier
///
/// Chosen once per session; determines report depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Tier A
    EconomicSnapshot,
    /// Tier B
    CompetitiveLandscape,
    /// Tier C
    InvestmentDeepDive,
    /// Tier 1
    PartnershipBlueprint,
    /// Tier 2
    TransformationSimulator,
    /// Tier 4
    ValuationRisk,
}

impl Tier {
    /// Every tier, market analysis family first
    pub const ALL: [Tier; 6] = [
        Tier::EconomicSnapshot,
        Tier::CompetitiveLandscape,
        Tier::InvestmentDeepDive,
        Tier::PartnershipBlueprint,
        Tier::TransformationSimulator,
        Tier::ValuationRisk,
    ];

    /// Stable identifier
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::EconomicSnapshot => "economic-snapshot",
            Self::CompetitiveLandscape => "competitive-landscape",
            Self::InvestmentDeepDive => "investment-deep-dive",
            Self::PartnershipBlueprint => "partnership-blueprint",
            Self::TransformationSimulator => "transformation-simulator",
            Self::ValuationRisk => "valuation-risk",
        }
    }

    /// Display name as shown on the tier cards
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EconomicSnapshot => "Tier A: Economic Snapshot",
            Self::CompetitiveLandscape => "Tier B: Competitive Landscape",
            Self::InvestmentDeepDive => "Tier C: Investment Deep-Dive",
            Self::PartnershipBlueprint => "Tier 1: Partnership Blueprint",
            Self::TransformationSimulator => "Tier 2: Transformation Simulator",
            Self::ValuationRisk => "Tier 4: Valuation & Risk Assessment",
        }
    }

    #[inline]
    #[must_use]
    pub fn family(self) -> TierFamily {
        match self {
            Self::EconomicSnapshot | Self::CompetitiveLandscape | Self::InvestmentDeepDive => {
                TierFamily::MarketAnalysis
            }
            Self::PartnershipBlueprint | Self::TransformationSimulator | Self::ValuationRisk => {
                TierFamily::PartnerFinding
            }
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tier {
    type Err = ParseCatalogError;

    /// Accepts either the identifier or the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(needle) || t.name() == needle)
            .ok_or_else(|| ParseCatalogError::new("tier", s))
    }
}

/// Optional add-on analysis module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportOption {
    Geopolitical,
    Talent,
    Infrastructure,
    Esg,
    Reputation,
}

impl ReportOption {
    /// Every option in card order
    pub const ALL: [ReportOption; 5] = [
        ReportOption::Geopolitical,
        ReportOption::Talent,
        ReportOption::Infrastructure,
        ReportOption::Esg,
        ReportOption::Reputation,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Geopolitical => "geopolitical",
            Self::Talent => "talent",
            Self::Infrastructure => "infrastructure",
            Self::Esg => "esg",
            Self::Reputation => "reputation",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Geopolitical => "Geopolitical Risk Forecast",
            Self::Talent => "Talent Pool Analysis",
            Self::Infrastructure => "Infrastructure Readiness Audit",
            Self::Esg => "ESG Compliance Scan",
            Self::Reputation => "Reputation Intelligence",
        }
    }
}

impl fmt::Display for ReportOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ReportOption {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCatalogError::new("report option", s))
    }
}
