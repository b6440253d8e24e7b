//! Option lists backing the wizard's select fields

use nexus_report::UserType;

pub const GOVERNMENT_DEPARTMENTS: &[&str] = &[
    "Department of Trade & Investment",
    "Regional Development Agency",
    "Economic Development Office",
    "Ministry of Foreign Affairs",
    "Local Government Unit",
];

pub const NON_GOV_ORG_TYPES: &[&str] = &[
    "Private Company",
    "Industry Association",
    "Academic Institution",
    "Non-Profit Organization",
    "Investment Fund",
];

pub const INDUSTRIES: &[&str] = &[
    "Advanced Manufacturing",
    "Agriculture & AgriTech",
    "Automotive & Electric Vehicles",
    "Biotechnology & Life Sciences",
    "Renewable Energy",
    "Information & Communications Technology",
    "Logistics & Supply Chain",
    "Mining & Resources",
    "Tourism & Hospitality",
    "Financial Services",
];

pub const COUNTRIES: &[&str] = &[
    "Australia",
    "Brazil",
    "Canada",
    "Chile",
    "Germany",
    "India",
    "Indonesia",
    "Japan",
    "Kenya",
    "Malaysia",
    "Mexico",
    "New Zealand",
    "Philippines",
    "Singapore",
    "South Africa",
    "South Korea",
    "Thailand",
    "United Kingdom",
    "United States",
    "Vietnam",
];

pub const COMPANY_SIZES: &[&str] = &[
    "Any Size",
    "Startup (1-50 employees)",
    "SME (51-250 employees)",
    "Large Enterprise (250+ employees)",
];

pub const KEY_TECHNOLOGIES: &[&str] = &[
    "AI & Machine Learning",
    "Robotics & Automation",
    "Internet of Things",
    "Blockchain",
    "Renewable Energy Systems",
    "Biotechnology",
    "Advanced Materials",
    "Precision Agriculture",
];

pub const TARGET_MARKETS: &[&str] = &[
    "ASEAN",
    "North America",
    "European Union",
    "East Asia",
    "South Asia",
    "Middle East",
    "Latin America",
    "Africa",
    "Oceania",
];

/// Department choices for a user type
#[inline]
#[must_use]
pub fn departments_for(user_type: UserType) -> &'static [&'static str] {
    match user_type {
        UserType::Government => GOVERNMENT_DEPARTMENTS,
        UserType::NonGovernment => NON_GOV_ORG_TYPES,
    }
}

/// First (canonical) department for a user type
#[inline]
#[must_use]
pub fn default_department(user_type: UserType) -> &'static str {
    departments_for(user_type)[0]
}
