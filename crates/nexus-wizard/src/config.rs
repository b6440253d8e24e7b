//! Wizard configuration
//!
//! All fields have defaults; a TOML file only needs the keys it changes.

use crate::error::WizardError;
use crate::options::INDUSTRIES;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Wizard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Quiescence window before a city lookup is issued
    pub debounce_ms: u64,
    /// Freshness window for cached city lists
    pub city_cache_ttl_secs: u64,
    /// Maximum countries kept in the city cache
    pub city_cache_capacity: u64,
    /// Maximum selectable city candidates
    pub max_candidates: usize,
    pub default_user_country: String,
    pub default_target_country: String,
    pub default_industry: String,
}

impl WizardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// `WizardError::Config` on malformed TOML or invalid values
    pub fn from_toml_str(text: &str) -> Result<Self, WizardError> {
        let config: Self =
            toml::from_str(text).map_err(|e| WizardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// `WizardError::Config` if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WizardError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| WizardError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `WizardError::Config` naming the offending key
    pub fn validate(&self) -> Result<(), WizardError> {
        if self.max_candidates == 0 {
            return Err(WizardError::Config(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        if self.city_cache_capacity == 0 {
            return Err(WizardError::Config(
                "city_cache_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// With debounce window
    #[inline]
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce_ms = u64::try_from(debounce.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// With default target country
    #[inline]
    #[must_use]
    pub fn with_target_country(mut self, country: impl Into<String>) -> Self {
        self.default_target_country = country.into();
        self
    }

    /// With candidate bound
    #[inline]
    #[must_use]
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    #[inline]
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[inline]
    #[must_use]
    pub fn city_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.city_cache_ttl_secs)
    }
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            city_cache_ttl_secs: 24 * 60 * 60,
            city_cache_capacity: 512,
            max_candidates: 15,
            default_user_country: "Australia".to_string(),
            default_target_country: "Philippines".to_string(),
            default_industry: INDUSTRIES[4].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_form_defaults() {
        let config = WizardConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(100));
        assert_eq!(config.city_cache_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.default_target_country, "Philippines");
        assert_eq!(config.default_industry, "Renewable Energy");
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = WizardConfig::from_toml_str("debounce_ms = 250\nmax_candidates = 5\n").unwrap();
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.max_candidates, 5);
        assert_eq!(config.default_user_country, "Australia");
    }

    #[test]
    fn zero_candidates_rejected() {
        let err = WizardConfig::from_toml_str("max_candidates = 0").unwrap_err();
        assert!(matches!(err, WizardError::Config(_)));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(WizardConfig::from_toml_str("debounce_ms = \"soon\"").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_target_country = \"Vietnam\"").unwrap();

        let config = WizardConfig::load(file.path()).unwrap();
        assert_eq!(config.default_target_country, "Vietnam");
    }

    #[test]
    fn load_missing_file_is_config_error() {
        let err = WizardConfig::load("/nonexistent/nexus.toml").unwrap_err();
        assert!(matches!(err, WizardError::Config(_)));
    }

    #[test]
    fn builder_sets_debounce() {
        let config = WizardConfig::new().with_debounce(Duration::from_millis(40));
        assert_eq!(config.debounce_ms, 40);
    }
}
