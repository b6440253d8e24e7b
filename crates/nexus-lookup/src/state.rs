//! Regional lookup UI state

use serde::{Deserialize, Serialize};

/// Lifecycle of the current lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupStatus {
    /// No lookup requested (manual entry or no country)
    #[default]
    Idle,
    /// Waiting for debounce or provider
    Loading,
    /// Candidates available
    Success,
    /// Lookup failed or came back empty
    Error,
}

/// State slice owned by the regional lookup resolver
///
/// `request_epoch` is bumped on every new request and every cancellation;
/// only an outcome carrying the current epoch may change this state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalLookupState {
    pub status: LookupStatus,
    /// Country the current epoch was issued for
    pub country: String,
    pub candidates: Vec<String>,
    pub error_message: Option<String>,
    pub request_epoch: u64,
}

impl RegionalLookupState {
    #[inline]
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == LookupStatus::Loading
    }

    /// Whether `place` is one of the current candidates
    #[inline]
    #[must_use]
    pub fn contains(&self, place: &str) -> bool {
        self.candidates.iter().any(|c| c == place)
    }

    pub(crate) fn begin(&mut self, epoch: u64, country: &str) {
        self.request_epoch = epoch;
        self.status = LookupStatus::Loading;
        self.country = country.to_string();
        self.candidates.clear();
        self.error_message = None;
    }

    pub(crate) fn reset(&mut self, epoch: u64) {
        self.request_epoch = epoch;
        self.status = LookupStatus::Idle;
        self.country.clear();
        self.candidates.clear();
        self.error_message = None;
    }

    pub(crate) fn succeed(&mut self, candidates: Vec<String>) {
        self.status = LookupStatus::Success;
        self.candidates = candidates;
        self.error_message = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = LookupStatus::Error;
        self.candidates.clear();
        self.error_message = Some(message);
    }
}
