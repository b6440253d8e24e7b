//! Place resolution seam

use crate::error::LookupError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves a country name into an ordered list of place names
///
/// Implementations may talk to a provider, a cache, or a fixed table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceResolver: Send + Sync {
    /// Resolve candidate places for `country`
    ///
    /// # Errors
    /// `LookupError` with a human-readable cause
    async fn resolve(&self, country: &str) -> Result<Vec<String>, LookupError>;
}

#[async_trait]
impl<T: PlaceResolver + ?Sized> PlaceResolver for Arc<T> {
    async fn resolve(&self, country: &str) -> Result<Vec<String>, LookupError> {
        (**self).resolve(country).await
    }
}

/// Fixed country → places table
///
/// Unknown countries resolve to an empty list, which the wizard treats
/// as "enter manually".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticPlaceResolver {
    places: HashMap<String, Vec<String>>,
}

impl StaticPlaceResolver {
    /// Create empty table
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add places for a country
    #[must_use]
    pub fn with_country<I, S>(mut self, country: impl Into<String>, places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.places
            .insert(country.into(), places.into_iter().map(Into::into).collect());
        self
    }

    /// Number of countries in the table
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[async_trait]
impl PlaceResolver for StaticPlaceResolver {
    async fn resolve(&self, country: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.places.get(country).cloned().unwrap_or_default())
    }
}
