//! Cache-fronted place resolution
//!
//! Policy:
//! 1. A fresh cache entry is returned without contacting the provider
//! 2. Otherwise the provider is asked and a successful answer is cached
//! 3. If the provider fails, any cached entry is served regardless of age
//! 4. With nothing cached, the lookup fails with a readable cause
//!
//! Cache read and write failures are logged and otherwise ignored.

use crate::cache::PlaceCache;
use crate::error::LookupError;
use crate::service::PlaceResolver;
use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;

/// Default freshness window for city lists (24 hours)
pub const DEFAULT_CITY_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache key for a country's place list
#[inline]
#[must_use]
pub fn cache_key(country: &str) -> String {
    format!("cities_cache_{country}")
}

/// Place resolver that consults a cache before a provider
#[derive(Debug)]
pub struct CachedPlaceResolver<R, C> {
    inner: R,
    cache: C,
    ttl: Duration,
}

impl<R, C> CachedPlaceResolver<R, C>
where
    R: PlaceResolver,
    C: PlaceCache,
{
    /// Wrap `inner` with `cache` using the default TTL
    #[inline]
    #[must_use]
    pub fn new(inner: R, cache: C) -> Self {
        Self {
            inner,
            cache,
            ttl: DEFAULT_CITY_TTL,
        }
    }

    /// With custom freshness window
    #[inline]
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Freshness window in use
    #[inline]
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Access the cache backend
    #[inline]
    #[must_use]
    pub fn cache(&self) -> &C {
        &self.cache
    }

    async fn fallback(&self, key: &str) -> Option<Vec<String>> {
        match self.cache.get(key).await {
            Ok(Some(entry)) => Some(entry.places),
            Ok(None) => None,
            Err(e) => {
                tracing::error!("Failed to read from fallback city cache: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl<R, C> PlaceResolver for CachedPlaceResolver<R, C>
where
    R: PlaceResolver,
    C: PlaceCache,
{
    async fn resolve(&self, country: &str) -> Result<Vec<String>, LookupError> {
        let key = cache_key(country);

        match self.cache.get(&key).await {
            Ok(Some(entry)) if entry.is_fresh_at(Utc::now()) => {
                tracing::debug!("City cache hit for {}", country);
                return Ok(entry.places);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Could not read city cache, proceeding with lookup: {}", e);
            }
        }

        match self.inner.resolve(country).await {
            Ok(places) => {
                if let Err(e) = self.cache.set(&key, places.clone(), self.ttl).await {
                    tracing::warn!("Could not write city cache: {}", e);
                }
                Ok(places)
            }
            Err(err) => {
                tracing::warn!(
                    "Lookup failed for cities in {}, trying fallback cache: {}",
                    country,
                    err
                );
                self.fallback(&key)
                    .await
                    .ok_or_else(|| LookupError::unavailable(country))
            }
        }
    }
}
