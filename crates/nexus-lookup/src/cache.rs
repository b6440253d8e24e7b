//! Place list cache
//!
//! The cache is an injected interface so the lookup policy can be tested
//! without a real storage backend. Entries keep their expiry instead of
//! being evicted on it: an expired entry is still useful as a fallback
//! when the provider is down.

use crate::error::CacheError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cached place list with its freshness window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Resolved places
    pub places: Vec<String>,
    /// When the entry was written
    pub stored_at: DateTime<Utc>,
    /// When the entry stops being fresh
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Create entry stored at `stored_at`, fresh for `ttl`
    #[must_use]
    pub fn new(places: Vec<String>, stored_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| stored_at.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            places,
            stored_at,
            expires_at,
        }
    }

    /// Check freshness at `now`
    #[inline]
    #[must_use]
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Key-value store for place lists
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceCache: Send + Sync {
    /// Read entry regardless of freshness
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError>;

    /// Store places fresh for `ttl`
    async fn set(&self, key: &str, places: Vec<String>, ttl: Duration) -> Result<(), CacheError>;
}

/// Statistics for cache monitoring
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of entries in cache
    pub entry_count: u64,
}

/// In-memory place cache backed by moka
///
/// Bounded by entry count (LRU-style eviction); expiry is tracked per
/// entry, not enforced by eviction.
#[derive(Debug, Clone)]
pub struct MemoryPlaceCache {
    inner: Cache<String, CacheEntry>,
}

impl MemoryPlaceCache {
    /// Create cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Insert a prepared entry
    #[inline]
    pub async fn insert(&self, key: impl Into<String>, entry: CacheEntry) {
        self.inner.insert(key.into(), entry).await;
    }

    /// Invalidate all entries
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Get cache statistics
    #[inline]
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.inner.entry_count(),
        }
    }
}

impl Default for MemoryPlaceCache {
    /// Create cache with default capacity (512 countries)
    fn default() -> Self {
        Self::new(512)
    }
}

#[async_trait]
impl PlaceCache for MemoryPlaceCache {
    async fn get(&self, key: &str) -> Result<Option<CacheEntry>, CacheError> {
        Ok(self.inner.get(key).await)
    }

    async fn set(&self, key: &str, places: Vec<String>, ttl: Duration) -> Result<(), CacheError> {
        let entry = CacheEntry::new(places, Utc::now(), ttl);
        self.inner.insert(key.to_string(), entry).await;
        Ok(())
    }
}
