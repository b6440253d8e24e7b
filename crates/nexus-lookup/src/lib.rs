//! Nexus Lookup - regional place resolution
//!
//! Converts a free-text country name into a bounded list of selectable
//! place names.
//!
//! # Architecture
//!
//! ```text
//! country change → RegionalLookupResolver ─(debounce, epoch)─► PlaceResolver
//!                                                                  │
//!                                          CachedPlaceResolver ────┤ cache-first, stale fallback
//!                                                                  ↓
//!                                                          provider / StaticPlaceResolver
//! ```
//!
//! The resolver never touches storage; caching lives entirely in
//! [`CachedPlaceResolver`] behind the [`PlaceCache`] interface.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod cache;
pub mod cached;
pub mod error;
pub mod resolver;
pub mod service;
pub mod state;

// Re-exports for convenience
pub use cache::{CacheEntry, CacheStats, MemoryPlaceCache, PlaceCache};
pub use cached::{cache_key, CachedPlaceResolver, DEFAULT_CITY_TTL};
pub use error::{CacheError, LookupError};
pub use resolver::{
    LookupEffect, LookupOutcome, LookupResult, PendingLookup, RegionalLookupResolver,
    DEFAULT_DEBOUNCE, DEFAULT_MAX_CANDIDATES,
};
pub use service::{PlaceResolver, StaticPlaceResolver};
pub use state::{LookupStatus, RegionalLookupState};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
