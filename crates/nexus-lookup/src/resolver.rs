//! Regional lookup resolver
//!
//! Turns target-country changes into debounced, cancellable lookups.
//!
//! # Protocol
//!
//! ```text
//! request(country) ──► PendingLookup ──run()──► LookupOutcome ──► apply()
//!        │                 │ sleep(debounce)                        │
//!   epoch += 1             │ epoch still current? else Superseded   │ epoch matches? else Discarded
//! ```
//!
//! Every `request` or `cancel` bumps a shared generation counter. A pending
//! lookup checks it once after the debounce window (so a burst of changes
//! issues a single provider call) and the resolver checks it again when the
//! outcome is applied (so a slow answer for an old country is dropped).
//! In-flight provider calls are never aborted; only their effect is
//! suppressed. No timeout is enforced here.

use crate::error::LookupError;
use crate::service::PlaceResolver;
use crate::state::{LookupStatus, RegionalLookupState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default quiescence window before a lookup is issued
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Default bound on selectable candidates
pub const DEFAULT_MAX_CANDIDATES: usize = 15;

/// Result carried back by a pending lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// Provider answered (possibly with an empty list)
    Resolved(Vec<String>),
    /// Provider failed
    Failed(LookupError),
    /// A newer request arrived during the debounce window; provider not called
    Superseded,
}

/// Completed lookup, tagged with the epoch it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub epoch: u64,
    pub country: String,
    pub result: LookupResult,
}

/// What the wizard must do with its city field after an outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEffect {
    /// Stale outcome; nothing changes
    Discarded,
    /// Auto-select this place
    Select(String),
    /// Switch the city field to manual entry
    ForceManual(String),
}

/// Debounced lookup waiting to run
///
/// `run` is `Send + 'static` so it can be spawned onto the runtime.
#[must_use = "the lookup state stays loading until this is run and its outcome applied"]
pub struct PendingLookup {
    epoch: u64,
    country: String,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    service: Arc<dyn PlaceResolver>,
}

impl std::fmt::Debug for PendingLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLookup")
            .field("epoch", &self.epoch)
            .field("country", &self.country)
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl PendingLookup {
    #[inline]
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[inline]
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Whether no newer request or cancellation has happened
    #[inline]
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.epoch
    }

    /// Wait out the debounce window, then resolve if still current
    pub async fn run(self) -> LookupOutcome {
        tokio::time::sleep(self.debounce).await;

        if !self.is_current() {
            tracing::debug!(
                "Lookup for {} superseded during debounce (epoch {})",
                self.country,
                self.epoch
            );
            return LookupOutcome {
                epoch: self.epoch,
                country: self.country,
                result: LookupResult::Superseded,
            };
        }

        tracing::info!("Resolving regional cities for {}", self.country);
        let result = match self.service.resolve(&self.country).await {
            Ok(places) => LookupResult::Resolved(places),
            Err(err) => LookupResult::Failed(err),
        };

        LookupOutcome {
            epoch: self.epoch,
            country: self.country,
            result,
        }
    }
}

/// Owns the lookup state slice and the request generation counter
pub struct RegionalLookupResolver {
    service: Arc<dyn PlaceResolver>,
    debounce: Duration,
    max_candidates: usize,
    generation: Arc<AtomicU64>,
    state: RegionalLookupState,
}

impl std::fmt::Debug for RegionalLookupResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegionalLookupResolver")
            .field("debounce", &self.debounce)
            .field("max_candidates", &self.max_candidates)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl RegionalLookupResolver {
    /// Create resolver around an explicitly constructed place service
    #[must_use]
    pub fn new(service: Arc<dyn PlaceResolver>) -> Self {
        Self {
            service,
            debounce: DEFAULT_DEBOUNCE,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            generation: Arc::new(AtomicU64::new(0)),
            state: RegionalLookupState::default(),
        }
    }

    /// With custom debounce window
    #[inline]
    #[must_use]
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// With custom candidate bound
    #[inline]
    #[must_use]
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = max;
        self
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &RegionalLookupState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Start a new lookup, superseding any earlier one
    pub fn request(&mut self, country: &str) -> PendingLookup {
        let epoch = self.bump();
        self.state.begin(epoch, country);
        tracing::debug!("Lookup requested for {} (epoch {})", country, epoch);

        PendingLookup {
            epoch,
            country: country.to_string(),
            debounce: self.debounce,
            generation: Arc::clone(&self.generation),
            service: Arc::clone(&self.service),
        }
    }

    /// Supersede any pending lookup without starting a new one
    pub fn cancel(&mut self) {
        let epoch = self.bump();
        self.state.reset(epoch);
        tracing::debug!("Lookup cancelled (epoch {})", epoch);
    }

    /// Apply an outcome if it is still current
    pub fn apply(&mut self, outcome: LookupOutcome) -> LookupEffect {
        if outcome.epoch != self.state.request_epoch || self.state.status != LookupStatus::Loading
        {
            tracing::debug!(
                "Discarding stale lookup for {} (epoch {}, current {})",
                outcome.country,
                outcome.epoch,
                self.state.request_epoch
            );
            return LookupEffect::Discarded;
        }

        match outcome.result {
            LookupResult::Superseded => LookupEffect::Discarded,
            LookupResult::Resolved(mut places) => {
                places.truncate(self.max_candidates);
                match places.first().cloned() {
                    Some(first) => {
                        tracing::debug!("Resolved {} places for {}", places.len(), outcome.country);
                        self.state.succeed(places);
                        LookupEffect::Select(first)
                    }
                    None => self.fail(&outcome.country, LookupError::no_candidates()),
                }
            }
            LookupResult::Failed(err) => self.fail(&outcome.country, err),
        }
    }

    fn fail(&mut self, country: &str, err: LookupError) -> LookupEffect {
        tracing::warn!("City lookup for {} failed: {}", country, err);
        self.state.fail(err.message.clone());
        LookupEffect::ForceManual(err.message)
    }

    fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockPlaceResolver;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    /// Answers after a per-country delay
    struct SlowResolver {
        delays: HashMap<&'static str, Duration>,
    }

    #[async_trait]
    impl PlaceResolver for SlowResolver {
        async fn resolve(&self, country: &str) -> Result<Vec<String>, LookupError> {
            if let Some(delay) = self.delays.get(country) {
                tokio::time::sleep(*delay).await;
            }
            Ok(vec![format!("{country} City")])
        }
    }

    fn resolver_with(mock: MockPlaceResolver) -> RegionalLookupResolver {
        RegionalLookupResolver::new(Arc::new(mock))
    }

    #[tokio::test(start_paused = true)]
    async fn burst_issues_single_lookup_for_last_country() {
        let mut mock = MockPlaceResolver::new();
        mock.expect_resolve()
            .withf(|country| country == "Chile")
            .times(1)
            .returning(|_| Ok(vec!["Antofagasta".to_string()]));
        let mut resolver = resolver_with(mock);

        let a = tokio::spawn(resolver.request("Argentina").run());
        let b = tokio::spawn(resolver.request("Brazil").run());
        let c = tokio::spawn(resolver.request("Chile").run());

        let (a, b, c) = (a.await.unwrap(), b.await.unwrap(), c.await.unwrap());
        assert_eq!(a.result, LookupResult::Superseded);
        assert_eq!(b.result, LookupResult::Superseded);

        assert_eq!(resolver.apply(a), LookupEffect::Discarded);
        assert_eq!(resolver.apply(b), LookupEffect::Discarded);
        assert_eq!(
            resolver.apply(c),
            LookupEffect::Select("Antofagasta".to_string())
        );
        assert_eq!(resolver.state().candidates, vec!["Antofagasta"]);
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_for_old_country_is_discarded() {
        let slow = SlowResolver {
            delays: HashMap::from([("Peru", Duration::from_secs(5))]),
        };
        let mut resolver = RegionalLookupResolver::new(Arc::new(slow));

        let peru = tokio::spawn(resolver.request("Peru").run());
        // Let Peru clear its debounce and go in flight
        tokio::time::sleep(Duration::from_millis(150)).await;

        let chile = resolver.request("Chile").run().await;
        assert_eq!(
            resolver.apply(chile),
            LookupEffect::Select("Chile City".to_string())
        );

        let peru = peru.await.unwrap();
        assert_eq!(peru.result, LookupResult::Resolved(vec!["Peru City".into()]));
        assert_eq!(resolver.apply(peru), LookupEffect::Discarded);
        assert_eq!(resolver.state().candidates, vec!["Chile City"]);
        assert_eq!(resolver.state().country, "Chile");
    }

    #[tokio::test(start_paused = true)]
    async fn empty_answer_forces_manual_entry() {
        let mut mock = MockPlaceResolver::new();
        mock.expect_resolve().returning(|_| Ok(Vec::new()));
        let mut resolver = resolver_with(mock);

        let outcome = resolver.request("Ruritania").run().await;
        let effect = resolver.apply(outcome);

        assert_eq!(
            effect,
            LookupEffect::ForceManual(LookupError::no_candidates().message)
        );
        assert_eq!(resolver.state().status, LookupStatus::Error);
        assert!(resolver.state().error_message.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn provider_error_message_is_surfaced() {
        let mut mock = MockPlaceResolver::new();
        mock.expect_resolve()
            .returning(|c| Err(LookupError::unavailable(c)));
        let mut resolver = resolver_with(mock);

        let outcome = resolver.request("Atlantis").run().await;
        assert_eq!(
            resolver.apply(outcome),
            LookupEffect::ForceManual(LookupError::unavailable("Atlantis").message)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn candidates_are_bounded() {
        let mut mock = MockPlaceResolver::new();
        mock.expect_resolve()
            .returning(|_| Ok((1..=20).map(|i| format!("Place {i}")).collect()));
        let mut resolver = resolver_with(mock).with_max_candidates(3);

        let outcome = resolver.request("Indonesia").run().await;
        resolver.apply(outcome);
        assert_eq!(
            resolver.state().candidates,
            vec!["Place 1", "Place 2", "Place 3"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_suppresses_pending_lookup() {
        let mut mock = MockPlaceResolver::new();
        mock.expect_resolve().never();
        let mut resolver = resolver_with(mock);

        let pending = resolver.request("Kenya");
        resolver.cancel();
        assert!(!pending.is_current());

        let outcome = pending.run().await;
        assert_eq!(outcome.result, LookupResult::Superseded);
        assert_eq!(resolver.apply(outcome), LookupEffect::Discarded);
        assert_eq!(resolver.state().status, LookupStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn outcome_applies_only_once() {
        let mut mock = MockPlaceResolver::new();
        mock.expect_resolve()
            .returning(|_| Ok(vec!["Mombasa".to_string()]));
        let mut resolver = resolver_with(mock);

        let outcome = resolver.request("Kenya").run().await;
        assert_eq!(
            resolver.apply(outcome.clone()),
            LookupEffect::Select("Mombasa".to_string())
        );
        assert_eq!(resolver.apply(outcome), LookupEffect::Discarded);
    }

    #[test]
    fn epochs_increase_monotonically() {
        let mut resolver = resolver_with(MockPlaceResolver::new());
        let first = resolver.request("Kenya").epoch();
        resolver.cancel();
        let second = resolver.request("Ghana").epoch();
        assert!(second > first + 1);
        assert_eq!(resolver.state().request_epoch, second);
    }
}
