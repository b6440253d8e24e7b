//! Async wizard session
//!
//! Wraps a [`WizardController`] for callers running on a tokio runtime:
//! pending lookups are spawned, their outcomes queue on a channel, and the
//! caller settles them back into the controller at its own pace. The
//! controller itself stays single-owner; only the lookup tasks run
//! concurrently.

use crate::config::WizardConfig;
use crate::controller::WizardController;
use crate::error::WizardError;
use nexus_lookup::{LookupEffect, LookupOutcome, PendingLookup, PlaceResolver};
use nexus_report::{ReportDispatcher, ReportGenerator, ReportRequest, ReportStream};
use std::sync::Arc;
use tokio::sync::mpsc;
use ulid::Ulid;

/// Accepted submission: the request and its report stream
pub struct Submission {
    pub request: ReportRequest,
    pub stream: ReportStream,
}

impl std::fmt::Debug for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Submission")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

/// One user's pass through the wizard
pub struct WizardSession {
    id: Ulid,
    controller: WizardController,
    dispatcher: ReportDispatcher,
    outcome_tx: mpsc::UnboundedSender<LookupOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<LookupOutcome>,
    outstanding: usize,
}

impl std::fmt::Debug for WizardSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WizardSession")
            .field("id", &self.id)
            .field("step", &self.controller.current_step())
            .field("outstanding", &self.outstanding)
            .finish_non_exhaustive()
    }
}

impl WizardSession {
    /// Create session and issue the lookup for the default country
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(
        config: &WizardConfig,
        places: Arc<dyn PlaceResolver>,
        generator: Arc<dyn ReportGenerator>,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let mut session = Self {
            id: Ulid::new(),
            controller: WizardController::new(config, places),
            dispatcher: ReportDispatcher::new(generator),
            outcome_tx,
            outcome_rx,
            outstanding: 0,
        };
        tracing::info!("Wizard session {} started", session.id);

        let pending = session.controller.start();
        session.track(pending);
        session
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> Ulid {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    /// Direct access for field updates that never trigger a lookup
    ///
    /// Lookups returned by calls made through this handle must be passed to
    /// [`Self::track`].
    #[inline]
    pub fn controller_mut(&mut self) -> &mut WizardController {
        &mut self.controller
    }

    /// Lookups spawned but not yet settled
    #[inline]
    #[must_use]
    pub fn outstanding_lookups(&self) -> usize {
        self.outstanding
    }

    /// Spawn a pending lookup onto the runtime
    pub fn track(&mut self, pending: Option<PendingLookup>) {
        let Some(pending) = pending else {
            return;
        };
        let tx = self.outcome_tx.clone();
        self.outstanding += 1;
        tokio::spawn(async move {
            // Receiver only goes away with the session
            let _ = tx.send(pending.run().await);
        });
    }

    pub fn set_target_country(&mut self, country: impl Into<String>) {
        let pending = self.controller.set_target_country(country);
        self.track(pending);
    }

    pub fn toggle_manual_city(&mut self, manual: bool) {
        let pending = self.controller.toggle_manual_city(manual);
        self.track(pending);
    }

    /// Wait for the next lookup to finish and apply it
    ///
    /// Returns `None` when nothing is outstanding.
    pub async fn settle(&mut self) -> Option<LookupEffect> {
        if self.outstanding == 0 {
            return None;
        }
        let outcome = self.outcome_rx.recv().await?;
        Some(self.apply(outcome))
    }

    /// Wait for every outstanding lookup, returning the last non-stale effect
    pub async fn settle_lookups(&mut self) -> Option<LookupEffect> {
        let mut last = None;
        while let Some(effect) = self.settle().await {
            if effect != LookupEffect::Discarded {
                last = Some(effect);
            }
        }
        last
    }

    /// Apply whatever has already finished without waiting
    pub fn drain(&mut self) -> Vec<LookupEffect> {
        let mut effects = Vec::new();
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            effects.push(self.apply(outcome));
        }
        effects
    }

    fn apply(&mut self, outcome: LookupOutcome) -> LookupEffect {
        self.outstanding = self.outstanding.saturating_sub(1);
        self.controller.apply_lookup(outcome)
    }

    /// Assemble the request and hand it to the generator
    ///
    /// # Errors
    /// - Any error from [`WizardController::submit`]
    /// - `WizardError::Report` wrapping `InFlight` while an earlier
    ///   report stream is still alive
    pub fn submit(&mut self) -> Result<Submission, WizardError> {
        let request = self.controller.submit()?;
        let stream = self.dispatcher.dispatch(request.clone())?;
        tracing::info!("Wizard session {} submitted", self.id);
        Ok(Submission { request, stream })
    }
}
