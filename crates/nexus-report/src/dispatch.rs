//! Submission dispatch with an in-flight guard
//!
//! At most one report stream per dispatcher is alive at a time. The guard
//! is released when the stream is exhausted or dropped.

use crate::error::ReportError;
use crate::generator::{ReportChunk, ReportGenerator, ReportStream};
use crate::request::ReportRequest;
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Hands assembled requests to a generator, one at a time
#[derive(Clone)]
pub struct ReportDispatcher {
    generator: Arc<dyn ReportGenerator>,
    in_flight: Arc<AtomicBool>,
}

impl std::fmt::Debug for ReportDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportDispatcher")
            .field("in_flight", &self.is_in_flight())
            .finish_non_exhaustive()
    }
}

impl ReportDispatcher {
    /// Create dispatcher around an explicitly constructed generator
    #[inline]
    #[must_use]
    pub fn new(generator: Arc<dyn ReportGenerator>) -> Self {
        Self {
            generator,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a previous stream is still alive
    #[inline]
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Start generating a report
    ///
    /// # Errors
    /// - `ReportError::InFlight` if a previous stream has not finished
    pub fn dispatch(&self, request: ReportRequest) -> Result<ReportStream, ReportError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Rejected submission while a report is in flight");
            return Err(ReportError::InFlight);
        }

        tracing::info!(
            "Dispatching report request: tier={}, region={}",
            request.tier().id(),
            request.region()
        );

        let guard = InFlightGuard {
            flag: Arc::clone(&self.in_flight),
        };
        let inner = self.generator.generate(request);

        Ok(GuardedStream {
            inner,
            guard: Some(guard),
        }
        .boxed())
    }
}

struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

struct GuardedStream {
    inner: ReportStream,
    guard: Option<InFlightGuard>,
}

impl Stream for GuardedStream {
    type Item = ReportChunk;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        match this.inner.poll_next_unpin(cx) {
            Poll::Ready(None) => {
                // Release before reporting completion so the caller can resubmit
                this.guard.take();
                Poll::Ready(None)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Tier;
    use crate::generator::BriefingGenerator;
    use crate::request::ReportDraft;

    fn request() -> ReportRequest {
        ReportRequest::try_from(ReportDraft {
            tier: Some(Tier::EconomicSnapshot),
            region: "Cebu, Philippines".into(),
            ..ReportDraft::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn second_dispatch_rejected_while_stream_alive() {
        let dispatcher = ReportDispatcher::new(Arc::new(BriefingGenerator));

        let stream = dispatcher.dispatch(request()).unwrap();
        assert!(dispatcher.is_in_flight());
        assert!(matches!(
            dispatcher.dispatch(request()),
            Err(ReportError::InFlight)
        ));

        drop(stream);
        assert!(!dispatcher.is_in_flight());
    }

    #[tokio::test]
    async fn guard_released_when_stream_exhausted() {
        let dispatcher = ReportDispatcher::new(Arc::new(BriefingGenerator));

        let mut stream = dispatcher.dispatch(request()).unwrap();
        let mut chunks = 0;
        while let Some(chunk) = stream.next().await {
            chunk.unwrap();
            chunks += 1;
        }

        assert!(chunks > 0);
        assert!(!dispatcher.is_in_flight());
        assert!(dispatcher.dispatch(request()).is_ok());
    }
}
