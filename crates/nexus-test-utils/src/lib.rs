//! Testing utilities for the Nexus workspace
//!
//! Scripted collaborators and fixtures shared by integration tests.

#![allow(missing_docs)]

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use nexus_lookup::{LookupError, PlaceResolver};
use nexus_report::{ReportGenerator, ReportRequest, ReportStream};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Script {
    result: Result<Vec<String>, LookupError>,
    delay: Duration,
}

/// Place resolver with per-country canned answers and latencies
///
/// Records every call so tests can assert how many provider requests a
/// burst of country changes produced. Unscripted countries resolve to an
/// empty list.
#[derive(Debug, Default)]
pub struct ScriptedPlaceResolver {
    scripts: Mutex<HashMap<String, Script>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedPlaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_places(self, country: &str, places: &[&str]) -> Self {
        self.with_delayed_places(country, places, Duration::ZERO)
    }

    pub fn with_delayed_places(self, country: &str, places: &[&str], delay: Duration) -> Self {
        let result = Ok(places.iter().map(ToString::to_string).collect());
        self.scripts
            .lock()
            .insert(country.to_string(), Script { result, delay });
        self
    }

    pub fn with_failure(self, country: &str) -> Self {
        let result = Err(LookupError::unavailable(country));
        self.scripts.lock().insert(
            country.to_string(),
            Script {
                result,
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Countries passed to `resolve`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl PlaceResolver for ScriptedPlaceResolver {
    async fn resolve(&self, country: &str) -> Result<Vec<String>, LookupError> {
        self.calls.lock().push(country.to_string());
        let script = self.scripts.lock().get(country).cloned();

        match script {
            Some(script) => {
                if !script.delay.is_zero() {
                    tokio::time::sleep(script.delay).await;
                }
                script.result
            }
            None => Ok(Vec::new()),
        }
    }
}

/// Generator that records requests and streams fixed chunks
#[derive(Debug)]
pub struct RecordingGenerator {
    chunks: Vec<String>,
    requests: Mutex<Vec<ReportRequest>>,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::with_chunks(&["# Report\n", "Body\n"])
    }

    pub fn with_chunks(chunks: &[&str]) -> Self {
        Self {
            chunks: chunks.iter().map(ToString::to_string).collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ReportRequest> {
        self.requests.lock().clone()
    }
}

impl Default for RecordingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for RecordingGenerator {
    fn generate(&self, request: ReportRequest) -> ReportStream {
        self.requests.lock().push(request);
        stream::iter(self.chunks.clone().into_iter().map(Ok)).boxed()
    }
}

/// Resolver covering the countries used across the test suites
pub fn sample_places() -> Arc<ScriptedPlaceResolver> {
    Arc::new(
        ScriptedPlaceResolver::new()
            .with_places("Philippines", &["Cebu", "Davao City", "Iloilo City"])
            .with_places("Vietnam", &["Da Nang", "Hai Phong"])
            .with_places("Chile", &["Antofagasta", "Valparaíso"])
            .with_places("Peru", &["Arequipa", "Trujillo"]),
    )
}
