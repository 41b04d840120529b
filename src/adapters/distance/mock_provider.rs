//! Mock distance provider for testing.
//!
//! Returns scripted legs in order, so a test can walk a whole trip
//! (base to pickup, pickup to destination, return) with known mileage.
//! Errors and delays can be injected to exercise the fallback path.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{DistanceError, DistanceProvider, RouteLeg};

/// Scripted distance provider.
///
/// Legs are consumed in the order they were queued; once exhausted, a
/// short default leg is returned so tests only script what they assert.
#[derive(Debug, Clone)]
pub struct MockDistanceProvider {
    /// Pre-configured results (consumed in order).
    results: Arc<Mutex<VecDeque<Result<RouteLeg, DistanceError>>>>,
    /// Simulated latency per call.
    delay: Duration,
    /// (origin, destination) pairs seen, for verification.
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl Default for MockDistanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDistanceProvider {
    /// Creates a provider with no scripted legs.
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a toll-free leg.
    pub fn with_leg(self, miles: f64, hours: f64) -> Self {
        self.with_result(Ok(RouteLeg {
            miles,
            hours,
            has_tolls: false,
        }))
    }

    /// Queues a leg that crosses a toll road.
    pub fn with_toll_leg(self, miles: f64, hours: f64) -> Self {
        self.with_result(Ok(RouteLeg {
            miles,
            hours,
            has_tolls: true,
        }))
    }

    /// Queues an error.
    pub fn with_error(self, error: DistanceError) -> Self {
        self.with_result(Err(error))
    }

    fn with_result(self, result: Result<RouteLeg, DistanceError>) -> Self {
        self.results.lock().unwrap().push_back(result);
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of legs measured so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All (origin, destination) pairs measured so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn next_result(&self) -> Result<RouteLeg, DistanceError> {
        self.results.lock().unwrap().pop_front().unwrap_or(Ok(RouteLeg {
            miles: 15.0,
            hours: 0.4,
            has_tolls: false,
        }))
    }
}

#[async_trait]
impl DistanceProvider for MockDistanceProvider {
    async fn measure(&self, origin: &str, destination: &str) -> Result<RouteLeg, DistanceError> {
        self.calls
            .lock()
            .unwrap()
            .push((origin.to_string(), destination.to_string()));

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_result()
    }
}
