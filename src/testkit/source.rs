//! Scripted [`StatsSource`] for poll loop tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::StatsSnapshot;
use crate::error::FetchError;
use crate::port::outbound::stats::StatsSource;

/// A source that pops the next scripted result on every fetch.
///
/// Once the script is exhausted every fetch returns an empty snapshot.
pub struct ScriptedSource {
    results: Mutex<VecDeque<Result<StatsSnapshot, FetchError>>>,
    fetch_count: Arc<AtomicU32>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            fetch_count: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn with_results(self, results: Vec<Result<StatsSnapshot, FetchError>>) -> Self {
        *self.results.lock() = results.into();
        self
    }

    /// Shared counter of fetch calls, readable after the source is moved.
    pub fn fetch_counter(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.fetch_count)
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsSource for ScriptedSource {
    async fn fetch(&self) -> Result<StatsSnapshot, FetchError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(StatsSnapshot::default()))
    }
}
