//! Recording [`GaugeSink`] for publisher and poll loop tests.

use std::collections::VecDeque;
use std::io;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::Gauge;
use crate::error::PublishError;
use crate::port::outbound::gauge::GaugeSink;

/// Stores every accepted batch in memory.
///
/// Failures can be scripted with [`RecordingSink::fail_next`]; a failed
/// batch is not recorded, mirroring a dropped datagram.
#[derive(Default)]
pub struct RecordingSink {
    batches: Mutex<Vec<Vec<Gauge>>>,
    failures: Mutex<VecDeque<io::ErrorKind>>,
    attempts: Mutex<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` submits fail with `kind`.
    pub fn fail_next(&self, count: usize, kind: io::ErrorKind) {
        self.failures.lock().extend(std::iter::repeat(kind).take(count));
    }

    /// All recorded gauges, flattened across batches.
    pub fn gauges(&self) -> Vec<Gauge> {
        self.batches.lock().iter().flatten().cloned().collect()
    }

    pub fn batches(&self) -> Vec<Vec<Gauge>> {
        self.batches.lock().clone()
    }

    /// Submit calls, including failed ones.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

#[async_trait]
impl GaugeSink for RecordingSink {
    async fn submit(&self, gauges: &[Gauge]) -> Result<(), PublishError> {
        *self.attempts.lock() += 1;

        if let Some(kind) = self.failures.lock().pop_front() {
            return Err(PublishError::Send(
                io::Error::new(kind, "scripted sink failure").into(),
            ));
        }

        self.batches.lock().push(gauges.to_vec());
        Ok(())
    }
}
