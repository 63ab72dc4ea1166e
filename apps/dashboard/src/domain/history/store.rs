use super::ring_buffer::RingBuffer;
use crate::domain::metrics::Sample;
use tokio::sync::RwLock;

/// Number of samples retained for charting.
pub const HISTORY_CAPACITY: usize = 10;

/// Owned copy of the history as three index-aligned sequences, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    pub cpu: Vec<f32>,
    pub mem: Vec<f32>,
    pub time: Vec<String>,
}

impl HistorySnapshot {
    fn from_samples<'a>(samples: impl Iterator<Item = &'a Sample>) -> Self {
        let mut snapshot = Self::default();
        for sample in samples {
            snapshot.cpu.push(sample.cpu_percent());
            snapshot.mem.push(sample.mem_percent());
            snapshot.time.push(sample.timestamp().to_string());
        }
        snapshot
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Process-wide rolling history shared by the request handlers.
///
/// Whole samples live in a single ring, so the CPU, memory and time
/// sequences handed out by [`HistoryStore::snapshot`] always line up. A
/// record and a snapshot never interleave: writers take the lock
/// exclusively.
#[derive(Debug)]
pub struct HistoryStore {
    samples: RwLock<RingBuffer<Sample>>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: RwLock::new(RingBuffer::new(capacity)),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest one when the store is full.
    pub async fn record(&self, sample: Sample) {
        let mut samples = self.samples.write().await;
        if let Some(evicted) = samples.push(sample) {
            tracing::trace!(evicted = evicted.timestamp(), "history rolled over");
        }
    }

    /// Append a sample and copy out the resulting history under one lock.
    pub async fn record_and_snapshot(&self, sample: Sample) -> HistorySnapshot {
        let mut samples = self.samples.write().await;
        samples.push(sample);
        HistorySnapshot::from_samples(samples.iter())
    }

    pub async fn snapshot(&self) -> HistorySnapshot {
        let samples = self.samples.read().await;
        HistorySnapshot::from_samples(samples.iter())
    }

    pub async fn len(&self) -> usize {
        self.samples.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.samples.read().await.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
