// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters used during a cut.
//!
//! Summary: collects chunk, byte and worker counts on the coordinator.
//! Converted into an immutable TelemetrySnapshot when the cut settles.
use serde::{Deserialize, Serialize};

/// Deterministic counters collected during one `cut_file` run
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub chunks_planned: u64,
    pub chunks_sliced: u64,
    pub bytes_sliced: u64,
    pub workers_spawned: u64,
    pub batches_received: u64,
    pub duplicate_deliveries: u64,
}

impl TelemetryCounters {
    /// Record one batch returned by a worker.
    ///
    /// - `chunks`: descriptors in the batch
    /// - `bytes`: total payload bytes in the batch
    pub fn add_batch(&mut self, chunks: usize, bytes: u64) {
        self.batches_received += 1;
        self.chunks_sliced += chunks as u64;
        self.bytes_sliced += bytes;
    }

    pub fn add_worker(&mut self) {
        self.workers_spawned += 1;
    }

    pub fn add_duplicate(&mut self) {
        self.duplicate_deliveries += 1;
    }

    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.chunks_planned += other.chunks_planned;
        self.chunks_sliced += other.chunks_sliced;
        self.bytes_sliced += other.bytes_sliced;
        self.workers_spawned += other.workers_spawned;
        self.batches_received += other.batches_received;
        self.duplicate_deliveries += other.duplicate_deliveries;
    }
}
