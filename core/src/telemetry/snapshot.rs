// ## src/telemetry/snapshot.rs

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

/// Immutable telemetry snapshot of one settled cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub chunks_planned: u64,
    pub chunks_sliced: u64,
    pub bytes_sliced: u64,
    pub workers_spawned: u64,
    pub batches_received: u64,
    pub duplicate_deliveries: u64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_sliced as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            chunks_planned: counters.chunks_planned,
            chunks_sliced: counters.chunks_sliced,
            bytes_sliced: counters.bytes_sliced,
            workers_spawned: counters.workers_spawned,
            batches_received: counters.batches_received,
            duplicate_deliveries: counters.duplicate_deliveries,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn has_all_stages(&self, expected: &[Stage]) -> bool {
        self.stage_times.has_all(expected)
    }

    /// Internal consistency: every planned chunk was sliced exactly once
    /// and at most one batch arrived per worker.
    pub fn sanity_check(&self) -> bool {
        self.chunks_sliced == self.chunks_planned + self.duplicate_deliveries
            && self.batches_received <= self.workers_spawned
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
