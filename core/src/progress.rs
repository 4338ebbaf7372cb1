// ## 📂 `src/progress.rs`

//! Progress reporting.
//!
//! The coordinator emits exactly one `Start`, zero or more `Progress`, and
//! at most one `Complete` per successful run. After a failure nothing more
//! is emitted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of the blob being cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
}

/// The plan computed before any worker is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlicePlan {
    pub chunk_size: u64,
    pub chunk_count: u64,
    /// Resolved worker count (requested or hinted).
    pub worker_count: usize,
    /// Workers actually spawned: `min(worker_count, chunk_count)`.
    pub active_workers: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    Start { file: FileInfo, plan: SlicePlan },
    Progress { completed: u64, total: u64 },
    Complete { completed: u64, total: u64 },
}

impl ProgressEvent {
    /// Fraction done in `[0.0, 1.0]`; `Start` reports 0, empty runs report 1.
    pub fn fraction(&self) -> f64 {
        match self {
            ProgressEvent::Start { .. } => 0.0,
            ProgressEvent::Progress { completed, total }
            | ProgressEvent::Complete { completed, total } => {
                if *total == 0 {
                    1.0
                } else {
                    *completed as f64 / *total as f64
                }
            }
        }
    }
}

/// Passive sink for lifecycle events.
///
/// Called synchronously from the coordinator thread. Implementations should
/// return quickly; a panic inside `notify` is not caught by the core.
pub trait ProgressSink: Send + Sync {
    fn notify(&self, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(&ProgressEvent) + Send + Sync,
{
    fn notify(&self, event: &ProgressEvent) {
        self(event)
    }
}

impl fmt::Debug for dyn ProgressSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ProgressSink")
    }
}
