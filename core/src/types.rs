use std::io;

use thiserror::Error;

use crate::worker::WorkerError;

/// Terminal error of a `cut_file` run.
///
/// A run settles exactly once: either with the complete ordered chunk list
/// or with one of these. There is no partial-success variant.
#[derive(Debug, Error)]
pub enum CutError {
    /// Malformed input, raised before any worker is spawned.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Options could not be parsed.
    #[error("invalid options: {0}")]
    Config(#[from] serde_json::Error),

    /// A worker failed its partition; all siblings were cancelled.
    #[error("worker {slot} failed: {source}")]
    WorkerFailure {
        slot: usize,
        #[source]
        source: WorkerError,
    },

    /// The caller cancelled the task.
    #[error("cut cancelled")]
    Cancelled,

    /// The OS refused to start a worker or coordinator thread.
    #[error("failed to spawn thread: {0}")]
    Spawn(#[source] io::Error),

    /// The coordinator went away without settling.
    #[error("coordinator exited without settling")]
    Dropped,
}

impl CutError {
    pub fn is_worker_failure(&self) -> bool {
        matches!(self, CutError::WorkerFailure { .. })
    }
}
