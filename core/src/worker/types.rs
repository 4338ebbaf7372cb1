use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::blob::ByteSource;
use crate::partition::Partition;
use crate::slicing::{ChunkDescriptor, SliceError};

use super::cancel::CancelToken;

/// One-shot input handed to a worker: blob handle plus its index range.
#[derive(Debug)]
pub struct WorkerInput<B: ?Sized> {
    pub blob: Arc<B>,
    pub chunk_size: u64,
    pub partition: Partition,
    pub cancel: CancelToken,
}

impl<B: ByteSource + ?Sized> WorkerInput<B> {
    pub fn new(blob: Arc<B>, chunk_size: u64, partition: Partition, cancel: CancelToken) -> Self {
        Self {
            blob,
            chunk_size,
            partition,
            cancel,
        }
    }
}

/// Output of one worker: descriptors in partition order.
#[derive(Debug)]
pub struct WorkerBatch {
    pub partition: Partition,
    pub chunks: Vec<ChunkDescriptor>,
    /// Time spent slicing inside the worker.
    pub elapsed: Duration,
}

impl WorkerBatch {
    pub fn bytes(&self) -> u64 {
        self.chunks.iter().map(|c| c.size()).sum()
    }
}

/// The single message a worker sends back before it exits.
#[derive(Debug)]
pub struct WorkerMessage {
    pub slot: usize,
    pub result: Result<WorkerBatch, WorkerError>,
}

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("slicing chunk {chunk_index} failed: {source}")]
    Slice {
        chunk_index: u64,
        #[source]
        source: SliceError,
    },

    #[error("worker panicked: {0}")]
    Panicked(String),

    #[error("worker cancelled")]
    Cancelled,

    #[error("worker exited without reporting a result")]
    Disconnected,

    #[error("malformed batch: expected {expected} chunks, got {actual}")]
    MalformedBatch { expected: u64, actual: u64 },
}
