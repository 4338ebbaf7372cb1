// # 📂 `src/worker/unit.rs`

use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam::channel::Sender;
use tracing::{debug, warn};

use crate::blob::ByteSource;
use crate::constants::WORKER_THREAD_PREFIX;
use crate::slicing::slice;
use crate::utils::chunk_bounds;

use super::types::{WorkerBatch, WorkerError, WorkerInput, WorkerMessage};

pub struct SliceWorker<B: ?Sized> {
    input: WorkerInput<B>,
}

impl<B: ByteSource + ?Sized> SliceWorker<B> {
    pub fn new(input: WorkerInput<B>) -> Self {
        Self { input }
    }

    pub fn slot(&self) -> usize {
        self.input.partition.worker_slot
    }

    /// Slice every chunk of the partition, in index order.
    ///
    /// Runs on the calling thread. The first failing index fails the whole
    /// partition; no partial batch is ever returned.
    pub fn run(self) -> Result<WorkerBatch, WorkerError> {
        let WorkerInput { blob, chunk_size, partition, cancel } = self.input;
        let start_time = Instant::now();
        let size = blob.size();

        // Capacity is only a hint; skip it rather than truncate.
        let mut chunks = Vec::with_capacity(usize::try_from(partition.len()).unwrap_or_default());
        for chunk_index in partition.start_chunk..partition.end_chunk {
            if cancel.is_cancelled() {
                debug!(slot = partition.worker_slot, chunk_index, "worker observed cancellation");
                return Err(WorkerError::Cancelled);
            }

            let (start, end) = chunk_bounds(chunk_index, chunk_size, size);
            let chunk = slice(blob.as_ref(), start, end)
                .map_err(|source| WorkerError::Slice { chunk_index, source })?;
            chunks.push(chunk);
        }

        Ok(WorkerBatch {
            partition,
            chunks,
            elapsed: start_time.elapsed(),
        })
    }
}

impl<B: ByteSource + ?Sized + 'static> SliceWorker<B> {
    /// Run on a dedicated, named thread and report exactly one message.
    ///
    /// A panic inside the worker is caught and delivered as
    /// `WorkerError::Panicked`, so it never unwinds into the coordinator.
    pub fn spawn(self, tx: Sender<WorkerMessage>) -> io::Result<JoinHandle<()>> {
        let slot = self.slot();

        thread::Builder::new()
            .name(format!("{WORKER_THREAD_PREFIX}-{slot}"))
            .spawn(move || {
                debug!(slot, "worker starting");
                let result = panic::catch_unwind(AssertUnwindSafe(|| self.run()))
                    .unwrap_or_else(|payload| Err(WorkerError::Panicked(panic_message(payload))));

                if tx.send(WorkerMessage { slot, result }).is_err() {
                    // Coordinator already settled and dropped its receiver.
                    warn!(slot, "result receiver gone, dropping batch");
                }
                debug!(slot, "worker exiting");
            })
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
