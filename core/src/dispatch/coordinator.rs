// ## 📂 `src/dispatch/coordinator.rs`
// ## Planning, dispatch, ordered collection, failure handling

use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crossbeam::channel::unbounded;
use futures::channel::oneshot;
use tracing::{debug, error, info, warn};

use crate::blob::ByteSource;
use crate::constants::COORDINATOR_THREAD_NAME;
use crate::parallelism::resolve_worker_count;
use crate::partition::partition;
use crate::progress::{FileInfo, ProgressEvent, ProgressSink, SlicePlan};
use crate::slicing::ChunkDescriptor;
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::CutError;
use crate::utils::chunk_count;
use crate::worker::{CancelToken, SliceWorker, WorkerError, WorkerInput, WorkerMessage};

use super::collect::{ResultSlots, SlotWrite};
use super::config::CutOptions;
use super::registry::WorkerRegistry;
use super::task::{CutOutcome, CutTask};

/// ✂️ Cut `blob` into `options.chunk_size` chunks across a worker pool.
///
/// Options are validated synchronously; an `Err` here means nothing was
/// spawned. The returned task settles exactly once with either the full
/// ordered chunk list or a single terminal error.
pub fn cut_file<B>(blob: Arc<B>, options: CutOptions) -> Result<CutTask, CutError>
where
    B: ByteSource + ?Sized + 'static,
{
    let mut timer = TelemetryTimer::new();

    // ---- Validation ----
    let start = Instant::now();
    options.validate()?;
    let worker_count = resolve_worker_count(options.worker_count, options.concurrency.as_ref());
    let total = chunk_count(blob.size(), options.chunk_size);
    let slot_count = usize::try_from(total).map_err(|_| {
        CutError::InvalidArgument(format!("{total} chunks exceed the addressable result size"))
    })?;
    timer.add_stage_time(Stage::Validate, start.elapsed());

    let cancel = CancelToken::new();
    let coordinator = Coordinator {
        blob,
        chunk_size: options.chunk_size,
        slot_count,
        worker_count,
        progress: options.progress,
        cancel: cancel.clone(),
        counters: TelemetryCounters::default(),
        timer,
    };

    let (settle_tx, settle_rx) = oneshot::channel();
    let handle = thread::Builder::new()
        .name(COORDINATOR_THREAD_NAME.to_string())
        .spawn(move || {
            let settled = coordinator.run();
            if settle_tx.send(settled).is_err() {
                debug!("cut task dropped before settling");
            }
        })
        .map_err(CutError::Spawn)?;

    Ok(CutTask::new(settle_rx, cancel, handle))
}

/// Blocking convenience over `cut_file`.
pub fn cut_file_blocking<B>(blob: Arc<B>, options: CutOptions) -> Result<Vec<ChunkDescriptor>, CutError>
where
    B: ByteSource + ?Sized + 'static,
{
    cut_file(blob, options)?.wait()
}

/// Blocking cut that also returns the run's telemetry snapshot.
pub fn cut_file_with_telemetry<B>(blob: Arc<B>, options: CutOptions) -> Result<CutOutcome, CutError>
where
    B: ByteSource + ?Sized + 'static,
{
    cut_file(blob, options)?.wait_outcome()
}

struct Coordinator<B: ?Sized> {
    blob: Arc<B>,
    chunk_size: u64,
    slot_count: usize,
    worker_count: usize,
    progress: Option<Arc<dyn ProgressSink>>,
    cancel: CancelToken,
    counters: TelemetryCounters,
    timer: TelemetryTimer,
}

impl<B: ByteSource + ?Sized + 'static> Coordinator<B> {
    fn run(mut self) -> Result<CutOutcome, CutError> {
        // 1️⃣ Plan
        let start = Instant::now();
        let size = self.blob.size();
        let total = chunk_count(size, self.chunk_size);
        let partitions = partition(total, self.worker_count);
        let plan = SlicePlan {
            chunk_size: self.chunk_size,
            chunk_count: total,
            worker_count: self.worker_count,
            active_workers: partitions.len(),
        };
        self.counters.chunks_planned = total;
        self.timer.add_stage_time(Stage::Plan, start.elapsed());

        info!(
            blob = self.blob.name(),
            size,
            chunk_size = self.chunk_size,
            chunk_count = total,
            worker_count = self.worker_count,
            active_workers = plan.active_workers,
            "cutting blob"
        );
        self.emit(&ProgressEvent::Start {
            file: FileInfo {
                name: self.blob.name().to_string(),
                size,
            },
            plan,
        });

        if total == 0 {
            self.emit(&ProgressEvent::Complete { completed: 0, total: 0 });
            return Ok(self.finish(Vec::new()));
        }

        // 2️⃣ Dispatch: one worker per partition
        let start = Instant::now();
        let (tx, rx) = unbounded::<WorkerMessage>();
        let mut registry = WorkerRegistry::new(self.cancel.clone());

        for p in &partitions {
            debug!(slot = p.worker_slot, start_chunk = p.start_chunk, end_chunk = p.end_chunk, "dispatching partition");
            let input = WorkerInput::new(self.blob.clone(), self.chunk_size, *p, self.cancel.clone());
            match SliceWorker::new(input).spawn(tx.clone()) {
                Ok(handle) => {
                    registry.register(p.worker_slot, handle);
                    self.counters.add_worker();
                }
                Err(e) => {
                    error!(slot = p.worker_slot, error = %e, "failed to spawn worker");
                    registry.terminate_all();
                    return Err(CutError::Spawn(e));
                }
            }
        }
        drop(tx); // only workers hold senders now
        self.timer.add_stage_time(Stage::Dispatch, start.elapsed());

        // 3️⃣ Collect into index-addressed slots
        let start = Instant::now();
        let mut slots = ResultSlots::new(self.slot_count);

        let chunks = loop {
            slots = match slots.into_ordered() {
                Ok(chunks) => break chunks,
                Err(pending) => pending,
            };

            let WorkerMessage { slot, result } = match rx.recv() {
                Ok(msg) => msg,
                Err(_) => {
                    // Every sender is gone but slots are still missing.
                    let slot = registry.first_slot().unwrap_or_default();
                    return Err(self.abort(&mut registry, slot, WorkerError::Disconnected));
                }
            };

            if self.cancel.is_cancelled() {
                info!(slot, "cut cancelled by caller");
                registry.terminate_all();
                return Err(CutError::Cancelled);
            }

            let batch = match result {
                Ok(batch) => batch,
                Err(source) => return Err(self.abort(&mut registry, slot, source)),
            };

            // Slots index `partitions` directly; a repeat batch is checked
            // against the same assignment and overwrites the earlier chunks.
            let Some(assigned) = partitions.get(slot).copied() else {
                warn!(slot, "batch from unknown worker slot ignored");
                continue;
            };

            let received = batch.chunks.len() as u64;
            if batch.partition != assigned || received != assigned.len() {
                let source = WorkerError::MalformedBatch {
                    expected: assigned.len(),
                    actual: received,
                };
                return Err(self.abort(&mut registry, slot, source));
            }

            debug!(slot, chunks = received, "batch received");
            self.timer.add_stage_time(Stage::Slice, batch.elapsed);
            self.counters.add_batch(batch.chunks.len(), batch.bytes());

            for (offset, chunk) in batch.chunks.into_iter().enumerate() {
                let index = assigned.start_chunk + offset as u64;
                match slots.write(index, chunk) {
                    SlotWrite::Fresh => {}
                    SlotWrite::Overwritten => {
                        warn!(slot, chunk_index = index, "chunk delivered twice, keeping latest");
                        self.counters.add_duplicate();
                    }
                    SlotWrite::OutOfRange => {
                        let source = WorkerError::MalformedBatch {
                            expected: total,
                            actual: index + 1,
                        };
                        return Err(self.abort(&mut registry, slot, source));
                    }
                }
            }

            self.emit(&ProgressEvent::Progress {
                completed: slots.filled(),
                total,
            });

            // This worker is done either way; release it now.
            registry.release(slot);
        };
        self.timer.add_stage_time(Stage::Collect, start.elapsed());

        // 4️⃣ Complete
        registry.terminate_all();

        info!(chunk_count = total, "cut complete");
        self.emit(&ProgressEvent::Complete {
            completed: total,
            total,
        });

        Ok(self.finish(chunks))
    }

    fn emit(&self, event: &ProgressEvent) {
        if let Some(sink) = &self.progress {
            sink.notify(event);
        }
    }

    /// First failure wins: cancel and join every sibling, then report.
    fn abort(&self, registry: &mut WorkerRegistry, slot: usize, source: WorkerError) -> CutError {
        // Workers only report Cancelled when the caller raised the token.
        let caller_cancelled = matches!(source, WorkerError::Cancelled);

        registry.release(slot);
        registry.terminate_all();

        if caller_cancelled {
            info!(slot, "cut cancelled by caller");
            return CutError::Cancelled;
        }

        error!(slot, error = %source, "worker failed, siblings cancelled");
        CutError::WorkerFailure { slot, source }
    }

    fn finish(mut self, chunks: Vec<ChunkDescriptor>) -> CutOutcome {
        self.timer.finish();
        let telemetry = TelemetrySnapshot::from(&self.counters, &self.timer);
        debug!(stages = %telemetry.stage_times.summary(), "cut telemetry");

        CutOutcome { chunks, telemetry }
    }
}
