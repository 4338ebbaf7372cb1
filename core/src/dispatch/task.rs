// ## 📂 `src/dispatch/task.rs`

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::thread::JoinHandle;

use futures::channel::oneshot;
use tracing::warn;

use crate::slicing::ChunkDescriptor;
use crate::telemetry::TelemetrySnapshot;
use crate::types::CutError;
use crate::worker::CancelToken;

/// Successful result of a cut: ordered chunks plus run telemetry.
#[derive(Debug)]
pub struct CutOutcome {
    pub chunks: Vec<ChunkDescriptor>,
    pub telemetry: TelemetrySnapshot,
}

/// Handle to a running cut.
///
/// Awaiting it yields the ordered chunk list; the coordinator runs on its
/// own thread, so polling never blocks on slicing work. Dropping the task
/// before it settles cancels the run.
pub struct CutTask {
    rx: oneshot::Receiver<Result<CutOutcome, CutError>>,
    cancel: CancelToken,
    coordinator: Option<JoinHandle<()>>,
}

impl CutTask {
    pub(crate) fn new(
        rx: oneshot::Receiver<Result<CutOutcome, CutError>>,
        cancel: CancelToken,
        coordinator: JoinHandle<()>,
    ) -> Self {
        Self {
            rx,
            cancel,
            coordinator: Some(coordinator),
        }
    }

    /// Ask the run to stop. Workers stop at their next chunk boundary and
    /// the task settles with `CutError::Cancelled` unless it already
    /// completed.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Block the current thread until the cut settles.
    pub fn wait(self) -> Result<Vec<ChunkDescriptor>, CutError> {
        pollster::block_on(self)
    }

    /// Await the full outcome, telemetry included.
    pub async fn outcome(mut self) -> Result<CutOutcome, CutError> {
        let settled = (&mut self.rx).await;
        self.reap();
        settled.unwrap_or(Err(CutError::Dropped))
    }

    /// Blocking variant of `outcome`.
    pub fn wait_outcome(self) -> Result<CutOutcome, CutError> {
        pollster::block_on(self.outcome())
    }

    /// Join the coordinator thread once it has settled.
    fn reap(&mut self) {
        if let Some(handle) = self.coordinator.take() {
            if handle.join().is_err() {
                warn!("coordinator thread panicked");
            }
        }
    }
}

impl Future for CutTask {
    type Output = Result<Vec<ChunkDescriptor>, CutError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(settled) => {
                self.reap();
                let result = settled.unwrap_or(Err(CutError::Dropped));
                Poll::Ready(result.map(|outcome| outcome.chunks))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for CutTask {
    fn drop(&mut self) {
        if self.coordinator.is_some() {
            self.cancel.cancel();
        }
    }
}
