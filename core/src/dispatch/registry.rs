// ## 📂 `src/dispatch/registry.rs`

use std::collections::BTreeMap;
use std::thread::JoinHandle;

use tracing::{debug, warn};

use crate::worker::CancelToken;

/// Outstanding workers, keyed by slot.
///
/// Releasing a slot joins its thread. `terminate_all` raises the shared
/// cancellation token first, then joins whatever is left. Dropping the
/// registry does the same, so a coordinator that unwinds (a panicking
/// progress sink, for one) still leaves no worker running.
pub struct WorkerRegistry {
    cancel: CancelToken,
    units: BTreeMap<usize, JoinHandle<()>>,
}

impl WorkerRegistry {
    pub fn new(cancel: CancelToken) -> Self {
        Self {
            cancel,
            units: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, slot: usize, handle: JoinHandle<()>) {
        if let Some(old) = self.units.insert(slot, handle) {
            warn!(slot, "slot registered twice, joining previous worker");
            join_unit(slot, old);
        }
    }

    /// Lowest outstanding slot, if any.
    pub fn first_slot(&self) -> Option<usize> {
        self.units.keys().next().copied()
    }

    /// Join and forget one worker. Returns false for unknown slots.
    pub fn release(&mut self, slot: usize) -> bool {
        match self.units.remove(&slot) {
            Some(handle) => {
                join_unit(slot, handle);
                true
            }
            None => false,
        }
    }

    /// Cancel and join every outstanding worker.
    pub fn terminate_all(&mut self) {
        if self.units.is_empty() {
            return;
        }
        self.cancel.cancel();
        debug!(outstanding = self.units.len(), "terminating outstanding workers");

        for (slot, handle) in std::mem::take(&mut self.units) {
            join_unit(slot, handle);
        }
    }
}

impl Drop for WorkerRegistry {
    fn drop(&mut self) {
        if !self.units.is_empty() {
            warn!(outstanding = self.units.len(), "registry dropped with live workers");
        }
        self.terminate_all();
    }
}

fn join_unit(slot: usize, handle: JoinHandle<()>) {
    if handle.join().is_err() {
        // The body runs under catch_unwind; only the reporting tail can get here.
        warn!(slot, "worker thread panicked outside its slicing loop");
    }
}
