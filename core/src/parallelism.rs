// ## 📂 `src/parallelism.rs`

//! Concurrency hint used when the caller does not pin a worker count.

use std::fmt;

use crate::constants::MIN_WORKERS;

/// Platform capability collaborator: how many workers make sense here.
///
/// Resolved once per `cut_file` call, never read from inside the workers.
pub trait ConcurrencyHint: Send + Sync {
    fn available(&self) -> usize;
}

/// Logical CPU count as reported by `num_cpus`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemConcurrency;

impl ConcurrencyHint for SystemConcurrency {
    fn available(&self) -> usize {
        num_cpus::get()
    }
}

/// Fixed hint, mostly useful for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedConcurrency(pub usize);

impl ConcurrencyHint for FixedConcurrency {
    fn available(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for dyn ConcurrencyHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConcurrencyHint({})", self.available())
    }
}

/// Resolve the effective worker count.
///
/// `None` and `Some(0)` fall back to the hint; the result is never below
/// `MIN_WORKERS`.
pub fn resolve_worker_count(requested: Option<usize>, hint: &dyn ConcurrencyHint) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => hint.available().max(MIN_WORKERS),
    }
}
