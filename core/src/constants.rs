// ## 📂 `src/constants.rs`

/// Defaults when Option<T> is None
pub const DEFAULT_CHUNK_SIZE: u64 = 1024 * 1024; // 1 MiB

/// Lower bound for any resolved worker count.
pub const MIN_WORKERS: usize = 1;

/// Worker threads are named `{WORKER_THREAD_PREFIX}-{slot}`.
pub const WORKER_THREAD_PREFIX: &str = "filecut-worker";

/// The coordinating thread behind every `CutTask`.
pub const COORDINATOR_THREAD_NAME: &str = "filecut-coordinator";

/// Default `tracing` filter used by `init_tracing` when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "filecut_core=info";
