// ## 📂 `src/dispatch/config.rs`

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::parallelism::{ConcurrencyHint, SystemConcurrency};
use crate::progress::{ProgressEvent, ProgressSink};
use crate::types::CutError;

/// Options for one `cut_file` run.
///
/// `chunk_size` and `worker_count` can be loaded from JSON; the progress
/// sink and concurrency hint are runtime collaborators and are skipped by
/// serde.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CutOptions {
    /// Target chunk size in bytes. Must be positive.
    pub chunk_size: u64,

    /// Requested worker count.
    /// - `None` or `Some(0)` → concurrency hint, at least 1
    pub worker_count: Option<usize>,

    #[serde(skip)]
    pub progress: Option<Arc<dyn ProgressSink>>,

    #[serde(skip, default = "system_concurrency")]
    pub concurrency: Arc<dyn ConcurrencyHint>,
}

fn system_concurrency() -> Arc<dyn ConcurrencyHint> {
    Arc::new(SystemConcurrency)
}

impl Default for CutOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            worker_count: None,
            progress: None,
            concurrency: system_concurrency(),
        }
    }
}

impl CutOptions {
    pub fn new(chunk_size: u64) -> Self {
        Self {
            chunk_size,
            ..Self::default()
        }
    }

    /// Parse and validate options from JSON, e.g. `{"chunk_size": 4096}`.
    pub fn from_json(json: &str) -> Result<Self, CutError> {
        let options: CutOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = Some(worker_count);
        self
    }

    pub fn on_progress<F>(mut self, f: F) -> Self
    where
        F: Fn(&ProgressEvent) + Send + Sync + 'static,
    {
        self.progress = Some(Arc::new(f));
        self
    }

    pub fn with_progress_sink(mut self, sink: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(sink);
        self
    }

    pub fn with_concurrency_hint(mut self, hint: Arc<dyn ConcurrencyHint>) -> Self {
        self.concurrency = hint;
        self
    }

    pub fn validate(&self) -> Result<(), CutError> {
        if self.chunk_size == 0 {
            return Err(CutError::InvalidArgument(
                "chunk_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
