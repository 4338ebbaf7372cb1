//! filecut-core
//!
//! Pure Rust parallel file-slicing scheduler.
//! Cuts a blob into fixed-size chunks across a pool of isolated worker
//! threads and returns them in order.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Leaf layers
pub mod blob;
pub mod slicing;
pub mod partition;
pub mod parallelism;
pub mod progress;
pub mod telemetry;

// Execution layers
pub mod worker;
pub mod dispatch;

pub use dispatch::{cut_file, cut_file_blocking, cut_file_with_telemetry, CutOptions, CutOutcome, CutTask};
pub use types::CutError;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::blob::{ByteSource, FileBlob, SourceBlob};
    pub use crate::dispatch::{cut_file, cut_file_blocking, CutOptions, CutTask};
    pub use crate::progress::{ProgressEvent, ProgressSink, SlicePlan};
    pub use crate::slicing::ChunkDescriptor;
    pub use crate::types::CutError;
}
