//! Slice workers for filecut.
//!
//! A worker owns one partition of chunk indices. Workers:
//! - slice every index of their partition in order
//! - return the whole batch as one message
//! - fail the whole partition on the first bad slice
//!
//! They are:
//! - one OS thread each, never reused
//! - isolated (panics are caught and reported as failures)
//! - cooperative on cancellation

pub mod types;
pub mod cancel;
pub mod unit;

pub use types::{
    WorkerInput,
    WorkerBatch,
    WorkerMessage,
    WorkerError,
};
pub use cancel::CancelToken;
pub use unit::SliceWorker;
