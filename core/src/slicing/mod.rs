//! Range slicing for filecut.
//!
//! Responsibilities:
//! - Cut one validated byte range out of a blob
//! - Freeze it into an immutable `ChunkDescriptor`
//!
//! Non-responsibilities:
//! - Planning chunk boundaries
//! - Parallelism
//! - Hashing or persisting chunk data

pub mod types;
pub mod slicer;

pub use types::{
    ChunkDescriptor,
    SliceError,
};
pub use slicer::slice;
