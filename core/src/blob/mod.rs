//! Blob sources for filecut.
//!
//! A blob is the immutable payload being sliced. The core only ever asks it
//! for its name, its size, and a byte range; it never mutates or frees it.
//!
//! Sources:
//! - `SourceBlob`: in-memory, zero-copy `Bytes` slices
//! - `FileBlob`: a file on disk, one positioned read per range

pub mod types;
pub mod memory;
pub mod file;

pub use types::{
    ByteSource,
    BlobError,
};
pub use memory::SourceBlob;
pub use file::FileBlob;
