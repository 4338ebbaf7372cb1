use std::io;
use bytes::Bytes;
use thiserror::Error;

/// Read-only handle over a named binary payload.
///
/// Implementations must be safe to read concurrently from several worker
/// threads: `read_range` takes `&self` and must not depend on a shared
/// cursor.
pub trait ByteSource: Send + Sync {
    /// Name reported on every chunk cut from this source.
    fn name(&self) -> &str;

    /// Total length in bytes.
    fn size(&self) -> u64;

    /// Read exactly the bytes in `[start, end)`.
    fn read_range(&self, start: u64, end: u64) -> Result<Bytes, BlobError>;
}

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("range {start}..{end} out of bounds for blob of {size} bytes")]
    OutOfBounds { start: u64, end: u64, size: u64 },

    #[error("range {start}..{end} does not fit in memory on this target")]
    RangeTooLarge { start: u64, end: u64 },

    #[error("blob read failed: {0}")]
    Io(#[from] io::Error),
}

/// Shared bounds check for `ByteSource` implementations.
pub(crate) fn check_bounds(start: u64, end: u64, size: u64) -> Result<(), BlobError> {
    if start > end || end > size {
        return Err(BlobError::OutOfBounds { start, end, size });
    }
    Ok(())
}
