// ## 📂 `src/slicing/slicer.rs`

use crate::blob::ByteSource;

use super::types::{ChunkDescriptor, SliceError};

/// Cut `[start, end)` out of `blob`.
///
/// Out-of-bounds or empty ranges are rejected, never clamped. The blob is
/// only read, so this is safe to call from any number of workers at once.
pub fn slice<B>(blob: &B, start: u64, end: u64) -> Result<ChunkDescriptor, SliceError>
where
    B: ByteSource + ?Sized,
{
    let size = blob.size();
    if start >= end || end > size {
        return Err(SliceError::InvalidRange { start, end, size });
    }

    let data = blob.read_range(start, end)?;
    ChunkDescriptor::new(blob.name(), start, end, data)
}
