use bytes::Bytes;
use thiserror::Error;

use crate::blob::BlobError;

/// One contiguous byte range of a source blob.
///
/// Invariants (checked by `new`, fields are read-only afterwards):
/// - `start < end`
/// - `size == end - start == data.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkDescriptor {
    name: String,
    start: u64,
    end: u64,
    data: Bytes, // 🔥 zero-copy shared
}

impl ChunkDescriptor {
    pub fn new(
        name: impl Into<String>,
        start: u64,
        end: u64,
        data: Bytes,
    ) -> Result<Self, SliceError> {
        if start >= end {
            return Err(SliceError::InvalidRange { start, end, size: end });
        }
        let expected = end - start;
        if data.len() as u64 != expected {
            return Err(SliceError::ShortRead {
                expected,
                actual: data.len() as u64,
            });
        }

        Ok(Self {
            name: name.into(),
            start,
            end,
            data,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.end - self.start
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Produce a concise debug summary of the chunk
    pub fn summary(&self) -> String {
        format!(
            "ChunkDescriptor {{ name: {}, start: {}, end: {}, size: {} }}",
            self.name,
            self.start,
            self.end,
            self.size(),
        )
    }
}

#[derive(Debug, Error)]
pub enum SliceError {
    #[error("invalid range {start}..{end} for blob of {size} bytes")]
    InvalidRange { start: u64, end: u64, size: u64 },

    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: u64, actual: u64 },

    #[error("read failed: {0}")]
    Read(#[from] BlobError),
}
