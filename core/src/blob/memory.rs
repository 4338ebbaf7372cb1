// ## 📂 `src/blob/memory.rs`

use bytes::Bytes;

use super::types::{check_bounds, BlobError, ByteSource};

/// In-memory blob.
///
/// Backed by `Bytes`, so every range handed to a worker is a zero-copy
/// view into the same allocation.
#[derive(Debug, Clone)]
pub struct SourceBlob {
    name: String,
    data: Bytes,
}

impl SourceBlob {
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.data
    }
}

impl ByteSource for SourceBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_range(&self, start: u64, end: u64) -> Result<Bytes, BlobError> {
        check_bounds(start, end, self.size())?;
        // Both bounds are within `data.len()`, so they fit in usize.
        Ok(self.data.slice(start as usize..end as usize))
    }
}
