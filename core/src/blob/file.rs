// ## 📂 `src/blob/file.rs`

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use bytes::Bytes;

use super::types::{check_bounds, BlobError, ByteSource};

/// Blob backed by a file on disk.
///
/// The size is captured once at `open`. Each `read_range` opens its own
/// handle, so concurrent workers never share a file cursor.
#[derive(Debug, Clone)]
pub struct FileBlob {
    name: String,
    path: PathBuf,
    size: u64,
}

impl FileBlob {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BlobError> {
        let path = path.as_ref().to_path_buf();
        let size = std::fs::metadata(&path)?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self { name, path, size })
    }
}

impl ByteSource for FileBlob {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn read_range(&self, start: u64, end: u64) -> Result<Bytes, BlobError> {
        check_bounds(start, end, self.size)?;

        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(start))?;

        let len = usize::try_from(end - start).map_err(|_| BlobError::RangeTooLarge { start, end })?;
        let mut buf = vec![0u8; len];
        file.read_exact(&mut buf)?;
        Ok(Bytes::from(buf))
    }
}
