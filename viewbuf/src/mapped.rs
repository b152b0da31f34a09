//! Memory-mapped file regions
//!
//! A mapped file is just another [`StorageRegion`], so buffers over it slice
//! and search exactly like heap buffers without reading the file up front.

use crate::{source::io_error, Buffer};
use memmap2::{Mmap, MmapOptions};
use std::{fs::File, path::Path};
use viewbuf_core::{Result, StorageRegion};

/// Read-only mapping of a whole file
#[derive(Debug)]
pub struct MappedRegion {
    mmap: Mmap,
}

impl MappedRegion {
    /// Map `file` read-only
    ///
    /// # Safety
    ///
    /// The file must not be modified or truncated while the mapping is alive;
    /// buffers assume their bytes never change.
    pub unsafe fn map(file: &File) -> std::io::Result<Self> {
        let mmap = MmapOptions::new().map(file)?;
        Ok(Self { mmap })
    }
}

impl StorageRegion for MappedRegion {
    fn as_slice(&self) -> &[u8] {
        &self.mmap
    }
}

impl Buffer {
    /// Map a file read-only and view its full contents
    ///
    /// Empty files produce an empty heap buffer since zero-length mappings
    /// are not portable. The file must not be modified while any buffer over
    /// it is alive.
    pub fn map_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(io_error)?;
        let size = file.metadata().map_err(io_error)?.len();

        if size == 0 {
            tracing::debug!(path = %path.display(), "mapping empty file as heap buffer");
            return Ok(Buffer::default());
        }

        // SAFETY: The mapping is read-only and the caller keeps the file unchanged
        let region = unsafe { MappedRegion::map(&file) }.map_err(io_error)?;
        tracing::debug!(path = %path.display(), size, "mapped file");
        Ok(Buffer::from_region(region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use viewbuf_core::BufferError;

    fn temp_file(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("viewbuf-{}-{name}", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    #[test]
    fn test_map_file() {
        let path = temp_file("mapped", b"header|needle in a mapped file|footer");
        let buf = Buffer::map_file(&path).unwrap();

        assert_eq!(buf.len(), 37);
        assert_eq!(buf.find(b"needle", 0, None), Some(7));

        let body = buf.slice(Some(7), Some(-7), None).unwrap();
        assert_eq!(body, b"needle in a mapped file");
        assert!(body.shares_region_with(&buf));

        drop(buf);
        assert_eq!(body.byte_at(-1), Ok(b'e'));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_map_empty_file() {
        let path = temp_file("empty", b"");
        let buf = Buffer::map_file(&path).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.find(b"", 0, None), Some(0));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_map_missing_file() {
        let path = std::env::temp_dir().join("viewbuf-definitely-missing-file");
        let err = Buffer::map_file(&path).unwrap_err();
        assert!(matches!(err, BufferError::Io { code: Some(_), .. }));
    }
}
