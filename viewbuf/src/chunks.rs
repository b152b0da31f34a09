//! Caller-side read loop over a byte source
//!
//! [`Chunks`] repeatedly calls [`Buffer::from_source_read`] and yields each
//! short or full read as its own buffer, stopping at end of stream or at the
//! configured byte limit.

use crate::{source::ByteSource, Buffer};
use viewbuf_core::{BufferError, Result};

/// Configuration for chunked reading
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReadConfig {
    /// Maximum number of bytes requested per read
    pub chunk_size: usize,
    /// Stop after this many bytes in total
    pub max_bytes: Option<usize>,
}

impl ReadConfig {
    /// Default bytes requested per read
    pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

    /// Set bytes requested per read (at least 1)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the total byte limit
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Bytes to request next, given how many have been read so far
    ///
    /// `None` once the limit is reached.
    pub fn next_request(&self, consumed: usize) -> Option<usize> {
        let chunk = self.chunk_size.max(1);
        match self.max_bytes {
            Some(max) if consumed >= max => None,
            Some(max) => Some(chunk.min(max - consumed)),
            None => Some(chunk),
        }
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            max_bytes: None,
        }
    }
}

/// Iterator of buffers read from a source, one read per item
///
/// An I/O error is yielded once, after which the iterator is exhausted.
pub struct Chunks<S> {
    source: S,
    config: ReadConfig,
    consumed: usize,
    done: bool,
}

impl<S: ByteSource> Chunks<S> {
    /// Create a new chunked reader
    pub fn new(source: S, config: ReadConfig) -> Self {
        Self {
            source,
            config,
            consumed: 0,
            done: false,
        }
    }

    /// Total bytes yielded so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Get the read configuration
    pub fn config(&self) -> &ReadConfig {
        &self.config
    }

    /// Give back the source
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Read everything that remains into a single buffer
    pub fn concat(self) -> Result<Buffer> {
        let mut parts = Vec::new();
        for chunk in self {
            parts.push(chunk?);
        }

        if parts.len() == 1 {
            return Ok(parts.remove(0));
        }

        let total = parts.iter().map(Buffer::len).sum();
        let mut data = Vec::with_capacity(total);
        for part in &parts {
            data.extend_from_slice(part);
        }
        Ok(Buffer::from_vec(data))
    }
}

impl<S: ByteSource> Iterator for Chunks<S> {
    type Item = Result<Buffer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(request) = self.config.next_request(self.consumed) else {
            tracing::debug!(consumed = self.consumed, "read limit reached");
            self.done = true;
            return None;
        };

        match Buffer::from_source_read(&mut self.source, request) {
            Ok(buf) => {
                self.consumed += buf.len();
                Some(Ok(buf))
            }
            Err(BufferError::EndOfStream) => {
                self.done = true;
                None
            }
            Err(err) => {
                tracing::debug!(error = %err, consumed = self.consumed, "read failed");
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: ByteSource> std::iter::FusedIterator for Chunks<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    struct FailAfter {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::from_raw_os_error(5)),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_next_request() {
        let config = ReadConfig::default().with_chunk_size(4).with_max_bytes(10);
        assert_eq!(config.next_request(0), Some(4));
        assert_eq!(config.next_request(8), Some(2));
        assert_eq!(config.next_request(10), None);

        let zero = ReadConfig::default().with_chunk_size(0);
        assert_eq!(zero.next_request(0), Some(1));
    }

    #[test]
    fn test_chunks_split_reads() {
        let config = ReadConfig::default().with_chunk_size(4);
        let chunks: Vec<Buffer> = Chunks::new(Cursor::new(b"0123456789".to_vec()), config)
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], b"0123");
        assert_eq!(chunks[1], b"4567");
        assert_eq!(chunks[2], b"89");
    }

    #[test]
    fn test_chunks_respect_limit() {
        let config = ReadConfig::default().with_chunk_size(4).with_max_bytes(6);
        let mut chunks = Chunks::new(Cursor::new(b"0123456789".to_vec()), config);

        assert_eq!(chunks.next().unwrap().unwrap(), b"0123");
        assert_eq!(chunks.next().unwrap().unwrap(), b"45");
        assert!(chunks.next().is_none());
        assert_eq!(chunks.consumed(), 6);

        let mut source = chunks.into_inner();
        let mut rest = Vec::new();
        source.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"6789");
    }

    #[test]
    fn test_chunks_yield_error_once() {
        let source = FailAfter {
            data: Cursor::new(b"abc".to_vec()),
        };
        let mut chunks = Chunks::new(source, ReadConfig::default());

        assert_eq!(chunks.next().unwrap().unwrap(), b"abc");
        let err = chunks.next().unwrap().unwrap_err();
        assert_eq!(err.os_code(), Some(5));
        assert!(chunks.next().is_none());
    }

    #[test]
    fn test_concat() {
        let config = ReadConfig::default().with_chunk_size(3);
        let all = Chunks::new(Cursor::new(b"abcdefgh".to_vec()), config)
            .concat()
            .unwrap();
        assert_eq!(all, b"abcdefgh");

        let empty = Chunks::new(Cursor::new(Vec::new()), ReadConfig::default())
            .concat()
            .unwrap();
        assert!(empty.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_json() {
        let config: ReadConfig = serde_json::from_str(r#"{"chunk_size": 512}"#).unwrap();
        assert_eq!(config, ReadConfig::default().with_chunk_size(512));

        let config: ReadConfig = serde_json::from_str(r#"{"max_bytes": 100}"#).unwrap();
        assert_eq!(config.chunk_size, ReadConfig::DEFAULT_CHUNK_SIZE);
        assert_eq!(config.max_bytes, Some(100));
    }
}
