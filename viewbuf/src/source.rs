//! Byte sources that buffers can be read from
//!
//! A [`ByteSource`] performs one raw read per call. Nothing here retries or
//! loops; [`crate::chunks::Chunks`] is the caller-side loop.

use std::io::{self, Read};
use viewbuf_core::BufferError;

/// Something that can read raw bytes into caller-provided memory
///
/// `Ok(0)` signals end of stream, `Ok(n)` with `n <= dst.len()` is progress.
/// Errors should carry an OS error code when one exists.
pub trait ByteSource {
    /// Read at most `dst.len()` bytes into the front of `dst`
    fn read_into(&mut self, dst: &mut [u8]) -> io::Result<usize>;
}

/// Any reader (file, socket, pipe, cursor) is a byte source
impl<R: Read + ?Sized> ByteSource for R {
    fn read_into(&mut self, dst: &mut [u8]) -> io::Result<usize> {
        self.read(dst)
    }
}

/// Translate an I/O failure, keeping the OS error code if there is one
pub fn io_error(err: io::Error) -> BufferError {
    BufferError::Io {
        code: err.raw_os_error(),
        message: err.to_string(),
    }
}
