//! Shared, immutable byte buffers with zero-copy slicing
//!
//! A [`Buffer`] is a window (`offset`, `len`) onto a reference-counted
//! [`StorageRegion`]. Slicing clones the `Arc` and narrows the window, so
//! every slice keeps the whole region alive until the last one is dropped.
//! The count is atomic, so buffers are `Send + Sync`.

use crate::source::{io_error, ByteSource};
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, Deref, RangeBounds},
    sync::Arc,
};
use viewbuf_core::{
    normalize_index, resolve_slice, search_window, BufferError, Finder, Result, StorageRegion,
};

type SharedRegion = Arc<dyn StorageRegion + Send + Sync>;

/// Immutable view over a shared byte region
#[derive(Clone)]
pub struct Buffer {
    region: SharedRegion,
    offset: usize,
    len: usize,
}

impl Buffer {
    /// Copy `data` into a freshly allocated region
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_region(Box::<[u8]>::from(data))
    }

    /// Take ownership of an existing allocation without copying
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self::from_region(data.into_boxed_slice())
    }

    /// View the whole of `region`
    pub fn from_region<R>(region: R) -> Self
    where
        R: StorageRegion + Send + Sync + 'static,
    {
        let len = region.as_slice().len();
        Self {
            region: Arc::new(region),
            offset: 0,
            len,
        }
    }

    /// Perform one read of up to `requested` bytes from `source`
    ///
    /// A short read is returned as-is; callers that need exactly `requested`
    /// bytes must loop. A read of zero bytes is [`BufferError::EndOfStream`].
    pub fn from_source_read<S>(source: &mut S, requested: usize) -> Result<Self>
    where
        S: ByteSource + ?Sized,
    {
        let mut data = vec![0u8; requested];
        let n = source.read_into(&mut data).map_err(io_error)?;

        if n == 0 {
            tracing::debug!(requested, "byte source reached end of stream");
            return Err(BufferError::EndOfStream);
        }
        if n < requested {
            tracing::trace!(requested, read = n, "short read");
        }

        data.truncate(n);
        Ok(Self::from_vec(data))
    }

    /// Logical length of the window
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the window is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bytes inside the window
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.region.as_slice()[self.offset..self.offset + self.len]
    }

    /// Get the byte at `index`, counting from the end when negative
    pub fn byte_at(&self, index: isize) -> Result<u8> {
        let i = normalize_index(index, self.len)?;
        Ok(self.as_slice()[i])
    }

    /// Get the byte at a non-negative `index`, if it is in the window
    pub fn get(&self, index: usize) -> Option<u8> {
        self.as_slice().get(index).copied()
    }

    /// Iterate over the bytes in the window
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.as_slice().iter().copied()
    }

    /// Copy the window into a new vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_slice().to_vec()
    }

    /// Narrow the window without copying
    ///
    /// `start` and `stop` use slice normalization (negatives count from the
    /// end, out-of-range values clamp). Only `step == 1` is accepted.
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self> {
        let range = resolve_slice(start, stop, step, self.len)?;
        Ok(self.window(range.start, range.end))
    }

    /// Narrow the window with an unsigned range, clamping the end to `len`
    pub fn slice_range<R: RangeBounds<usize>>(&self, range: R) -> Result<Self> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len,
        };

        let start = start.min(self.len);
        let stop = stop.min(self.len);
        if start > stop {
            return Err(BufferError::InvalidSliceRange { start, stop });
        }

        Ok(self.window(start, stop))
    }

    fn window(&self, start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop && stop <= self.len);
        Self {
            region: Arc::clone(&self.region),
            offset: self.offset + start,
            len: stop - start,
        }
    }

    /// True if both buffers view the same underlying allocation
    pub fn shares_region_with(&self, other: &Buffer) -> bool {
        Arc::ptr_eq(&self.region, &other.region)
    }

    /// Byte-for-byte equality against another buffer's window
    pub fn eq_buffer(&self, other: &Buffer) -> bool {
        self.len == other.len && self.as_slice() == other.as_slice()
    }

    /// Byte-for-byte equality against a raw byte sequence
    pub fn eq_bytes(&self, other: &[u8]) -> bool {
        self.len == other.len() && self.as_slice() == other
    }

    /// Find the first occurrence of `needle` in `[start, end)`
    ///
    /// `start` is clamped to zero and `end` (default: `len`) to `len`.
    /// Returns the logical index of the match, or `None` when there is no
    /// match or the window is inverted. An empty needle matches at `start`.
    pub fn find<N: AsRef<[u8]>>(
        &self,
        needle: N,
        start: isize,
        end: Option<isize>,
    ) -> Option<usize> {
        let window = search_window(start, end, self.len)?;
        viewbuf_core::find_window(self.as_slice(), needle.as_ref(), window)
    }

    /// Like [`Buffer::find`] with the needle's tables built ahead of time
    pub fn find_with(&self, finder: &Finder, start: isize, end: Option<isize>) -> Option<usize> {
        let window = search_window(start, end, self.len)?;
        finder.find_in_window(self.as_slice(), window)
    }

    /// True if `needle` occurs anywhere in the window
    pub fn contains<N: AsRef<[u8]>>(&self, needle: N) -> bool {
        self.find(needle, 0, None).is_some()
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::from_bytes(&[])
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<&[u8]> for Buffer {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_vec(data)
    }
}

impl<'a> IntoIterator for &'a Buffer {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer(b\"")?;
        for &byte in self.as_slice() {
            write!(f, "{}", std::ascii::escape_default(byte))?;
        }
        write!(f, "\")")
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Buffer) -> bool {
        self.eq_buffer(other)
    }
}

impl Eq for Buffer {}

impl Hash for Buffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl PartialEq<[u8]> for Buffer {
    fn eq(&self, other: &[u8]) -> bool {
        self.eq_bytes(other)
    }
}

impl PartialEq<&[u8]> for Buffer {
    fn eq(&self, other: &&[u8]) -> bool {
        self.eq_bytes(other)
    }
}

impl PartialEq<Vec<u8>> for Buffer {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.eq_bytes(other)
    }
}

impl<const N: usize> PartialEq<[u8; N]> for Buffer {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.eq_bytes(other)
    }
}

impl<const N: usize> PartialEq<&[u8; N]> for Buffer {
    fn eq(&self, other: &&[u8; N]) -> bool {
        self.eq_bytes(*other)
    }
}

impl PartialEq<Buffer> for [u8] {
    fn eq(&self, other: &Buffer) -> bool {
        other.eq_bytes(self)
    }
}

impl PartialEq<Buffer> for &[u8] {
    fn eq(&self, other: &Buffer) -> bool {
        other.eq_bytes(self)
    }
}

impl PartialEq<Buffer> for Vec<u8> {
    fn eq(&self, other: &Buffer) -> bool {
        other.eq_bytes(self)
    }
}
