//! Storage region trait for shared buffers
//!
//! A region is an immutable, contiguous allocation that buffers view
//! through an offset and length. This is a pure interface; concrete regions
//! backed by files live in the `viewbuf` crate.

use alloc::{boxed::Box, vec::Vec};

/// Trait for immutable byte regions a buffer can view
///
/// Implementations must return the same bytes from every call for as long
/// as the region is alive.
pub trait StorageRegion {
    /// Get the full contents of the region
    fn as_slice(&self) -> &[u8];

    /// Get the size of the region in bytes
    ///
    /// Default implementation uses the slice length. Buffers size their
    /// window from [`StorageRegion::as_slice`], not from this value.
    fn size(&self) -> usize {
        self.as_slice().len()
    }
}

impl StorageRegion for Vec<u8> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl StorageRegion for Box<[u8]> {
    fn as_slice(&self) -> &[u8] {
        self
    }
}

impl StorageRegion for &'static [u8] {
    fn as_slice(&self) -> &[u8] {
        self
    }
}
