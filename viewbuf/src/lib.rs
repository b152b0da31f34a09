//! viewbuf - Zero-copy shared byte buffers
//!
//! This library provides an immutable, reference-counted byte buffer whose
//! slices share one allocation, with a Horspool substring search tuned by a
//! single-word bloom filter.
//!
//! ## Architecture
//!
//! viewbuf follows a pure core / implementation split:
//!
//! - **viewbuf-core**: error types, index normalization, bloom filter and
//!   substring search over plain byte slices (no I/O)
//! - **viewbuf**: the [`Buffer`] type, byte sources, chunked reading and
//!   memory-mapped regions
//!
//! ## Quick Start
//!
//! ```rust
//! use viewbuf::Buffer;
//!
//! let buf = Buffer::from_bytes(b"abcxabcdabcde");
//! assert_eq!(buf.find(b"abcde", 0, None), Some(8));
//!
//! // Slices share the allocation and index relative to their own window
//! let tail = buf.slice(Some(-5), None, None)?;
//! assert_eq!(tail, b"abcde");
//! assert_eq!(tail.byte_at(-1)?, b'e');
//! # Ok::<(), viewbuf::BufferError>(())
//! ```
//!
//! ## Features
//!
//! - **mmap**: [`Buffer::map_file`] views a file through a read-only mapping
//! - **serde**: buffers serialize as byte strings; [`ReadConfig`] is deserializable

// Re-export core abstractions
pub use viewbuf_core::{
    // Error handling
    BufferError, ErrorCategory, Result,
    // Search
    ByteBloom, Finder, HorspoolTable,
    // Storage
    StorageRegion,
};

pub mod buffer;
pub mod chunks;
#[cfg(feature = "mmap")]
pub mod mapped;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod source;

pub use buffer::Buffer;
pub use chunks::{Chunks, ReadConfig};
#[cfg(feature = "mmap")]
pub use mapped::MappedRegion;
pub use source::ByteSource;
