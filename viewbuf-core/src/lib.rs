#![no_std]

//! viewbuf core - byte windows and substring search
//!
//! This crate provides the pure parts of the buffer: error types, index and
//! slice normalization, the single-word bloom filter, and Horspool substring
//! search over plain byte slices. It performs no I/O.

extern crate alloc;

pub mod bloom_filter;
pub mod error;
pub mod search;
pub mod traits;
pub mod validation;

pub use bloom_filter::{ByteBloom, BLOOM_WIDTH};
pub use error::*;
pub use search::{find, find_byte, find_window, Finder, HorspoolTable};
pub use traits::*;
pub use validation::*;
