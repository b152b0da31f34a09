//! Substring search over byte slices
//!
//! Dispatches on needle length: an empty needle matches at the window start,
//! a single byte is a plain scan, and longer needles go through
//! [`HorspoolTable`].

pub mod horspool;

pub use horspool::HorspoolTable;

use alloc::vec::Vec;
use core::ops::Range;

/// Find the first occurrence of `byte` in `haystack[window]`
///
/// Returns an index into `haystack`, not into the window.
pub fn find_byte(haystack: &[u8], byte: u8, window: Range<usize>) -> Option<usize> {
    let start = window.start;
    haystack
        .get(window)?
        .iter()
        .position(|&b| b == byte)
        .map(|pos| start + pos)
}

/// Find the first occurrence of `needle` in `haystack[window]`
///
/// Returns an index into `haystack`. An empty needle matches at
/// `window.start`. A window that is inverted or extends past the haystack
/// never matches.
pub fn find_window(haystack: &[u8], needle: &[u8], window: Range<usize>) -> Option<usize> {
    if window.start > window.end || window.end > haystack.len() {
        return None;
    }

    match needle {
        [] => Some(window.start),
        [byte] => find_byte(haystack, *byte, window),
        _ => HorspoolTable::new(needle).find(haystack, needle, window),
    }
}

/// Find the first occurrence of `needle` anywhere in `haystack`
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    find_window(haystack, needle, 0..haystack.len())
}

/// A needle with its search tables built once for repeated searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finder {
    needle: Vec<u8>,
    strategy: Strategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Empty,
    Byte(u8),
    Horspool(HorspoolTable),
}

impl Finder {
    /// Prepare `needle` for searching
    pub fn new(needle: &[u8]) -> Self {
        let strategy = match needle {
            [] => Strategy::Empty,
            [byte] => Strategy::Byte(*byte),
            _ => Strategy::Horspool(HorspoolTable::new(needle)),
        };
        Self {
            needle: needle.to_vec(),
            strategy,
        }
    }

    /// The needle this finder searches for
    pub fn needle(&self) -> &[u8] {
        &self.needle
    }

    /// Search all of `haystack`
    pub fn find_in(&self, haystack: &[u8]) -> Option<usize> {
        self.find_in_window(haystack, 0..haystack.len())
    }

    /// Search `haystack[window]`, returning an index into `haystack`
    pub fn find_in_window(&self, haystack: &[u8], window: Range<usize>) -> Option<usize> {
        if window.start > window.end || window.end > haystack.len() {
            return None;
        }

        match self.strategy {
            Strategy::Empty => Some(window.start),
            Strategy::Byte(byte) => find_byte(haystack, byte, window),
            Strategy::Horspool(table) => table.find(haystack, &self.needle, window),
        }
    }
}
