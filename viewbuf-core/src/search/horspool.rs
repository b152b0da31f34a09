//! Boyer-Moore-Horspool search with a bloom filter pre-skip
//!
//! Only the needle's last byte drives the Horspool shift. When the byte just
//! past the current window cannot occur in the needle at all (its bloom bit
//! is unset), the window jumps past that byte instead.

use crate::bloom_filter::ByteBloom;
use core::ops::Range;

/// Precomputed shift data for one needle of at least two bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorspoolTable {
    mask: ByteBloom,
    skip: usize,
}

impl HorspoolTable {
    /// Build the bloom mask and last-byte shift for `needle`
    ///
    /// Every byte of the needle lands in the mask. `skip` is the distance
    /// from the last earlier occurrence of the final byte to the end of the
    /// needle, or `len - 1` when the final byte does not recur.
    pub fn new(needle: &[u8]) -> Self {
        let Some((&last, body)) = needle.split_last() else {
            return Self {
                mask: ByteBloom::new(),
                skip: 1,
            };
        };
        let mlast = body.len();

        let mut mask = ByteBloom::from_bytes(body);
        mask.insert(last);

        let skip = body
            .iter()
            .rposition(|&b| b == last)
            .map_or(mlast, |k| mlast - k)
            .max(1);

        Self { mask, skip }
    }

    /// The bloom filter over the needle's bytes
    pub fn mask(&self) -> ByteBloom {
        self.mask
    }

    /// Shift applied after the last byte matched but the body did not
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Search `haystack[window]` for `needle`, returning an absolute index
    ///
    /// `needle` must be the slice this table was built from. Needles shorter
    /// than two bytes are handed to [`super::find_window`].
    pub fn find(&self, haystack: &[u8], needle: &[u8], window: Range<usize>) -> Option<usize> {
        let m = needle.len();
        if m < 2 {
            return super::find_window(haystack, needle, window);
        }

        let Range { start, end } = window;
        if end > haystack.len() || end.checked_sub(start)? < m {
            return None;
        }

        let mlast = m - 1;
        let last = needle[mlast];
        let body = &needle[..mlast];
        let final_candidate = end - m;

        let mut i = start;
        while i <= final_candidate {
            let last_matched = haystack[i + mlast] == last;
            if last_matched && &haystack[i..i + mlast] == body {
                return Some(i);
            }

            i += if i + m < end && !self.mask.contains(haystack[i + m]) {
                m + 1
            } else if last_matched {
                self.skip
            } else {
                1
            };
        }

        None
    }
}
