//! Index and slice normalization for logical windows
//!
//! Signed positions count from the end of the window when negative. These
//! are pure functions over a window length with no memory access.

use crate::{BufferError, Result};
use core::ops::Range;

/// Resolve a possibly negative index against a window of `len` bytes
///
/// Negative indices are offset by `len` once. The result must then fall
/// inside `0..len`.
pub fn normalize_index(index: isize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        index.checked_add_unsigned(len)
    } else {
        Some(index)
    };

    match resolved {
        Some(i) if i >= 0 && (i as usize) < len => Ok(i as usize),
        _ => Err(BufferError::IndexOutOfRange { index, len }),
    }
}

/// Clamp one slice bound into `0..=len`
///
/// `None` selects `default`. Negative values count from the end and
/// saturate at zero; values past the end saturate at `len`.
pub fn clamp_bound(bound: Option<isize>, default: usize, len: usize) -> usize {
    match bound {
        None => default,
        Some(b) if b < 0 => len.saturating_sub(b.unsigned_abs()),
        Some(b) => (b as usize).min(len),
    }
}

/// Resolve slice arguments into a window-relative byte range
///
/// Only a step of 1 is supported. A normalized start past the normalized
/// stop is rejected rather than producing an empty range.
pub fn resolve_slice(
    start: Option<isize>,
    stop: Option<isize>,
    step: Option<isize>,
    len: usize,
) -> Result<Range<usize>> {
    let step = step.unwrap_or(1);
    if step != 1 {
        return Err(BufferError::InvalidSliceStep(step));
    }

    let start = clamp_bound(start, 0, len);
    let stop = clamp_bound(stop, len, len);
    if start > stop {
        return Err(BufferError::InvalidSliceRange { start, stop });
    }

    Ok(start..stop)
}

/// Resolve the `[start, end)` search window used by substring search
///
/// `start` is clamped to zero, `end` defaults to and is clamped to `len`.
/// Negative positions do not count from the end here. Returns `None` when
/// the window is inverted.
pub fn search_window(start: isize, end: Option<isize>, len: usize) -> Option<Range<usize>> {
    let start = start.max(0) as usize;
    let end = match end {
        None => len,
        Some(e) if e < 0 => return None,
        Some(e) => (e as usize).min(len),
    };

    if end < start {
        return None;
    }

    Some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize_index(0, 5), Ok(0));
        assert_eq!(normalize_index(4, 5), Ok(4));
        assert_eq!(normalize_index(-1, 5), Ok(4));
        assert_eq!(normalize_index(-5, 5), Ok(0));

        assert_eq!(
            normalize_index(5, 5),
            Err(BufferError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            normalize_index(-6, 5),
            Err(BufferError::IndexOutOfRange { index: -6, len: 5 })
        );
        assert!(normalize_index(0, 0).is_err());
        assert!(normalize_index(isize::MIN, 3).is_err());
    }

    #[test]
    fn test_resolve_slice_clamps() {
        assert_eq!(resolve_slice(None, None, None, 10), Ok(0..10));
        assert_eq!(resolve_slice(Some(2), Some(5), Some(1), 10), Ok(2..5));
        assert_eq!(resolve_slice(Some(-3), None, None, 10), Ok(7..10));
        assert_eq!(resolve_slice(Some(-30), Some(30), None, 10), Ok(0..10));
        assert_eq!(resolve_slice(Some(12), None, None, 10), Ok(10..10));
        assert_eq!(resolve_slice(None, Some(-20), None, 10), Ok(0..0));
    }

    #[test]
    fn test_resolve_slice_rejects() {
        assert_eq!(
            resolve_slice(Some(0), Some(3), Some(2), 10),
            Err(BufferError::InvalidSliceStep(2))
        );
        assert_eq!(
            resolve_slice(None, None, Some(-1), 10),
            Err(BufferError::InvalidSliceStep(-1))
        );
        assert_eq!(
            resolve_slice(Some(6), Some(2), None, 10),
            Err(BufferError::InvalidSliceRange { start: 6, stop: 2 })
        );
        assert_eq!(
            resolve_slice(Some(-1), Some(-2), None, 10),
            Err(BufferError::InvalidSliceRange { start: 9, stop: 8 })
        );
    }

    #[test]
    fn test_search_window() {
        assert_eq!(search_window(0, None, 8), Some(0..8));
        assert_eq!(search_window(-4, None, 8), Some(0..8));
        assert_eq!(search_window(2, Some(100), 8), Some(2..8));
        assert_eq!(search_window(8, None, 8), Some(8..8));
        assert_eq!(search_window(9, None, 8), None);
        assert_eq!(search_window(5, Some(3), 8), None);
        assert_eq!(search_window(0, Some(-1), 8), None);
    }
}
