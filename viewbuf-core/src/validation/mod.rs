//! Window validation utilities
//!
//! This module contains pure normalization functions with no I/O dependencies.
//! All functions are arithmetic on a window length and caller-supplied positions.

pub mod bounds;

pub use bounds::{clamp_bound, normalize_index, resolve_slice, search_window};
