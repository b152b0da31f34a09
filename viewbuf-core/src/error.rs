//! Error types for buffer operations

use alloc::string::String;

/// Errors that can occur during buffer operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// The byte source reported end of stream (a read returned 0 bytes)
    EndOfStream,
    /// The byte source failed
    Io {
        /// OS error code, if the failure carried one
        code: Option<i32>,
        /// Human-readable description of the failure
        message: String,
    },
    /// Index outside the logical window after normalization
    IndexOutOfRange { index: isize, len: usize },
    /// Slices only support a step of 1
    InvalidSliceStep(isize),
    /// Normalized slice start is past its stop
    InvalidSliceRange { start: usize, stop: usize },
}

/// Coarse grouping of [`BufferError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Failures reported while reading from a byte source
    Source,
    /// Index or slice arguments that do not fit the window
    Bounds,
}

impl BufferError {
    /// Which group this error belongs to
    pub const fn category(&self) -> ErrorCategory {
        match self {
            BufferError::EndOfStream | BufferError::Io { .. } => ErrorCategory::Source,
            BufferError::IndexOutOfRange { .. }
            | BufferError::InvalidSliceStep(_)
            | BufferError::InvalidSliceRange { .. } => ErrorCategory::Bounds,
        }
    }

    /// OS error code carried by an I/O failure
    pub fn os_code(&self) -> Option<i32> {
        match self {
            BufferError::Io { code, .. } => *code,
            _ => None,
        }
    }
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BufferError::EndOfStream => write!(f, "End of stream"),
            BufferError::Io {
                code: Some(code),
                message,
            } => write!(f, "I/O error (os error {code}): {message}"),
            BufferError::Io {
                code: None,
                message,
            } => write!(f, "I/O error: {message}"),
            BufferError::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} out of range for buffer of length {len}")
            }
            BufferError::InvalidSliceStep(step) => {
                write!(f, "Slice step must be 1, got {step}")
            }
            BufferError::InvalidSliceRange { start, stop } => {
                write!(f, "Slice start {start} is past stop {stop}")
            }
        }
    }
}

impl core::error::Error for BufferError {}

/// Result type for buffer operations
pub type Result<T> = core::result::Result<T, BufferError>;
