//! Single-word bloom filter over byte values
//!
//! The filter is one machine word wide. A byte sets the bit at
//! `byte & (WIDTH - 1)`, so membership tests can only produce false
//! positives: an unset bit proves the byte was never inserted.

/// Width of the filter in bits (the native word size)
pub const BLOOM_WIDTH: u32 = usize::BITS;

/// Compact bloom filter over byte values, stored in a single `usize`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteBloom {
    bits: usize,
}

impl ByteBloom {
    /// Create an empty filter
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Create a filter containing every byte of `bytes`
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut filter = Self::new();
        for &byte in bytes {
            filter.insert(byte);
        }
        filter
    }

    /// Insert a byte into the filter
    #[inline]
    pub fn insert(&mut self, byte: u8) {
        self.bits |= Self::bit_for(byte);
    }

    /// Check if a byte might be in the set (may have false positives)
    #[inline]
    pub const fn contains(&self, byte: u8) -> bool {
        self.bits & Self::bit_for(byte) != 0
    }

    /// Clear all bits in the filter
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Get the number of bits in the filter
    pub const fn bit_count() -> u32 {
        BLOOM_WIDTH
    }

    /// Get the raw bit word
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Create a filter from a raw bit word
    pub const fn from_bits(bits: usize) -> Self {
        Self { bits }
    }

    #[inline]
    const fn bit_for(byte: u8) -> usize {
        1 << (byte as u32 & (BLOOM_WIDTH - 1))
    }
}
