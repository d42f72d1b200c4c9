//! Host byte order detection and word selection

use serde::{Deserialize, Serialize};

/// Byte order of the running process
///
/// Only little and big endian are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    /// Inspect how a known 16-bit value is laid out in memory
    ///
    /// 256 is `0b00000001_00000000`; its first byte is 1 only on big endian.
    pub fn detect() -> Self {
        let probe: u16 = 256;
        if probe.to_ne_bytes()[0] == 1 {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    /// Index of the 16-bit word holding sign, exponent and top mantissa bits
    /// when an f32 is viewed as `[u16; 2]`
    #[inline]
    pub const fn high_word_index(self) -> usize {
        match self {
            ByteOrder::BigEndian => 0,
            ByteOrder::LittleEndian => 1,
        }
    }

    /// Pick the high word out of an f32's word pair
    #[inline]
    pub const fn high_word(self, words: [u16; 2]) -> u16 {
        words[self.high_word_index()]
    }

    /// Build an f32 word pair from its high word, zero-filling the other
    #[inline]
    pub const fn from_high_word(self, high: u16) -> [u16; 2] {
        match self {
            ByteOrder::BigEndian => [high, 0],
            ByteOrder::LittleEndian => [0, high],
        }
    }
}
