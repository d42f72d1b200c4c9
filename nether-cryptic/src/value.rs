//! Packed cryptic integer value

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::{MANTISSA_MASK, SIGN_MASK};

/// A packed 16-bit cryptic integer (2 bytes)
///
/// Stored as raw bytes in wire order (byte 0 first), so a `&[CrypticInt16]`
/// can be handed to [`bytemuck::cast_slice`] and written out unchanged.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct CrypticInt16([u8; 2]);

impl CrypticInt16 {
    /// Size in bytes (2)
    pub const SIZE: usize = 2;

    /// The encoding of 0
    pub const ZERO: Self = Self([0, 0]);

    /// Wrap raw bytes (byte 0 first)
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Raw bytes (byte 0 first)
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0
    }

    /// Wrap a 16-bit pattern whose high byte is byte 0
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits.to_be_bytes())
    }

    /// 16-bit pattern with byte 0 as the high byte
    pub const fn to_bits(self) -> u16 {
        u16::from_be_bytes(self.0)
    }

    /// Read from the front of a byte buffer
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self([bytes[0], bytes[1]]))
    }

    pub const fn is_zero(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0[0] & SIGN_MASK != 0
    }

    /// Biased exponent: low 7 bits of byte 0 followed by the top bit of byte 1
    pub const fn exponent_field(self) -> u8 {
        ((self.0[0] & !SIGN_MASK) << 1) | (self.0[1] >> 7)
    }

    /// Left-aligned mantissa remainder (low 7 bits of byte 1)
    pub const fn mantissa_field(self) -> u8 {
        self.0[1] & MANTISSA_MASK
    }

    /// Assemble a value from its three fields
    pub(crate) const fn from_fields(negative: bool, exponent: u8, mantissa: u8) -> Self {
        let sign = if negative { SIGN_MASK } else { 0 };
        Self([
            sign | (exponent >> 1),
            ((exponent & 1) << 7) | (mantissa & MANTISSA_MASK),
        ])
    }
}

impl From<CrypticInt16> for u16 {
    fn from(value: CrypticInt16) -> Self {
        value.to_bits()
    }
}

impl From<u16> for CrypticInt16 {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}
