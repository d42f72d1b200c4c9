//! Nether-Cryptic: packed 16-bit encoding for small signed integers
//!
//! Stores an integer in `[-255, 255]` as a float-like bit pattern: a sign bit,
//! the position of the highest set bit as a biased exponent, and the remaining
//! magnitude bits left-aligned behind it. The leading bit is implicit and is
//! restored on decode.
//!
//! **This is a pure codec** - no allocation, no shared state, O(1) per value.
//!
//! # Layout
//!
//! ```text
//! byte 0                 byte 1
//! S E E E E E E E        E M M M M M M M
//! │ └──── exponent ────────┘ └ mantissa ┘
//! └ sign (1 = negative)
//!
//! exponent = first_bit + 127   (first_bit = highest set bit, 0..=7)
//! mantissa = magnitude without its leading bit, left-aligned
//! ```
//!
//! Zero is the all-zero pattern and is the only pattern that decodes to 0.
//! For every value in range the layout coincides with the bfloat16 pattern of
//! the same integer, so `encode(5)` is `0x40A0`, the bfloat16 bits of `5.0`.
//!
//! # Usage
//!
//! ```
//! use nether_cryptic::{decode, encode};
//!
//! let packed = encode(-5).unwrap();
//! assert_eq!(packed.to_bytes(), [0xC0, 0xA0]);
//! assert_eq!(decode(packed).unwrap(), -5);
//!
//! // Magnitudes wider than 8 bits are rejected
//! assert!(encode(256).is_err());
//! ```

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_slice};
pub use encode::{encode, encode_slice};
pub use error::CrypticError;
pub use value::CrypticInt16;

// =============================================================================
// Constants
// =============================================================================

/// Offset added to the highest-set-bit position to form the exponent field
pub const EXPONENT_BIAS: u8 = 127;

/// Highest bit position an encodable magnitude may have
pub const MAX_FIRST_BIT: u8 = 7;

/// Largest encodable magnitude (8 significant bits)
pub const MAX_MAGNITUDE: u16 = 255;

/// Width of the mantissa field in bits
pub const MANTISSA_BITS: u8 = 7;

/// Mask of the mantissa field within byte 1
pub const MANTISSA_MASK: u8 = 0x7F;

/// Mask of the sign bit within byte 0
pub const SIGN_MASK: u8 = 0x80;
