//! Nether-BF16: truncating f32 ↔ bfloat16 conversion
//!
//! bfloat16 is a "truncated f32": the sign, the full 8-bit exponent and the
//! top 7 mantissa bits. It keeps the dynamic range of f32 and gives up
//! precision.
//!
//! ```text
//! bfloat16 = SEEEEEEE EMMMMMMM
//!  float32 = SEEEEEEE EMMMMMMM MMMMMMMM MMMMMMMM
//!
//! 3.1415f32 = 0x40490E56  ->  bfloat16 0x4049
//! ```
//!
//! Narrowing only drops bits. There is no rounding, so finite results never
//! grow in magnitude, and NaN, infinities, signed zero and subnormals keep
//! their structure. Widening zero-fills the dropped bits.
//!
//! # Byte order
//!
//! The bulk converters view each f32 as two native 16-bit words and copy the
//! high one. Which word that is depends on the host byte order, detected once
//! when a [`Bf16Codec`] is built.
//!
//! # Usage
//!
//! ```
//! use nether_bf16::{Bf16Codec, bf16};
//!
//! let codec = Bf16Codec::new();
//!
//! // One value
//! assert_eq!(codec.narrow_one(3.1415).to_bits(), 0x4049);
//! assert_eq!(codec.widen_one(bf16::from_bits(0x4049)).to_bits(), 0x4049_0000);
//!
//! // Many values
//! let src = [2.7182f32, 1.4142];
//! let mut dst = [bf16::ZERO; 2];
//! codec.narrow(&src, &mut dst, src.len()).unwrap();
//! assert_eq!(dst[0].to_bits(), 0x402D);
//! assert_eq!(dst[1].to_bits(), 0x3FB5);
//! ```
//!
//! The [`global`] module offers the same operations behind a process-wide
//! binding set up by [`global::init`].

mod byte_order;
mod codec;
mod error;
pub mod global;

pub use byte_order::ByteOrder;
pub use codec::Bf16Codec;
pub use error::Bf16Error;

// Re-export so callers don't need their own `half` dependency
pub use half::bf16;

// =============================================================================
// Constants
// =============================================================================

/// Mantissa bits kept by bfloat16
pub const BF16_MANTISSA_BITS: u32 = 7;

/// Low-order f32 bits dropped by narrowing
pub const TRUNCATED_BITS: u32 = 16;

/// Mask of the f32 bits that survive a narrow/widen cycle
pub const RETAINED_MASK: u32 = 0xFFFF_0000;
