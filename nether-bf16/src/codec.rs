//! Byte-order-bound bfloat16 converter

use bytemuck::{cast_slice, cast_slice_mut};
use half::bf16;

use crate::{Bf16Error, ByteOrder};

/// bfloat16 converter bound to one byte order
///
/// The byte order is detected when the codec is built and never changes
/// afterwards, so every conversion made through one instance takes the same
/// word-selection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bf16Codec {
    order: ByteOrder,
}

impl Default for Bf16Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Bf16Codec {
    /// Build a codec for the host byte order
    #[must_use]
    pub fn new() -> Self {
        Self::with_byte_order(ByteOrder::detect())
    }

    pub(crate) const fn with_byte_order(order: ByteOrder) -> Self {
        Self { order }
    }

    /// Byte order this codec was bound to
    pub const fn byte_order(&self) -> ByteOrder {
        self.order
    }

    // ========================================================================
    // Bulk conversion
    // ========================================================================

    /// Narrow the first `count` values of `src` into `dst`
    ///
    /// Elements of `dst` past `count` are left untouched; `count = 0` is a
    /// no-op.
    ///
    /// # Errors
    /// [`Bf16Error::SourceTooShort`] or [`Bf16Error::DestinationTooShort`]
    /// if either slice holds fewer than `count` elements. Nothing is written
    /// in that case.
    pub fn narrow(&self, src: &[f32], dst: &mut [bf16], count: usize) -> Result<(), Bf16Error> {
        check_lengths(count, src.len(), dst.len())?;
        self.narrow_exact(&src[..count], &mut dst[..count]);
        Ok(())
    }

    /// Widen the first `count` values of `src` into `dst`
    ///
    /// The low 16 bits of every output are zero.
    ///
    /// # Errors
    /// Same length checks as [`Bf16Codec::narrow`].
    pub fn widen(&self, src: &[bf16], dst: &mut [f32], count: usize) -> Result<(), Bf16Error> {
        check_lengths(count, src.len(), dst.len())?;
        self.widen_exact(&src[..count], &mut dst[..count]);
        Ok(())
    }

    // ========================================================================
    // Scalar conversion
    // ========================================================================

    /// Narrow one f32
    #[inline]
    pub fn narrow_one(&self, value: f32) -> bf16 {
        let mut out = [bf16::ZERO];
        self.narrow_exact(&[value], &mut out);
        out[0]
    }

    /// Widen one bfloat16
    #[inline]
    pub fn widen_one(&self, value: bf16) -> f32 {
        let mut out = [0.0f32];
        self.widen_exact(&[value], &mut out);
        out[0]
    }

    // ========================================================================
    // Integer conversion
    // ========================================================================

    /// Convert an integer through f32, then narrow
    ///
    /// This is a numeric conversion: integers above 2^24 first lose
    /// precision in the f32 step, then more in truncation.
    #[inline]
    pub fn from_int(&self, value: i32) -> bf16 {
        self.narrow_one(value as f32)
    }

    /// Widen, then convert to an integer truncating toward zero
    ///
    /// Out-of-range values saturate at `i32::MIN`/`i32::MAX` and NaN maps
    /// to 0.
    #[inline]
    pub fn to_int(&self, value: bf16) -> i32 {
        self.widen_one(value) as i32
    }

    // ========================================================================
    // Word copy
    // ========================================================================

    /// Lengths of `src` and `dst` are equal here
    fn narrow_exact(&self, src: &[f32], dst: &mut [bf16]) {
        let words: &[[u16; 2]] = cast_slice(src);
        for (out, &pair) in dst.iter_mut().zip(words) {
            *out = bf16::from_bits(self.order.high_word(pair));
        }
    }

    fn widen_exact(&self, src: &[bf16], dst: &mut [f32]) {
        let words: &mut [[u16; 2]] = cast_slice_mut(dst);
        for (pair, value) in words.iter_mut().zip(src) {
            *pair = self.order.from_high_word(value.to_bits());
        }
    }
}

fn check_lengths(count: usize, src_len: usize, dst_len: usize) -> Result<(), Bf16Error> {
    if count > src_len {
        return Err(Bf16Error::SourceTooShort {
            count,
            len: src_len,
        });
    }
    if count > dst_len {
        return Err(Bf16Error::DestinationTooShort {
            count,
            len: dst_len,
        });
    }
    Ok(())
}
