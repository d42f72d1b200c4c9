//! Cryptic integer decoder

use crate::{CrypticError, CrypticInt16, EXPONENT_BIAS, MANTISSA_BITS, MAX_FIRST_BIT};

/// Decode a packed 16-bit value back to its integer
///
/// Mantissa bits below the `first_bit`-wide window carry no information in
/// a canonical encoding and are discarded.
///
/// # Errors
/// [`CrypticError::InvalidExponent`] if the pattern is nonzero and its
/// exponent field is outside `127..=134`.
pub fn decode(value: CrypticInt16) -> Result<i16, CrypticError> {
    if value.is_zero() {
        return Ok(0);
    }

    let exponent = value.exponent_field();
    let first_bit = exponent.wrapping_sub(EXPONENT_BIAS);
    if first_bit > MAX_FIRST_BIT {
        return Err(CrypticError::InvalidExponent(exponent));
    }

    // Right-align the remainder and restore the implicit leading bit
    let remainder = value.mantissa_field() >> (MANTISSA_BITS - first_bit);
    let magnitude = i16::from(remainder) + (1i16 << first_bit);

    Ok(if value.is_negative() {
        -magnitude
    } else {
        magnitude
    })
}

/// Decode `src` into `dst` element by element
///
/// Stops at the first invalid pattern; outputs before it are already written.
pub fn decode_slice(src: &[CrypticInt16], dst: &mut [i16]) -> Result<(), CrypticError> {
    if src.len() != dst.len() {
        return Err(CrypticError::LengthMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }

    for (out, &packed) in dst.iter_mut().zip(src) {
        *out = decode(packed)?;
    }
    Ok(())
}
