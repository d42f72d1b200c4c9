//! Cryptic integer encoder

use crate::{
    CrypticError, CrypticInt16, EXPONENT_BIAS, MANTISSA_BITS, MAX_FIRST_BIT, MAX_MAGNITUDE,
};

/// Encode a signed integer into its packed 16-bit form
///
/// # Errors
/// [`CrypticError::MagnitudeOutOfRange`] if `|n| > 255`.
pub fn encode(n: i16) -> Result<CrypticInt16, CrypticError> {
    if n == 0 {
        return Ok(CrypticInt16::ZERO);
    }

    let negative = n < 0;
    let magnitude = n.unsigned_abs();
    if magnitude > MAX_MAGNITUDE {
        return Err(CrypticError::MagnitudeOutOfRange(n));
    }
    let magnitude = magnitude as u8;

    // Highest set bit, LSB-0 numbering; magnitude != 0 here
    let first_bit = MAX_FIRST_BIT - magnitude.leading_zeros() as u8;

    // Drop the implicit leading bit, left-align what remains
    let remainder = magnitude ^ (1 << first_bit);
    let mantissa = remainder << (MANTISSA_BITS - first_bit);

    Ok(CrypticInt16::from_fields(negative, first_bit + EXPONENT_BIAS, mantissa))
}

/// Encode `src` into `dst` element by element
///
/// Stops at the first out-of-range value; outputs before it are already
/// written.
pub fn encode_slice(src: &[i16], dst: &mut [CrypticInt16]) -> Result<(), CrypticError> {
    if src.len() != dst.len() {
        return Err(CrypticError::LengthMismatch {
            src: src.len(),
            dst: dst.len(),
        });
    }

    for (out, &n) in dst.iter_mut().zip(src) {
        *out = encode(n)?;
    }
    Ok(())
}
