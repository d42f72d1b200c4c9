//! Cryptic codec error types

use crate::{EXPONENT_BIAS, MAX_FIRST_BIT, MAX_MAGNITUDE};

/// Errors raised when an input falls outside the encodable domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CrypticError {
    /// Magnitude needs more than 8 significant bits
    #[error("magnitude of {0} exceeds {max}", max = MAX_MAGNITUDE)]
    MagnitudeOutOfRange(i16),

    /// Exponent field does not name a bit position in 0..=7
    #[error(
        "exponent field {0} outside {min}..={max}",
        min = EXPONENT_BIAS,
        max = EXPONENT_BIAS + MAX_FIRST_BIT
    )]
    InvalidExponent(u8),

    /// Source and destination slices differ in length
    #[error("slice length mismatch: source {src}, destination {dst}")]
    LengthMismatch { src: usize, dst: usize },
}
