//! bfloat16 conversion error types

/// Precondition violations reported by the converters
///
/// Checked before any output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Bf16Error {
    /// Process-wide converter used before `global::init()`
    #[error("bfloat16 converter used before init()")]
    NotInitialized,

    /// `count` runs past the end of the source slice
    #[error("count {count} exceeds source length {len}")]
    SourceTooShort { count: usize, len: usize },

    /// `count` runs past the end of the destination slice
    #[error("count {count} exceeds destination length {len}")]
    DestinationTooShort { count: usize, len: usize },
}
