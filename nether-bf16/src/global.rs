//! Process-wide converter
//!
//! Free-function form of [`Bf16Codec`] for callers that want a single
//! binding shared by the whole process. Call [`init`] once at startup; every
//! other function returns [`Bf16Error::NotInitialized`] until it has run.
//!
//! ```
//! use nether_bf16::global;
//!
//! global::init();
//! let b = global::narrow_one(3.1415).unwrap();
//! assert_eq!(b.to_bits(), 0x4049);
//! assert_eq!(global::widen_one(b).unwrap().to_bits(), 0x4049_0000);
//! ```

use std::sync::OnceLock;

use half::bf16;

use crate::{Bf16Codec, Bf16Error};

static CODEC: OnceLock<Bf16Codec> = OnceLock::new();

/// Detect the host byte order and bind the process-wide converter
///
/// Detection runs at most once. Later and concurrent calls return the
/// existing binding.
pub fn init() -> Bf16Codec {
    *CODEC.get_or_init(|| {
        let codec = Bf16Codec::new();
        tracing::debug!("bfloat16 converter bound to {:?}", codec.byte_order());
        codec
    })
}

/// The bound converter, if [`init`] has run
pub fn codec() -> Result<Bf16Codec, Bf16Error> {
    CODEC.get().copied().ok_or(Bf16Error::NotInitialized)
}

/// See [`Bf16Codec::narrow`]
pub fn narrow(src: &[f32], dst: &mut [bf16], count: usize) -> Result<(), Bf16Error> {
    codec()?.narrow(src, dst, count)
}

/// See [`Bf16Codec::widen`]
pub fn widen(src: &[bf16], dst: &mut [f32], count: usize) -> Result<(), Bf16Error> {
    codec()?.widen(src, dst, count)
}

/// See [`Bf16Codec::narrow_one`]
pub fn narrow_one(value: f32) -> Result<bf16, Bf16Error> {
    Ok(codec()?.narrow_one(value))
}

/// See [`Bf16Codec::widen_one`]
pub fn widen_one(value: bf16) -> Result<f32, Bf16Error> {
    Ok(codec()?.widen_one(value))
}

/// See [`Bf16Codec::from_int`]
pub fn from_int(value: i32) -> Result<bf16, Bf16Error> {
    Ok(codec()?.from_int(value))
}

/// See [`Bf16Codec::to_int`]
pub fn to_int(value: bf16) -> Result<i32, Bf16Error> {
    Ok(codec()?.to_int(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteOrder;

    #[test]
    fn test_init_is_idempotent() {
        let first = init();
        let second = init();
        assert_eq!(first, second);
        assert_eq!(first.byte_order(), ByteOrder::detect());
        assert_eq!(codec(), Ok(first));
    }

    #[test]
    fn test_init_from_many_threads() {
        let handles: Vec<_> = (0..8).map(|_| std::thread::spawn(init)).collect();
        let bound: Vec<Bf16Codec> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(bound.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_free_functions_after_init() {
        init();
        assert_eq!(narrow_one(2.7182).unwrap().to_bits(), 0x402D);
        assert_eq!(widen_one(bf16::from_bits(0x3FB5)).unwrap().to_bits(), 0x3FB5_0000);
        assert_eq!(to_int(from_int(-42).unwrap()).unwrap(), -42);

        let mut narrowed = [bf16::ZERO; 2];
        narrow(&[1.0, -2.0], &mut narrowed, 2).unwrap();
        let mut widened = [0.0f32; 2];
        widen(&narrowed, &mut widened, 2).unwrap();
        assert_eq!(widened, [1.0, -2.0]);
    }

    #[test]
    fn test_free_functions_propagate_length_errors() {
        init();
        let mut dst = [bf16::ZERO; 1];
        assert_eq!(
            narrow(&[1.0, 2.0], &mut dst, 2),
            Err(Bf16Error::DestinationTooShort { count: 2, len: 1 })
        );
    }
}
