//! Whole-domain checks for the cryptic integer codec.

use std::io::{Read, Seek, Write};

use half::bf16;
use nether_cryptic::{
    CrypticError, CrypticInt16, EXPONENT_BIAS, decode, decode_slice, encode, encode_slice,
};

#[test]
fn test_roundtrip_full_domain() {
    for n in -255i16..=255 {
        let packed = encode(n).unwrap();
        assert_eq!(decode(packed), Ok(n), "roundtrip failed for {}", n);
    }
}

#[test]
fn test_nonzero_encodings_have_valid_exponent() {
    for n in (-255i16..=255).filter(|&n| n != 0) {
        let packed = encode(n).unwrap();
        assert!(!packed.is_zero(), "{} encoded to the zero pattern", n);
        let exponent = packed.exponent_field();
        assert!(
            (EXPONENT_BIAS..=EXPONENT_BIAS + 7).contains(&exponent),
            "exponent {} out of window for {}",
            exponent,
            n
        );
        assert_eq!(packed.is_negative(), n < 0);
    }
}

#[test]
fn test_encodings_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for n in -255i16..=255 {
        assert!(seen.insert(encode(n).unwrap()), "duplicate encoding for {}", n);
    }
    assert_eq!(seen.len(), 511);
}

#[test]
fn test_only_zero_pattern_decodes_to_zero() {
    for bits in 0..=u16::MAX {
        if let Ok(0) = decode(CrypticInt16::from_bits(bits)) {
            assert_eq!(bits, 0, "pattern 0x{:04X} decoded to zero", bits);
        }
    }
}

#[test]
fn test_matches_bfloat16_bit_pattern() {
    // Integers up to 8 significant bits are exact in bfloat16
    for n in -255i16..=255 {
        let expected = bf16::from_f32(f32::from(n)).to_bits();
        assert_eq!(
            encode(n).unwrap().to_bits(),
            expected,
            "layout differs from bfloat16 for {}",
            n
        );
    }
}

#[test]
fn test_out_of_range_rejected() {
    for n in [256i16, -256, 257, 1000, -1000, i16::MAX, i16::MIN] {
        assert_eq!(encode(n), Err(CrypticError::MagnitudeOutOfRange(n)));
    }
}

#[test]
fn test_wire_layout_through_file() {
    let values: Vec<i16> = (-255..=255).step_by(17).collect();
    let mut packed = vec![CrypticInt16::ZERO; values.len()];
    encode_slice(&values, &mut packed).unwrap();

    let mut file = tempfile::tempfile().unwrap();
    file.write_all(bytemuck::cast_slice(&packed[..])).unwrap();

    file.rewind().unwrap();
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).unwrap();
    assert_eq!(bytes.len(), values.len() * CrypticInt16::SIZE);

    // Byte 0 of each value is written first
    for (chunk, value) in bytes.chunks_exact(2).zip(&packed) {
        assert_eq!(chunk, &value.to_bytes()[..]);
    }

    let restored: Vec<CrypticInt16> = bytes
        .chunks_exact(CrypticInt16::SIZE)
        .map(|chunk| CrypticInt16::from_slice(chunk).unwrap())
        .collect();
    let mut decoded = vec![0i16; restored.len()];
    decode_slice(&restored, &mut decoded).unwrap();
    assert_eq!(decoded, values);
}
