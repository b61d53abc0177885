//! Block codec: 3 bytes ↔ 4 printable characters

use uucodec::uuencode::block::{decode_group, encode_group, is_valid_char};

/// Every byte triple survives encode then decode
#[test]
fn test_group_round_trip_exhaustive() {
    for x in 0..=255u8 {
        for y in 0..=255u8 {
            for z in [0u8, 1, 0x3F, 0x40, 0x7F, 0x80, 0xC0, 0xFF, x, y] {
                assert_eq!(decode_group(encode_group([x, y, z])), [x, y, z]);
            }
        }
    }
}

/// Encoded characters stay in 32..=95
#[test]
fn test_group_output_is_printable() {
    for x in 0..=255u8 {
        for c in encode_group([x, x.rotate_left(3), !x]) {
            assert!((32..=95).contains(&c), "byte {} produced {}", x, c);
            assert!(is_valid_char(c));
        }
    }
}

/// Bit layout: fields are bits 23-18, 17-12, 11-6, 5-0
#[test]
fn test_group_bit_layout() {
    assert_eq!(encode_group([0b1111_1100, 0, 0]), [32 + 63, 32, 32, 32]);
    assert_eq!(encode_group([0b0000_0011, 0b1111_0000, 0]), [32, 32 + 63, 32, 32]);
    assert_eq!(encode_group([0, 0b0000_1111, 0b1100_0000]), [32, 32, 32 + 63, 32]);
    assert_eq!(encode_group([0, 0, 0b0011_1111]), [32, 32, 32, 32 + 63]);
}
