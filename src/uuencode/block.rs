//! 3-byte ↔ 4-character group transcoding

use super::PRINTABLE_OFFSET;

/// Map a 6-bit value to its printable character (32..=95)
#[inline]
pub fn encode_char(value: u8) -> u8 {
    (value & 0x3F) + PRINTABLE_OFFSET
}

/// Map a printable character back to its 6-bit value
///
/// The mask makes the backtick (0x60) an alias for space, as written by
/// encoders that avoid trailing spaces.
#[inline]
pub fn decode_char(c: u8) -> u8 {
    c.wrapping_sub(PRINTABLE_OFFSET) & 0x3F
}

/// Whether `c` may appear in a length or payload position
#[inline]
pub fn is_valid_char(c: u8) -> bool {
    (PRINTABLE_OFFSET..=PRINTABLE_OFFSET + 64).contains(&c)
}

/// Encode 3 bytes into 4 printable characters
///
/// The 24 input bits are sliced into four 6-bit fields, most significant first.
#[inline]
pub fn encode_group(group: [u8; 3]) -> [u8; 4] {
    let [b0, b1, b2] = group;
    [
        encode_char(b0 >> 2),
        encode_char(((b0 & 0x03) << 4) | (b1 >> 4)),
        encode_char(((b1 & 0x0F) << 2) | (b2 >> 6)),
        encode_char(b2 & 0x3F),
    ]
}

/// Decode 4 printable characters back into 3 bytes
///
/// Characters outside 32..=96 produce garbage rather than an error;
/// validation is the line parser's job.
#[inline]
pub fn decode_group(group: [u8; 4]) -> [u8; 3] {
    let [c0, c1, c2, c3] = group.map(decode_char);
    [
        (c0 << 2) | (c1 >> 4),
        (c1 << 4) | (c2 >> 2),
        (c2 << 6) | c3,
    ]
}
