//! Round-trip law: decode(encode(b, s)) == (b, s)

use quickcheck::{Gen, QuickCheck, TestResult};
use uucodec::{
    decode, decode_reader, decode_with, encode, encode_reader, encode_with, DecodeConfig,
    EncodeConfig, LineEnding,
};

/// Line breaks in names are written as `?`; every other name is kept verbatim
fn prop_round_trip(data: Vec<u8>, name: String) -> TestResult {
    let decoded = match decode(&encode(&data, &name)) {
        Ok(decoded) => decoded,
        Err(e) => return TestResult::error(e.to_string()),
    };
    let expected_name = name.replace(['\n', '\r'], "?");
    TestResult::from_bool(decoded.data == data && decoded.header.name == expected_name)
}

fn prop_stream_matches_buffer(data: Vec<u8>, crlf: bool) -> bool {
    let line_ending = if crlf { LineEnding::Crlf } else { LineEnding::Lf };
    let config = EncodeConfig::default().line_ending(line_ending);

    let mut streamed = Vec::new();
    let consumed = encode_reader(&data[..], &mut streamed, "s.bin", &config).unwrap();
    let buffered = encode_with(&data, "s.bin", &config);

    let decoded = decode_reader(&streamed[..], &DecodeConfig::strict()).unwrap();
    consumed as usize == data.len() && streamed == buffered && decoded.data == data
}

#[test]
fn test_round_trip_property() {
    QuickCheck::new()
        .tests(500)
        .r#gen(Gen::new(400))
        .quickcheck(prop_round_trip as fn(Vec<u8>, String) -> TestResult);
}

#[test]
fn test_stream_matches_buffer_property() {
    QuickCheck::new()
        .tests(200)
        .r#gen(Gen::new(400))
        .quickcheck(prop_stream_matches_buffer as fn(Vec<u8>, bool) -> bool);
}

/// Every length across the first few line boundaries
#[test]
fn test_round_trip_boundary_lengths() {
    for len in 0..=181 {
        let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(37)).collect();
        let decoded = decode(&encode(&data, "len.bin")).unwrap();
        assert_eq!(decoded.data, data, "length {}", len);
    }
}

/// A name hiding a terminator line cannot swallow the payload
#[test]
fn test_round_trip_name_with_line_breaks() {
    for name in ["x\n`", "x\r\n`\nend", "\n"] {
        let decoded = decode_with(&encode(b"secret data", name), &DecodeConfig::strict()).unwrap();
        assert_eq!(decoded.data, b"secret data");
        assert_eq!(decoded.header.name, name.replace(['\n', '\r'], "?"));
    }
}

/// Names with spaces and an empty name survive the header
#[test]
fn test_round_trip_names() {
    for name in ["plain.txt", "with space.txt", "  leading", "trailing  ", ""] {
        let decoded = decode(&encode(b"abc", name)).unwrap();
        assert_eq!(decoded.header.name, name);
        assert_eq!(decoded.header.mode, "644");
    }
}
