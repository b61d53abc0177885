//! Decoder parsing and error reporting

use uucodec::{decode, decode_with, encode, DecodeConfig, UuError};

/// Known document from the classic man page example
#[test]
fn test_decode_known_document() {
    let decoded = decode(b"begin 644 cat.txt\n#0V%T\n`\nend\n").unwrap();
    assert_eq!(decoded.data, b"Cat");
    assert_eq!(decoded.mode(), "644");
    assert_eq!(decoded.name(), "cat.txt");
}

/// A header that does not start with `begin` is rejected
#[test]
fn test_malformed_header() {
    let err = decode(b"NOTBEGIN 644 x\n#0V%T\n`\nend\n").unwrap_err();
    assert!(matches!(err, UuError::MalformedHeader(_)));

    let err = decode(b"begin\n`\nend\n").unwrap_err();
    assert!(matches!(err, UuError::MalformedHeader(_)));
}

/// A document cut off before the terminator is rejected
#[test]
fn test_truncated_document() {
    let encoded = encode(&[0x99; 100], "big.bin");
    let cut = encoded.len() - "`\nend\n".len();

    let err = decode(&encoded[..cut]).unwrap_err();
    assert!(matches!(err, UuError::TruncatedInput { .. }));
}

/// A data line cut mid-way is rejected rather than padded
#[test]
fn test_truncated_line() {
    let encoded = String::from_utf8(encode(&[0x11; 45], "a")).unwrap();
    let data_line = encoded.lines().nth(1).unwrap();
    let input = format!("begin 644 a\n{}\n`\nend\n", &data_line[..30]);

    let err = decode(input.as_bytes()).unwrap_err();
    assert!(matches!(err, UuError::TruncatedInput { line: 2, .. }));
}

/// Declared lengths of 1 and 2 yield exactly that many bytes
#[test]
fn test_padding_is_discarded() {
    for data in [&b"x"[..], &b"xy"[..], &b"xyz"[..], &b"wxyz"[..]] {
        let decoded = decode(&encode(data, "p")).unwrap();
        assert_eq!(decoded.data, data);
    }
}

/// Display errors carry the line number
#[test]
fn test_error_messages() {
    let err = decode(b"begin 644 x\n#0V%t\n`\nend\n").unwrap_err();
    assert_eq!(err.to_string(), "Invalid character 0x74 at line 2");

    let err = decode(b"begin 644 x\n#0V%T\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Truncated input at line 3: input ended before the terminator line"
    );
}

/// Payload embedded in a mail body decodes with the embedded configuration
#[test]
fn test_embedded_payload() {
    let mut body = b"Hi,\nthe file you asked for:\n\n".to_vec();
    body.extend_from_slice(&encode(b"payload", "p.bin"));
    body.extend_from_slice(b"\n-- \nsignature\n");

    assert!(decode(&body).is_err());
    let decoded = decode_with(&body, &DecodeConfig::embedded()).unwrap();
    assert_eq!(decoded.data, b"payload");
}
