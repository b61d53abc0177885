//! uuencode error types

use thiserror::Error;

/// Encoding, decoding and file handling errors
#[derive(Error, Debug)]
pub enum UuError {
    /// Header line missing, not starting with `begin`, or lacking mode/name
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// Document ended early or a data line is shorter than its declared length
    #[error("Truncated input at line {line}: {reason}")]
    TruncatedInput {
        /// 1-based line number where the problem was detected
        line: usize,
        /// What was missing
        reason: String,
    },

    /// The input stream itself failed before the terminator was reached
    #[error("Read error: {0}")]
    UnderlyingRead(#[source] std::io::Error),

    /// Length character outside the printable range or above 45
    #[error("Invalid length character 0x{value:02x} at line {line}")]
    InvalidLength {
        /// 1-based line number
        line: usize,
        /// Raw length character
        value: u8,
    },

    /// Payload character outside the printable range
    #[error("Invalid character 0x{byte:02x} at line {line}")]
    InvalidCharacter {
        /// 1-based line number
        line: usize,
        /// Offending byte
        byte: u8,
    },

    /// No line break within the accepted line length
    #[error("Line {line} exceeds {limit} bytes")]
    LineTooLong {
        /// 1-based line number
        line: usize,
        /// Maximum accepted line length
        limit: usize,
    },

    /// Header name cannot be used as an output file name
    #[error("Unsafe output name: {0:?}")]
    UnsafeName(String),

    /// IO error while writing output or opening files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using UuError
pub type Result<T> = std::result::Result<T, UuError>;
