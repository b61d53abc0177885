//! uuencode binary encoding/decoding
//!
//! uuencode packs every 3 input bytes into 4 printable characters (6 bits
//! each, offset by 32) and frames them in lines of at most 45 raw bytes.
//! Each line starts with a length character, and the document is wrapped
//! in a `begin <mode> <name>` header and a `` ` `` / `end` trailer.
//!
//! ```text
//! begin 644 cat.txt
//! #0V%T
//! `
//! end
//! ```

pub mod block;
pub mod decode;
pub mod encode;
pub mod types;

pub use block::{decode_group, encode_group};
pub use decode::{decode, decode_reader, decode_with};
pub use encode::{check_name, encode, encode_reader, encode_with, encoded_len};
pub use types::{UuDecoded, UuHeader};

/// Maximum number of raw bytes carried by one data line
pub const LINE_BYTES: usize = 45;

/// Longest line the decoder accepts, terminator included
///
/// Data lines are at most 61 characters; the rest is headroom for long
/// header names.
pub const MAX_LINE_LEN: usize = 1024;

/// Added to every 6-bit value to make it printable
pub const PRINTABLE_OFFSET: u8 = 32;

/// Mode recorded in the header when none is configured
pub const DEFAULT_MODE: &str = "644";

/// Zero-length line marking the end of the payload
pub const TERMINATOR: u8 = b'`';

/// First token of the header line
pub const BEGIN: &str = "begin";

/// Closing line
pub const END: &str = "end";
