#![doc = include_str!("../README.md")]

mod config;
mod error;
/// Async file-level helpers used by the command line tool
pub mod files;
/// uuencode binary encoding/decoding
pub mod uuencode;

pub use config::{DecodeConfig, EncodeConfig, LineEnding};
pub use error::{Result, UuError};
pub use files::{decode_file, encode_file};
pub use uuencode::{
    check_name, decode, decode_reader, decode_with, encode, encode_reader, encode_with,
    encoded_len, UuDecoded, UuHeader,
};
