use std::io::{ErrorKind, Read, Write};

use tracing::{debug, trace};

use crate::config::EncodeConfig;
use crate::{Result, UuError};

use super::block::{encode_char, encode_group};
use super::{BEGIN, END, LINE_BYTES, TERMINATOR};

/// Encode binary data to uuencode format with mode 644 and LF line endings
///
/// `name` should not contain line breaks (see [`check_name`]). Any `\r` or
/// `\n` in it is written as `?` so the document structure stays intact.
///
/// # Arguments
/// * `data` - Binary data to encode
/// * `name` - Display name recorded in the header
///
/// # Returns
/// Complete document: `begin` header, data lines, `` ` `` terminator and `end`
///
/// # Example
/// ```
/// let encoded = uucodec::uuencode::encode(b"Cat", "cat.txt");
/// assert_eq!(encoded, b"begin 644 cat.txt\n#0V%T\n`\nend\n");
/// ```
pub fn encode(data: &[u8], name: &str) -> Vec<u8> {
    encode_with(data, name, &EncodeConfig::default())
}

/// Encode binary data using the given configuration
///
/// Line breaks in `name` are replaced as in [`encode`].
pub fn encode_with(data: &[u8], name: &str, config: &EncodeConfig) -> Vec<u8> {
    let eol = config.line_ending.as_bytes();
    let mut output = Vec::with_capacity(encoded_len(data.len(), name, config));

    write_header(&mut output, name, config);
    for chunk in data.chunks(LINE_BYTES) {
        encode_line(chunk, eol, &mut output);
    }
    write_trailer(&mut output, eol);

    debug!(
        "Encoded {} bytes as {} ({} lines)",
        data.len(),
        name,
        data.len().div_ceil(LINE_BYTES)
    );
    output
}

/// Stream-encode everything `reader` yields into `writer`
///
/// Short reads are refilled so that every data line except the last
/// carries a full 45 bytes; the output is identical to [`encode_with`]
/// over the same bytes.
///
/// # Returns
/// Number of raw bytes consumed from `reader`
///
/// # Errors
/// * [`UuError::UnsafeName`] if `name` contains a line break
/// * [`UuError::UnderlyingRead`] if `reader` fails
/// * [`UuError::Io`] if `writer` fails
pub fn encode_reader<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    name: &str,
    config: &EncodeConfig,
) -> Result<u64> {
    check_name(name)?;

    let eol = config.line_ending.as_bytes();
    let mut line = Vec::with_capacity(1 + LINE_BYTES / 3 * 4 + eol.len());
    let mut chunk = [0u8; LINE_BYTES];
    let mut total: u64 = 0;

    write_header(&mut line, name, config);
    writer.write_all(&line)?;

    loop {
        let filled = fill_chunk(&mut reader, &mut chunk)?;
        if filled == 0 {
            break;
        }

        line.clear();
        encode_line(&chunk[..filled], eol, &mut line);
        writer.write_all(&line)?;
        total += filled as u64;

        if filled < LINE_BYTES {
            break;
        }
    }

    line.clear();
    write_trailer(&mut line, eol);
    writer.write_all(&line)?;
    writer.flush()?;

    debug!("Stream-encoded {} bytes as {}", total, name);
    Ok(total)
}

/// Exact size of the document [`encode_with`] produces
pub fn encoded_len(raw_len: usize, name: &str, config: &EncodeConfig) -> usize {
    let eol = config.line_ending.as_bytes().len();
    let header = BEGIN.len() + 1 + config.mode.len() + 1 + name.len() + eol;
    let trailer = 1 + eol + END.len() + eol;

    let full_lines = raw_len / LINE_BYTES;
    let remainder = raw_len % LINE_BYTES;
    let full_line_len = 1 + LINE_BYTES / 3 * 4 + eol;
    let last_line_len = if remainder == 0 {
        0
    } else {
        1 + remainder.div_ceil(3) * 4 + eol
    };

    header + full_lines * full_line_len + last_line_len + trailer
}

/// Reject display names that cannot survive the single-line header
///
/// # Errors
/// [`UuError::UnsafeName`] when `name` contains `\r` or `\n`
pub fn check_name(name: &str) -> Result<()> {
    if name.contains(['\r', '\n']) {
        return Err(UuError::UnsafeName(name.to_string()));
    }
    Ok(())
}

/// Read until `chunk` is full or the source is exhausted
fn fill_chunk<R: Read>(reader: &mut R, chunk: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < chunk.len() {
        match reader.read(&mut chunk[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(UuError::UnderlyingRead(e)),
        }
    }
    Ok(filled)
}

fn write_header(output: &mut Vec<u8>, name: &str, config: &EncodeConfig) {
    // Same byte length, so encoded_len still holds
    let name = name.replace(['\r', '\n'], "?");
    output.extend_from_slice(format!("{} {} {}", BEGIN, config.mode, name).as_bytes());
    output.extend_from_slice(config.line_ending.as_bytes());
}

fn write_trailer(output: &mut Vec<u8>, eol: &[u8]) {
    output.push(TERMINATOR);
    output.extend_from_slice(eol);
    output.extend_from_slice(END.as_bytes());
    output.extend_from_slice(eol);
}

/// Encode one chunk of at most 45 bytes as a data line
///
/// The final group is zero-padded to 3 bytes; the padding is not counted
/// in the length character.
fn encode_line(chunk: &[u8], eol: &[u8], output: &mut Vec<u8>) {
    debug_assert!(!chunk.is_empty() && chunk.len() <= LINE_BYTES);

    output.push(encode_char(chunk.len() as u8));
    for group in chunk.chunks(3) {
        let mut padded = [0u8; 3];
        padded[..group.len()].copy_from_slice(group);
        output.extend_from_slice(&encode_group(padded));
    }
    output.extend_from_slice(eol);

    trace!("Encoded line of {} bytes", chunk.len());
}
