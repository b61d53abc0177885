use std::io::{BufRead, Read};

use tracing::{debug, trace, warn};

use crate::config::DecodeConfig;
use crate::{Result, UuError};

use super::block::{decode_char, decode_group, is_valid_char};
use super::types::{UuDecoded, UuHeader};
use super::{BEGIN, END, LINE_BYTES, MAX_LINE_LEN};

/// Decode a uuencoded document with the default configuration
///
/// # Arguments
/// * `input` - Encoded document including the `begin` header and `` ` `` terminator
///
/// # Returns
/// Decoded binary data with the header's mode and display name
///
/// # Example
/// ```
/// let decoded = uucodec::uuencode::decode(b"begin 644 cat.txt\n#0V%T\n`\nend\n")?;
/// assert_eq!(decoded.data, b"Cat");
/// assert_eq!(decoded.header.name, "cat.txt");
/// # Ok::<(), uucodec::UuError>(())
/// ```
pub fn decode(input: &[u8]) -> Result<UuDecoded> {
    decode_with(input, &DecodeConfig::default())
}

/// Decode a uuencoded document using the given configuration
pub fn decode_with(input: &[u8], config: &DecodeConfig) -> Result<UuDecoded> {
    decode_reader(input, config)
}

/// Decode a uuencoded document from a buffered reader
///
/// Reading stops at the terminator line (and the `end` line after it), so
/// anything following the document is left unread.
///
/// # Errors
/// * [`UuError::MalformedHeader`] - missing `begin`, mode or name
/// * [`UuError::TruncatedInput`] - input ends before the terminator, or a
///   line is shorter than its length character declares
/// * [`UuError::InvalidLength`] / [`UuError::InvalidCharacter`] - bytes
///   outside the printable range
/// * [`UuError::LineTooLong`] - no line break within [`MAX_LINE_LEN`] bytes
/// * [`UuError::UnderlyingRead`] - `reader` failed
pub fn decode_reader<R: BufRead>(reader: R, config: &DecodeConfig) -> Result<UuDecoded> {
    let mut lines = LineReader::new(reader);

    let header = read_header(&mut lines, config)?;
    debug!("uuencode header: mode={} name={}", header.mode, header.name);

    let mut data = Vec::new();
    let mut data_lines = 0usize;
    loop {
        let expected = lines.number() + 1;
        let Some((number, line)) = lines.next_line()? else {
            return Err(UuError::TruncatedInput {
                line: expected,
                reason: "input ended before the terminator line".to_string(),
            });
        };

        if decode_line(number, line, &mut data)? == LineKind::Terminator {
            break;
        }
        data_lines += 1;
    }

    read_end(&mut lines, config)?;

    debug!("Decoded {} bytes from {} data lines", data.len(), data_lines);
    Ok(UuDecoded { header, data })
}

#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    Data,
    Terminator,
}

/// Line splitter that strips `\n` / `\r\n` and counts lines
struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    number: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(128),
            number: 0,
        }
    }

    /// Number of lines read so far
    fn number(&self) -> usize {
        self.number
    }

    fn next_line(&mut self) -> Result<Option<(usize, &[u8])>> {
        self.buf.clear();
        let n = (&mut self.reader)
            .take(MAX_LINE_LEN as u64)
            .read_until(b'\n', &mut self.buf)
            .map_err(UuError::UnderlyingRead)?;
        if n == 0 {
            return Ok(None);
        }
        self.number += 1;

        if n == MAX_LINE_LEN && !self.buf.ends_with(b"\n") {
            return Err(UuError::LineTooLong {
                line: self.number,
                limit: MAX_LINE_LEN,
            });
        }

        let mut line = &self.buf[..];
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        Ok(Some((self.number, line)))
    }
}

fn read_header<R: BufRead>(lines: &mut LineReader<R>, config: &DecodeConfig) -> Result<UuHeader> {
    if !config.skip_preamble {
        let Some((_, line)) = lines.next_line()? else {
            return Err(UuError::MalformedHeader("empty input".to_string()));
        };
        return parse_begin(line);
    }

    while let Some((number, line)) = lines.next_line()? {
        if line.starts_with(b"begin ") {
            if number > 1 {
                trace!("Skipped {} preamble lines", number - 1);
            }
            return parse_begin(line);
        }
    }
    Err(UuError::MalformedHeader("no begin line found".to_string()))
}

/// Parse `begin <mode> <name>`
///
/// The name is everything after the second space, so it may itself
/// contain spaces.
fn parse_begin(line: &[u8]) -> Result<UuHeader> {
    let mut parts = line.splitn(3, |&b| b == b' ');

    if parts.next() != Some(BEGIN.as_bytes()) {
        return Err(UuError::MalformedHeader(format!(
            "expected '{}', got {:?}",
            BEGIN,
            String::from_utf8_lossy(line)
        )));
    }

    let mode = parts
        .next()
        .filter(|mode| !mode.is_empty())
        .ok_or_else(|| UuError::MalformedHeader("missing mode".to_string()))?;
    let name = parts
        .next()
        .ok_or_else(|| UuError::MalformedHeader("missing name".to_string()))?;

    Ok(UuHeader::new(
        String::from_utf8_lossy(mode),
        String::from_utf8_lossy(name),
    ))
}

/// Decode one data line, appending exactly the declared number of bytes
fn decode_line(number: usize, line: &[u8], output: &mut Vec<u8>) -> Result<LineKind> {
    let Some((&length_char, payload)) = line.split_first() else {
        return Err(UuError::TruncatedInput {
            line: number,
            reason: "empty data line".to_string(),
        });
    };

    if !is_valid_char(length_char) {
        return Err(UuError::InvalidLength {
            line: number,
            value: length_char,
        });
    }

    let declared = decode_char(length_char) as usize;
    if declared == 0 {
        return Ok(LineKind::Terminator);
    }
    if declared > LINE_BYTES {
        return Err(UuError::InvalidLength {
            line: number,
            value: length_char,
        });
    }

    let needed = declared.div_ceil(3) * 4;
    if payload.len() < needed {
        return Err(UuError::TruncatedInput {
            line: number,
            reason: format!(
                "{} bytes declared, needs {} characters, found {}",
                declared,
                needed,
                payload.len()
            ),
        });
    }
    if payload.len() > needed {
        warn!(
            "Ignoring {} trailing characters on line {}",
            payload.len() - needed,
            number
        );
    }

    let payload = &payload[..needed];
    if let Some(&byte) = payload.iter().find(|&&c| !is_valid_char(c)) {
        return Err(UuError::InvalidCharacter { line: number, byte });
    }

    let start = output.len();
    for group in payload.chunks_exact(4) {
        output.extend_from_slice(&decode_group([group[0], group[1], group[2], group[3]]));
    }
    // Drop the zero padding of the final group
    output.truncate(start + declared);

    Ok(LineKind::Data)
}

fn read_end<R: BufRead>(lines: &mut LineReader<R>, config: &DecodeConfig) -> Result<()> {
    let expected = lines.number() + 1;
    match lines.next_line()? {
        Some((_, line)) if line.trim_ascii_end() == END.as_bytes() => Ok(()),
        Some((number, line)) => {
            if config.require_end {
                return Err(UuError::TruncatedInput {
                    line: number,
                    reason: format!("expected '{}' line", END),
                });
            }
            warn!(
                "Expected '{}' after terminator, found {:?}",
                END,
                String::from_utf8_lossy(line)
            );
            Ok(())
        }
        None => {
            if config.require_end {
                return Err(UuError::TruncatedInput {
                    line: expected,
                    reason: format!("missing '{}' line", END),
                });
            }
            debug!("Document has no '{}' line", END);
            Ok(())
        }
    }
}
