//! File-level encode/decode helpers
//!
//! Thin async wrappers over the codec that read a whole file, transcode it
//! and write the result next to it (encode) or into an output directory
//! (decode). Each call is independent, so callers may run several at once.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{DecodeConfig, EncodeConfig};
use crate::uuencode::{check_name, decode_with, encode_with};
use crate::{Result, UuError};

/// Suffix appended to the input path by [`encode_file`]
pub const ENCODED_SUFFIX: &str = ".encoded";

/// Path [`encode_file`] writes for `path`: `<path>.encoded`
pub fn encoded_path(path: &Path) -> PathBuf {
    let mut out = OsString::from(path.as_os_str());
    out.push(ENCODED_SUFFIX);
    PathBuf::from(out)
}

/// Resolve the output path for a decoded header name
///
/// Only the final component of `name` is used, so a header cannot direct
/// output outside `out_dir`.
///
/// # Errors
/// [`UuError::UnsafeName`] when `name` has no usable file name (empty, `.`, `..`, `/`)
pub fn output_path_for(name: &str, out_dir: &Path) -> Result<PathBuf> {
    let file_name = Path::new(name)
        .file_name()
        .ok_or_else(|| UuError::UnsafeName(name.to_string()))?;
    Ok(out_dir.join(file_name))
}

/// Display name recorded for `path`: its base name
///
/// # Errors
/// [`UuError::UnsafeName`] when the base name is missing, not UTF-8, or
/// contains a line break
pub fn display_name(path: &Path) -> Result<&str> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| UuError::UnsafeName(path.to_string_lossy().into_owned()))?;
    check_name(name)?;
    Ok(name)
}

/// Encode `path` into `<path>.encoded`
///
/// The header records the file's base name, not the full path.
///
/// # Returns
/// Path of the written file
///
/// # Errors
/// [`UuError::UnsafeName`] if the base name cannot be recorded verbatim
/// (see [`display_name`]); nothing is read or written in that case
pub async fn encode_file(path: impl AsRef<Path>, config: &EncodeConfig) -> Result<PathBuf> {
    let path = path.as_ref();
    let name = display_name(path)?;
    let data = tokio::fs::read(path)
        .await
        .map_err(UuError::UnderlyingRead)?;

    let encoded = encode_with(&data, name, config);

    let out = encoded_path(path);
    tokio::fs::write(&out, &encoded).await?;

    debug!(
        "Encoded {} ({} bytes) to {} ({} bytes)",
        path.display(),
        data.len(),
        out.display(),
        encoded.len()
    );
    Ok(out)
}

/// Decode `path` into `out_dir`, named by the header
///
/// An existing file with the same name is overwritten.
///
/// # Returns
/// Path of the written file
pub async fn decode_file(
    path: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &DecodeConfig,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let input = tokio::fs::read(path)
        .await
        .map_err(UuError::UnderlyingRead)?;

    let decoded = decode_with(&input, config)?;
    let out = output_path_for(&decoded.header.name, out_dir.as_ref())?;
    tokio::fs::write(&out, &decoded.data).await?;

    debug!(
        "Decoded {} to {} ({} bytes, mode {})",
        path.display(),
        out.display(),
        decoded.data.len(),
        decoded.header.mode
    );
    Ok(out)
}
