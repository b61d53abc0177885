//! Encoder and decoder configuration

use crate::uuencode::DEFAULT_MODE;

/// Line terminator written after every encoded line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`, for transports that require it (mail, NNTP)
    Crlf,
}

impl LineEnding {
    /// Terminator bytes
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::Crlf => b"\r\n",
        }
    }
}

/// Encoder configuration
///
/// # Example
///
/// ```
/// use uucodec::{EncodeConfig, LineEnding};
///
/// // Classic output: mode 644, LF line endings
/// let config = EncodeConfig::default();
/// assert_eq!(config.mode, "644");
///
/// // Record a different mode and use CRLF
/// let config = EncodeConfig::with_mode("755").line_ending(LineEnding::Crlf);
/// assert_eq!(config.line_ending, LineEnding::Crlf);
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodeConfig {
    /// Permission mode string recorded in the header
    ///
    /// Written verbatim. No check is made that it is a valid octal mode.
    #[cfg_attr(feature = "serde", serde(default = "default_mode"))]
    pub mode: String,

    /// Terminator for every emitted line
    #[cfg_attr(feature = "serde", serde(default))]
    pub line_ending: LineEnding,
}

#[cfg(feature = "serde")]
fn default_mode() -> String {
    DEFAULT_MODE.to_string()
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            line_ending: LineEnding::Lf,
        }
    }
}

impl EncodeConfig {
    /// Create a configuration recording `mode` in the header
    pub fn with_mode(mode: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            ..Self::default()
        }
    }

    /// Set the line terminator
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Decoder configuration
///
/// The default is strict about the header position and lenient about the
/// closing `end` line.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodeConfig {
    /// Skip any lines preceding the first `begin ` line
    ///
    /// Useful for encoded payloads embedded in mail or news bodies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skip_preamble: bool,

    /// Fail with `TruncatedInput` unless the terminator is followed by `end`
    #[cfg_attr(feature = "serde", serde(default))]
    pub require_end: bool,
}

impl DecodeConfig {
    /// Lenient configuration for embedded payloads: skips the preamble
    pub fn embedded() -> Self {
        Self {
            skip_preamble: true,
            require_end: false,
        }
    }

    /// Strict configuration: header first, `end` line required
    pub fn strict() -> Self {
        Self {
            skip_preamble: false,
            require_end: true,
        }
    }
}
