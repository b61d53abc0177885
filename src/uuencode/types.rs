/// Header fields from the `begin <mode> <name>` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuHeader {
    /// Permission mode string as written by the encoder (e.g. "644")
    pub mode: String,
    /// Display name; may contain spaces
    pub name: String,
}

impl UuHeader {
    /// Create a header
    pub fn new(mode: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            name: name.into(),
        }
    }

    /// Parse the mode as octal permission bits
    ///
    /// Returns `None` when the recorded mode is not an octal number.
    pub fn mode_bits(&self) -> Option<u32> {
        u32::from_str_radix(&self.mode, 8).ok()
    }
}

/// Complete uudecoded result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuDecoded {
    /// Parsed header information
    pub header: UuHeader,
    /// Decoded binary data
    pub data: Vec<u8>,
}

impl UuDecoded {
    /// Display name from the header
    pub fn name(&self) -> &str {
        &self.header.name
    }

    /// Mode string from the header
    pub fn mode(&self) -> &str {
        &self.header.mode
    }
}
