//! Content-transfer-encoding names.
//!
//! The fixed table of encodings a message assembler is able to apply to a
//! part body. Attachment setters consult [`is_compatible`] before accepting
//! an encoding name.

use std::fmt;

/// Transfer encoding types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferEncoding {
    /// 7-bit ASCII.
    SevenBit,
    /// 8-bit binary.
    EightBit,
    /// Base64 encoding.
    Base64,
    /// Quoted-Printable encoding.
    QuotedPrintable,
    /// Binary (no encoding).
    Binary,
}

impl TransferEncoding {
    /// Looks up a transfer encoding by its header token.
    ///
    /// Matching is case-insensitive; unknown names return `None`.
    #[must_use]
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "7bit" => Some(Self::SevenBit),
            "8bit" => Some(Self::EightBit),
            "base64" => Some(Self::Base64),
            "quoted-printable" => Some(Self::QuotedPrintable),
            "binary" => Some(Self::Binary),
            _ => None,
        }
    }

    /// Returns the header token for this encoding.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SevenBit => "7bit",
            Self::EightBit => "8bit",
            Self::Base64 => "base64",
            Self::QuotedPrintable => "quoted-printable",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for TransferEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Checks whether `name` is a supported content-transfer-encoding.
#[must_use]
pub fn is_compatible(name: &str) -> bool {
    TransferEncoding::from_name(name).is_some()
}
