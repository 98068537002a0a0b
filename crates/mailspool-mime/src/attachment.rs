//! Attachment value objects.
//!
//! An [`Attachment`] holds the fields a message assembler reads when
//! serializing a MIME part: raw content, display name, mime type, optional
//! content id and transfer encoding, and a content disposition. It computes
//! nothing itself.

use crate::encoding::is_compatible;
use crate::error::{Error, Result};
use std::fmt;

/// Content disposition of an attachment part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Disposition {
    /// Standalone download offered to the recipient.
    #[default]
    Attachment,
    /// Part referenced from within an HTML body via its content id.
    Inline,
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attachment => write!(f, "attachment"),
            Self::Inline => write!(f, "inline"),
        }
    }
}

/// An in-memory mail attachment.
///
/// Constructed once via [`Attachment::from_bytes`] or [`Attachment::inline`];
/// the content id and transfer encoding may be updated afterwards through
/// setters that re-apply the same validation as construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attachment {
    /// Raw content bytes.
    content: Vec<u8>,
    /// Display name of the attachment.
    name: String,
    /// Content id for inline references; empty when not inline-referenced.
    content_id: String,
    /// Mime type of the content.
    mime_type: String,
    /// Content-transfer-encoding name; empty means no encoding applied.
    transfer_encoding: String,
    /// Content disposition.
    disposition: Disposition,
}

/// Default mime type when the caller supplies none.
const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

impl Attachment {
    /// Creates a standalone attachment from in-memory content.
    #[must_use]
    pub fn from_bytes(content: impl Into<Vec<u8>>, name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
            content_id: String::new(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            transfer_encoding: String::new(),
            disposition: Disposition::Attachment,
        }
    }

    /// Creates an inline attachment from in-memory content.
    ///
    /// `content_id` is the id an HTML body uses to reference this part.
    #[must_use]
    pub fn inline(
        content: impl Into<Vec<u8>>,
        name: impl Into<String>,
        content_id: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
            content_id: content_id.into(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            transfer_encoding: String::new(),
            disposition: Disposition::Inline,
        }
    }

    /// Replaces the default mime type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Sets the transfer encoding at construction time.
    ///
    /// Applies the same validation as [`Attachment::set_transfer_encoding`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleEncoding`] if `encoding` is non-empty and
    /// not a supported content-transfer-encoding.
    pub fn with_transfer_encoding(mut self, encoding: impl Into<String>) -> Result<Self> {
        self.set_transfer_encoding(encoding)?;
        Ok(self)
    }

    /// Sets the content id, stored in its string form. Always succeeds.
    pub fn set_content_id(&mut self, content_id: impl ToString) {
        self.content_id = content_id.to_string();
    }

    /// Sets the transfer encoding.
    ///
    /// An empty `encoding` means no encoding is applied and always succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleEncoding`] if `encoding` is non-empty and
    /// not a supported content-transfer-encoding.
    pub fn set_transfer_encoding(&mut self, encoding: impl Into<String>) -> Result<()> {
        let encoding = encoding.into();
        if !encoding.is_empty() && !is_compatible(&encoding) {
            return Err(Error::IncompatibleEncoding(encoding));
        }
        self.transfer_encoding = encoding;
        Ok(())
    }

    /// Returns the raw content bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the content id; empty when not inline-referenced.
    #[must_use]
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// Returns the mime type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the transfer encoding name; empty means no encoding applied.
    #[must_use]
    pub fn transfer_encoding(&self) -> &str {
        &self.transfer_encoding
    }

    /// Returns the content disposition.
    #[must_use]
    pub const fn disposition(&self) -> Disposition {
        self.disposition
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_defaults() {
        let attachment = Attachment::from_bytes(b"report".as_slice(), "report.bin");
        assert_eq!(attachment.content(), b"report");
        assert_eq!(attachment.name(), "report.bin");
        assert_eq!(attachment.content_id(), "");
        assert_eq!(attachment.mime_type(), "application/octet-stream");
        assert_eq!(attachment.transfer_encoding(), "");
        assert_eq!(attachment.disposition(), Disposition::Attachment);
    }

    #[test]
    fn test_inline_disposition_and_content_id() {
        let attachment = Attachment::inline("<png bytes>", "logo.png", "logo@example.com");
        assert_eq!(attachment.disposition(), Disposition::Inline);
        assert_eq!(attachment.content_id(), "logo@example.com");
        assert_eq!(attachment.name(), "logo.png");
    }

    #[test]
    fn test_with_mime_type() {
        let attachment =
            Attachment::inline("<png bytes>", "logo.png", "logo@example.com").with_mime_type("image/png");
        assert_eq!(attachment.mime_type(), "image/png");
    }

    #[test]
    fn test_with_transfer_encoding_valid() {
        let attachment = Attachment::inline("<png bytes>", "logo.png", "logo@example.com")
            .with_transfer_encoding("base64")
            .unwrap();
        assert_eq!(attachment.transfer_encoding(), "base64");
    }

    #[test]
    fn test_with_transfer_encoding_invalid_fails_at_construction() {
        let result = Attachment::inline("<png bytes>", "logo.png", "logo@example.com")
            .with_transfer_encoding("bogus-encoding");
        assert!(matches!(result, Err(Error::IncompatibleEncoding(name)) if name == "bogus-encoding"));
    }

    #[test]
    fn test_set_transfer_encoding_empty_clears() {
        let mut attachment = Attachment::inline("<png bytes>", "logo.png", "logo@example.com")
            .with_transfer_encoding("base64")
            .unwrap();
        attachment.set_transfer_encoding("").unwrap();
        assert_eq!(attachment.transfer_encoding(), "");
    }

    #[test]
    fn test_set_transfer_encoding_rejects_unknown() {
        let mut attachment = Attachment::inline("<png bytes>", "logo.png", "logo@example.com");
        let result = attachment.set_transfer_encoding("bogus-encoding");
        assert!(matches!(result, Err(Error::IncompatibleEncoding(name)) if name == "bogus-encoding"));
        // Stored value is untouched on failure.
        assert_eq!(attachment.transfer_encoding(), "");
    }

    #[test]
    fn test_set_transfer_encoding_round_trip() {
        let mut attachment = Attachment::inline("<png bytes>", "logo.png", "logo@example.com");
        attachment.set_transfer_encoding("quoted-printable").unwrap();
        assert_eq!(attachment.transfer_encoding(), "quoted-printable");
    }

    #[test]
    fn test_set_content_id_stores_string_form() {
        let mut attachment = Attachment::inline("<png bytes>", "logo.png", "logo@example.com");
        attachment.set_content_id(42);
        assert_eq!(attachment.content_id(), "42");
    }

    #[test]
    fn test_disposition_display() {
        assert_eq!(Disposition::Inline.to_string(), "inline");
        assert_eq!(Disposition::Attachment.to_string(), "attachment");
    }

    #[test]
    fn test_error_message_names_offending_encoding() {
        let mut attachment = Attachment::from_bytes("x", "x.bin");
        let err = attachment.set_transfer_encoding("uuencode").unwrap_err();
        assert_eq!(err.to_string(), "Incompatible transfer encoding: uuencode");
    }
}
