//! # mailspool-mime
//!
//! Attachment value objects for building MIME mail.
//!
//! ## Features
//!
//! - **Attachments**: in-memory attachment records, standalone or inline
//! - **Transfer encodings**: the fixed table of supported
//!   content-transfer-encoding names, with validation on assignment
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailspool_mime::Attachment;
//!
//! let logo = Attachment::inline(png_bytes, "logo.png", "logo@example.com")
//!     .with_mime_type("image/png")
//!     .with_transfer_encoding("base64")?;
//!
//! assert_eq!(logo.transfer_encoding(), "base64");
//! ```
//!
//! Unsupported encodings are rejected at the point of assignment:
//!
//! ```ignore
//! use mailspool_mime::{Attachment, Error};
//!
//! let mut record = Attachment::from_bytes(data, "report.bin");
//! assert!(matches!(
//!     record.set_transfer_encoding("uuencode"),
//!     Err(Error::IncompatibleEncoding(_))
//! ));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod error;

pub mod encoding;

pub use attachment::{Attachment, Disposition};
pub use encoding::TransferEncoding;
pub use error::{Error, Result};
