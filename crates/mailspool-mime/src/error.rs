//! Error types for attachment operations.

/// Result type alias for attachment operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Attachment error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A non-empty transfer encoding that is not in the supported set.
    #[error("Incompatible transfer encoding: {0}")]
    IncompatibleEncoding(String),
}
