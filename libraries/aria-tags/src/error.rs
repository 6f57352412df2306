/// Tag-specific errors
use thiserror::Error;

/// Result type alias using `TagError`
pub type Result<T> = std::result::Result<T, TagError>;

/// Tag error types
///
/// Parsing itself is infallible (malformed tags degrade to partial or empty
/// results); only the file-reading path can fail.
#[derive(Error, Debug)]
pub enum TagError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
