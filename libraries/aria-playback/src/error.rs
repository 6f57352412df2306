//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// The host refused to start playback (autoplay policy, device busy).
    /// The controller swallows this; it exists for output implementations.
    #[error("Output refused to play: {0}")]
    OutputRefused(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
