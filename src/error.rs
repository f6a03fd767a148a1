//! Error types for packwire.

use thiserror::Error;

/// Main error type for all packet operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PackwireError {
    /// Read or write would run past the end of the allocated storage.
    #[error(
        "Out of bounds: {requested} byte(s) at position {position} exceeds capacity {capacity}"
    )]
    OutOfBounds {
        /// Cursor position at the time of the access.
        position: usize,
        /// Number of bytes the operation needed.
        requested: usize,
        /// Size of the allocated storage.
        capacity: usize,
    },

    /// String is too long for its length prefix.
    #[error("Length {length} exceeds prefix maximum {max}")]
    LengthOverflow {
        /// Byte length of the value being encoded.
        length: usize,
        /// Largest length the prefix can carry.
        max: usize,
    },

    /// Caller-supplied argument makes the operation meaningless.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// String payload is not valid UTF-8.
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Result type alias using PackwireError.
pub type Result<T> = std::result::Result<T, PackwireError>;
