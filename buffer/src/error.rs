//! Error types for buffer operations.

use wirebuf_encoding::EncodingError;

/// Buffer operation error.
///
/// Every check runs before any mutation: a failing call leaves the store,
/// the logical length, and both cursors exactly as they were.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BufferError {
    /// A requested initial capacity of zero.
    #[error("capacity must be greater than zero")]
    InvalidCapacity,

    /// Construction options supplied both an initial capacity and
    /// initial data.
    #[error("options supply both an initial capacity and initial data")]
    ConflictingOptions,

    /// A cursor or insertion offset past the logical length.
    #[error("offset {offset} is out of bounds for length {len}")]
    OffsetOutOfBounds {
        /// The rejected offset.
        offset: usize,
        /// The logical length at the time of the call.
        len: usize,
    },

    /// A read that would extend past the logical length.
    #[error("reading {requested} bytes at offset {offset} exceeds length {len}")]
    ReadOutOfBounds {
        /// Offset the read would start at.
        offset: usize,
        /// Number of bytes requested.
        requested: usize,
        /// The logical length at the time of the call.
        len: usize,
    },

    /// A text conversion failed; see [`EncodingError`].
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
