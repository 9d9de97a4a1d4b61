//! Error types for encoding operations.

use crate::Encoding;

/// Encoding operation error.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum EncodingError {
    /// The encoding name is not in the supported set.
    #[error("unsupported encoding name: {0:?}")]
    UnsupportedName(String),

    /// The text contains a character the encoding cannot represent.
    #[error("character {ch:?} cannot be represented in {encoding}")]
    Unencodable {
        /// The encoding that rejected the character.
        encoding: Encoding,
        /// The first offending character.
        ch: char,
    },

    /// The text is not valid hexadecimal input.
    #[error("invalid hex input")]
    Hex(#[from] hex::FromHexError),

    /// The text is not valid base64 input.
    #[error("invalid base64 input")]
    Base64(#[from] base64::DecodeError),
}
