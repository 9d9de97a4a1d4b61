//! Text encodings for binary buffers.
//!
//! This crate provides the [`Encoding`] enum: a fixed set of text encodings
//! used when moving strings in and out of raw byte buffers. Each encoding
//! converts text to bytes ([`Encoding::encode`]) and renders bytes back as
//! text ([`Encoding::decode`]):
//!
//! - `Ascii` / `Latin1`: one byte per character, rejecting characters
//!   outside the 7-bit / 8-bit range on encode
//! - `Utf8`: the UTF-8 bytes of the text
//! - `Utf16Le`: UTF-16 code units, little-endian
//! - `Hex` / `Base64`: the text *is* the hex/base64 representation, so
//!   encode parses it into bytes and decode renders bytes as hex/base64
//!
//! # Example
//!
//! ```rust
//! use wirebuf_encoding::Encoding;
//!
//! let bytes = Encoding::Hex.encode("deadbeef").unwrap();
//! assert_eq!(bytes, vec![0xde, 0xad, 0xbe, 0xef]);
//! assert_eq!(Encoding::Hex.decode(&bytes), "deadbeef");
//!
//! // Names are validated when parsed, with common aliases accepted
//! let enc: Encoding = "utf-8".parse().unwrap();
//! assert_eq!(enc, Encoding::Utf8);
//! assert!("koi8-r".parse::<Encoding>().is_err());
//! ```

mod encoding;
mod error;

pub use encoding::Encoding;
pub use error::EncodingError;
