//! The supported encoding set and its text/byte conversions.

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::EncodingError;

/// A text encoding understood by the buffer layer.
///
/// The set is fixed; unknown names fail to parse. `Hex` and `Base64` treat
/// the *text* as the encoded form: encoding parses hex digits or base64
/// into raw bytes, decoding renders raw bytes as hex or base64 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// 7-bit ASCII. Decoding masks each byte to 7 bits.
    Ascii,
    /// UTF-8. Decoding replaces invalid sequences with U+FFFD.
    #[serde(alias = "utf-8")]
    Utf8,
    /// UTF-16, little-endian code units. A trailing odd byte is dropped
    /// when decoding.
    #[serde(alias = "utf-16le", alias = "ucs2", alias = "ucs-2")]
    Utf16Le,
    /// Standard base64 with padding.
    Base64,
    /// Lowercase hexadecimal.
    Hex,
    /// ISO-8859-1: code points U+0000..=U+00FF map 1:1 to bytes.
    #[serde(alias = "binary")]
    Latin1,
}

impl Encoding {
    /// Canonical lowercase name of the encoding.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Utf8 => "utf8",
            Encoding::Utf16Le => "utf16le",
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
            Encoding::Latin1 => "latin1",
        }
    }

    /// Converts text into its byte representation under this encoding.
    ///
    /// Fails without producing any bytes if the text cannot be represented
    /// (out-of-range characters for `Ascii`/`Latin1`, malformed digit
    /// strings for `Hex`/`Base64`).
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            Encoding::Ascii => {
                if let Some(ch) = text.chars().find(|c| !c.is_ascii()) {
                    return Err(EncodingError::Unencodable {
                        encoding: *self,
                        ch,
                    });
                }
                Ok(text.as_bytes().to_vec())
            }
            Encoding::Utf8 => Ok(text.as_bytes().to_vec()),
            Encoding::Utf16Le => Ok(text
                .encode_utf16()
                .flat_map(|unit| unit.to_le_bytes())
                .collect()),
            Encoding::Base64 => Ok(STANDARD.decode(text)?),
            Encoding::Hex => Ok(hex::decode(text)?),
            Encoding::Latin1 => {
                let mut out = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    let cp = ch as u32;
                    if cp > 0xFF {
                        return Err(EncodingError::Unencodable {
                            encoding: *self,
                            ch,
                        });
                    }
                    out.push(cp as u8);
                }
                Ok(out)
            }
        }
    }

    /// Renders bytes as text under this encoding.
    ///
    /// Total: every byte sequence decodes to some string. `Utf8` and
    /// `Utf16Le` substitute U+FFFD for invalid data, `Ascii` masks the
    /// high bit, and `Hex`/`Base64` can represent any bytes by definition.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::Ascii => bytes.iter().map(|b| (b & 0x7F) as char).collect(),
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Utf16Le => {
                let units: Vec<u16> = bytes
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
            Encoding::Latin1 => bytes.iter().map(|&b| b as char).collect(),
        }
    }

    /// Returns the number of bytes [`encode`](Self::encode) would produce.
    pub fn byte_len(&self, text: &str) -> Result<usize, EncodingError> {
        match self {
            Encoding::Utf8 => Ok(text.len()),
            Encoding::Utf16Le => Ok(text.encode_utf16().count() * 2),
            // Range checks (ascii/latin1) and padding rules (hex/base64)
            // make a closed-form length unreliable, so convert for real.
            Encoding::Ascii | Encoding::Latin1 | Encoding::Base64 | Encoding::Hex => {
                self.encode(text).map(|b| b.len())
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(Encoding::Ascii),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            "base64" => Ok(Encoding::Base64),
            "hex" => Ok(Encoding::Hex),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            _ => Err(EncodingError::UnsupportedName(s.to_string())),
        }
    }
}
