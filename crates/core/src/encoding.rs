//! Text encodings for names and values
//!
//! Names and values are raw byte strings on chain. Users see them through one
//! of three encodings:
//!
//! - **ascii**: printable ASCII only (`0x20..0x80`)
//! - **utf8**: any valid UTF-8
//! - **hex**: lowercase hex digits (decode accepts either case)
//!
//! `decode` turns user text into bytes and is used at the command boundary,
//! where a failure aborts the call. `encode` turns stored bytes into text and is
//! used during projection, where a failure is downgraded to an `*_error` field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Encoding used to present a name or value as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameEncoding {
    /// Printable ASCII
    Ascii,
    /// UTF-8 text
    Utf8,
    /// Hex digits
    Hex,
}

impl NameEncoding {
    /// Canonical string form (`"ascii"`, `"utf8"`, `"hex"`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            NameEncoding::Ascii => "ascii",
            NameEncoding::Utf8 => "utf8",
            NameEncoding::Hex => "hex",
        }
    }
}

impl fmt::Display for NameEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown encoding name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid name/value encoding: {0}")]
pub struct UnknownEncoding(pub String);

impl FromStr for NameEncoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(NameEncoding::Ascii),
            "utf8" => Ok(NameEncoding::Utf8),
            "hex" => Ok(NameEncoding::Hex),
            other => Err(UnknownEncoding(other.to_string())),
        }
    }
}

/// Data that is not representable in the requested encoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid data for {encoding}")]
pub struct EncodingError {
    encoding: NameEncoding,
}

impl EncodingError {
    fn new(encoding: NameEncoding) -> Self {
        Self { encoding }
    }

    /// The encoding that rejected the data
    pub fn encoding(&self) -> NameEncoding {
        self.encoding
    }
}

#[inline]
fn is_ascii_allowed(b: u8) -> bool {
    (0x20..0x80).contains(&b)
}

/// Decode user-supplied text into raw bytes
///
/// # Errors
///
/// Returns `EncodingError` if the text is not valid for `encoding`: a byte
/// outside the printable range for ascii, or anything but an even number of
/// hex digits for hex. Every `&str` is valid utf8.
pub fn decode(text: &str, encoding: NameEncoding) -> Result<Vec<u8>, EncodingError> {
    match encoding {
        NameEncoding::Ascii => {
            if text.bytes().all(is_ascii_allowed) {
                Ok(text.as_bytes().to_vec())
            } else {
                Err(EncodingError::new(encoding))
            }
        }
        NameEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        NameEncoding::Hex => hex::decode(text).map_err(|_| EncodingError::new(encoding)),
    }
}

/// Encode raw bytes as text
///
/// Total for hex. Fails for ascii if a byte is outside the printable range and
/// for utf8 if the bytes are not valid UTF-8.
pub fn encode(bytes: &[u8], encoding: NameEncoding) -> Result<String, EncodingError> {
    match encoding {
        NameEncoding::Ascii => {
            if bytes.iter().copied().all(is_ascii_allowed) {
                // All bytes are < 0x80, hence valid UTF-8.
                String::from_utf8(bytes.to_vec()).map_err(|_| EncodingError::new(encoding))
            } else {
                Err(EncodingError::new(encoding))
            }
        }
        NameEncoding::Utf8 => {
            String::from_utf8(bytes.to_vec()).map_err(|_| EncodingError::new(encoding))
        }
        NameEncoding::Hex => Ok(hex::encode(bytes)),
    }
}

/// Render a name for use inside an error or log message
pub fn describe_name(bytes: &[u8], encoding: NameEncoding) -> String {
    match encode(bytes, encoding) {
        Ok(text) => format!("'{}'", text),
        Err(_) => "<invalid name>".to_string(),
    }
}
