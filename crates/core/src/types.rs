//! Core identifier types for the name registry
//!
//! - `Name`: the registry key, an ordered byte string
//! - `NameValue`: opaque payload attached to a name
//! - `TxId` / `OutPoint`: locator of the output that last touched a name
//! - `Script`: the controlling address script of a name output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registry key
///
/// Names are compared byte-wise, so iteration order over the registry is the
/// lexicographic order of the raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Name(Vec<u8>);

impl Name {
    /// Create a name from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Name(bytes.into())
    }

    /// Raw bytes of the name
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the empty name (used as "from the beginning" cursor)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Byte-wise prefix test
    #[inline]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }

    /// The name as UTF-8 text, if it is valid UTF-8
    pub fn to_utf8(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Consume and return the inner bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Name(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Name {
    fn from(bytes: Vec<u8>) -> Self {
        Name(bytes)
    }
}

impl AsRef<[u8]> for Name {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Payload attached to a name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NameValue(Vec<u8>);

impl NameValue {
    /// Create a value from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        NameValue(bytes.into())
    }

    /// Raw bytes of the value
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for NameValue {
    fn from(s: &str) -> Self {
        NameValue(s.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for NameValue {
    fn from(bytes: Vec<u8>) -> Self {
        NameValue(bytes)
    }
}

/// 32-byte transaction identifier
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TxId([u8; 32]);

impl TxId {
    /// Create a txid from its raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        TxId(bytes)
    }

    /// Raw bytes of the txid
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a txid from 64 hex digits
    pub fn from_hex(s: &str) -> Option<Self> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).ok()?;
        Some(TxId(bytes))
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TxId({})", self.to_hex())
    }
}

/// Reference to a specific transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OutPoint {
    /// Transaction containing the output
    pub txid: TxId,
    /// Output index inside the transaction
    pub vout: u32,
}

impl OutPoint {
    /// Create a new outpoint
    pub const fn new(txid: TxId, vout: u32) -> Self {
        Self { txid, vout }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.vout)
    }
}

/// Controlling address script of a name output
///
/// Opaque to this crate; rendering to an address string is delegated to an
/// `AddressResolver`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Script(Vec<u8>);

impl Script {
    /// Create a script from raw bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Script(bytes.into())
    }

    /// Raw bytes of the script
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True if the script is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
