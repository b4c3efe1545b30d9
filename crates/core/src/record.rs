//! Name records and their retained history
//!
//! A `NameRecord` is the confirmed state of a name: its value, the output that
//! last updated it, the controlling script and the height of that update.
//! When a name is updated the previous record is appended to its
//! `NameHistory`, but only if history retention is enabled.

use serde::{Deserialize, Serialize};

use crate::types::{NameValue, OutPoint, Script};

/// Confirmed state of a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Current value
    pub value: NameValue,
    /// Output of the last update
    pub outpoint: OutPoint,
    /// Controlling address script
    pub address: Script,
    /// Height of the block that confirmed the last update
    pub height: u32,
}

impl NameRecord {
    /// Create a new record
    pub fn new(value: NameValue, outpoint: OutPoint, address: Script, height: u32) -> Self {
        Self {
            value,
            outpoint,
            address,
            height,
        }
    }
}

/// Prior records of a name, oldest first
///
/// Append-only. Empty for names that were never updated, and for every name
/// when retention is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NameHistory {
    entries: Vec<NameRecord>,
}

impl NameHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a superseded record
    pub fn push(&mut self, record: NameRecord) {
        self.entries.push(record);
    }

    /// Retained records, oldest first
    pub fn entries(&self) -> &[NameRecord] {
        &self.entries
    }

    /// Number of retained records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume and return the records, oldest first
    pub fn into_entries(self) -> Vec<NameRecord> {
        self.entries
    }
}

impl From<Vec<NameRecord>> for NameHistory {
    fn from(entries: Vec<NameRecord>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for NameHistory {
    type Item = NameRecord;
    type IntoIter = std::vec::IntoIter<NameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
