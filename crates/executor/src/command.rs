//! Command enum defining all name registry operations.
//!
//! Commands are the instruction set of the registry. Every RPC-level name
//! operation is one variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for RPC front ends
//! - **Pure data**: No closures or executable code

use std::path::PathBuf;

use namedb_engine::OptionsObject;
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// Most commands take an `options` object with the same keys as the
/// corresponding RPC (`nameEncoding`, `valueEncoding`, `minConf`, ...).
/// An omitted object behaves like an empty one.
///
/// # Example
///
/// ```ignore
/// use namedb_executor::Command;
///
/// let cmd = Command::NameScan {
///     start: Some("d/".into()),
///     count: Some(10),
///     options: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Queries ====================
    /// Current record of a name.
    /// Returns: `Output::NameInfo`
    NameShow {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<OptionsObject>,
    },

    /// All prior records of a name followed by the current one.
    /// Returns: `Output::NameInfos`
    NameHistory {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<OptionsObject>,
    },

    /// Names in key order starting at `start`.
    /// Returns: `Output::NameInfos`
    NameScan {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<OptionsObject>,
    },

    /// Name operations waiting in the mempool.
    /// Returns: `Output::NameInfos`
    NamePending {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<OptionsObject>,
    },

    /// Write names matching `regexp` to a JSON file.
    /// Returns: `Output::Exported`
    NameExport {
        regexp: String,
        path: PathBuf,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        options: Option<OptionsObject>,
    },

    // ==================== Maintenance ====================
    /// Check the registry for internal consistency.
    /// Returns: `Output::Bool`
    NameCheckDb,

    // ==================== Transactions ====================
    /// Attach a name operation to output `vout` of a raw transaction.
    /// Returns: `Output::RawTransaction`
    NameRawTransaction {
        hex: String,
        vout: u32,
        name_op: serde_json::Value,
    },
}

impl Command {
    /// RPC-style name of the command, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::NameShow { .. } => "name_show",
            Command::NameHistory { .. } => "name_history",
            Command::NameScan { .. } => "name_scan",
            Command::NamePending { .. } => "name_pending",
            Command::NameExport { .. } => "name_export",
            Command::NameCheckDb => "name_checkdb",
            Command::NameRawTransaction { .. } => "namerawtransaction",
        }
    }

    /// Whether the command has effects outside the registry.
    ///
    /// Only exports write (to the filesystem); nothing mutates the registry.
    pub fn is_write(&self) -> bool {
        matches!(self, Command::NameExport { .. })
    }
}
