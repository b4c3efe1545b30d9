//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. The mapping is
//! deterministic: the same command always produces the same variant.

use namedb_engine::NameInfo;
use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// | Command | Output |
/// |---------|--------|
/// | `NameShow` | `NameInfo` |
/// | `NameHistory`, `NameScan`, `NamePending` | `NameInfos` |
/// | `NameExport` | `Exported` |
/// | `NameCheckDb` | `Bool` |
/// | `NameRawTransaction` | `RawTransaction` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Boolean result
    Bool(bool),

    /// A single projected record
    NameInfo(NameInfo),

    /// Projected records, in the order the command defines
    NameInfos(Vec<NameInfo>),

    /// Result of a file export
    Exported {
        /// Number of names written
        count: u64,
        /// Human-readable summary
        message: String,
    },

    /// A transaction carrying a name operation
    RawTransaction {
        /// Hex serialization of the rewritten transaction
        hex: String,
        /// Hex nonce of a `name_new`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rand: Option<String>,
    },
}
