//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//!
//! The message of every variant is what an RPC front end would report.

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Validation | `InvalidParameter`, `InvalidEncoding` | Bad input, nothing was read |
/// | Not Found | `NameNotFound` | No current record |
/// | State | `FeatureDisabled`, `InitialDownload` | Node cannot answer yet |
/// | Dependency | `DependencyUnavailable` | Missing collaborator or lookup |
/// | System | `Io`, `Serialization`, `Internal` | Infrastructure errors |
///
/// # Example
///
/// ```ignore
/// use namedb_executor::{Command, Error};
///
/// match executor.execute(Command::NameShow { name: "d/x".into(), options: None }) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::NameNotFound { name }) => println!("{name} is free"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Validation ====================
    /// Malformed or out-of-range argument
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// Name or value text not valid under the chosen encoding
    #[error("{reason}")]
    InvalidEncoding { reason: String },

    // ==================== Not Found ====================
    /// The name has no current record
    #[error("name not found: {name}")]
    NameNotFound { name: String },

    // ==================== State ====================
    /// The command needs a feature that is switched off
    #[error("{feature} is not enabled")]
    FeatureDisabled { feature: String },

    /// The registry is still catching up with the chain
    #[error("registry is still downloading blocks")]
    InitialDownload,

    // ==================== Dependency ====================
    /// A collaborator is missing or could not answer
    #[error("dependency unavailable: {reason}")]
    DependencyUnavailable { reason: String },

    // ==================== System ====================
    /// I/O error
    #[error("I/O error: {reason}")]
    Io { reason: String },

    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// Unexpected executor state
    #[error("internal error: {reason}")]
    Internal { reason: String },
}
