//! # namedb executor
//!
//! The public API for namedb, a query and projection engine over a name
//! registry.
//!
//! This is the only crate users need to import. It provides:
//! - [`Names`] - Typed interface to every name command
//! - [`Command`]/[`Output`] - Low-level command interface (for RPC front ends)
//! - [`Node`] - The stores and resolvers commands run against
//!
//! ## Quick Start
//!
//! ```text
//! use namedb_executor::{Names, NameConfig};
//!
//! let names = Names::in_memory(NameConfig::default(), addresses);
//! names.registry().apply_block(100, updates);
//!
//! let info = names.name_show("d/example", None)?;
//! println!("{} expires in {:?}", info.value.unwrap_or_default(), info.expires_in);
//! ```
//!
//! ## Commands
//!
//! | Command | Returns |
//! |---------|---------|
//! | `name_show` | Current record of a name |
//! | `name_history` | Prior records, then the current one |
//! | `name_scan` | A page of names in key order |
//! | `name_pending` | Name operations in the mempool |
//! | `name_export` | Matching names written to a file |
//! | `name_checkdb` | Registry consistency check |
//! | `namerawtransaction` | A raw transaction with a name operation |

#![warn(missing_docs)]

mod api;
pub mod bridge;
mod command;
mod convert;
mod error;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::{Names, RawNameTransaction};
pub use bridge::Node;
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;

pub use namedb_core::{
    AddressResolver, ExpirationRule, FixedExpiration, Name, NameEncoding, NameOp, NameRecord,
    NameValue, NamecoinExpiration, OutPoint, OwnershipResolver, RawTxCodec, Script, Transaction,
    TxId, TxOut,
};
pub use namedb_engine::{NameConfig, NameInfo, NameQueries, OptionsObject, CONFIG_FILE_NAME};
pub use namedb_storage::{JsonTxCodec, MemoryMempool, MemoryRegistry, MemoryTxIndex};

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
