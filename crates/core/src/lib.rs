//! Core types and traits for namedb
//!
//! This crate defines the foundational types used throughout the system:
//! - Name, NameValue, TxId, OutPoint, Script: identifiers and payloads
//! - NameRecord / NameHistory: confirmed state and retained prior versions
//! - NameEncoding: ascii / utf8 / hex codec for names and values
//! - ExpirationStatus / ExpirationRule: height-relative expiration
//! - NameOp / Transaction: the slice of the transaction model names need
//! - Traits: collaborator contracts (registry, history, mempool, resolvers)
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod error;
pub mod expiration;
pub mod record;
pub mod traits;
pub mod transaction;
pub mod types;

pub use encoding::{describe_name, EncodingError, NameEncoding, UnknownEncoding};
pub use error::{NameError, NameResult};
pub use expiration::{ExpirationRule, ExpirationStatus, FixedExpiration, NamecoinExpiration};
pub use record::{NameHistory, NameRecord};
pub use traits::{
    AddressResolver, NameCursor, NameHistoryStore, NameRegistry, OwnershipResolver, PendingPool,
    RawTxCodec, TxTimestamp, TxTimestampResolver,
};
pub use transaction::{NameOp, Transaction, TxOut, UpdateKind};
pub use types::{Name, NameValue, OutPoint, Script, TxId};
