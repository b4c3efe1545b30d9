//! Collaborator traits
//!
//! The name query engine reads chain state it does not own. Each external
//! provider is reached through one narrow trait defined here, so that the
//! engine can be driven by the node's real chain state or by the in-memory
//! stores in `namedb-storage`.
//!
//! | Trait | Provides |
//! |-------|----------|
//! | `NameRegistry` | point lookup, ordered cursor, chain height |
//! | `NameHistoryStore` | retained prior records of a name |
//! | `PendingPool` | snapshot of unconfirmed transactions |
//! | `AddressResolver` | display form of a controlling script |
//! | `OwnershipResolver` | "is this script ours" (optional capability) |
//! | `TxTimestampResolver` | block time of a confirming transaction |
//! | `RawTxCodec` | hex (de)serialization of raw transactions |

use crate::error::NameResult;
use crate::record::{NameHistory, NameRecord};
use crate::transaction::Transaction;
use crate::types::{Name, Script, TxId};

/// Ordered iterator over current name records
///
/// A cursor starts before the first name. `seek` repositions it so that the
/// next call to `next` yields the first name `>= start`.
pub trait NameCursor {
    /// Position at the first name `>= start` (the empty name means the beginning)
    fn seek(&mut self, start: &Name);

    /// Yield the next `(name, record)` pair in ascending name order
    fn next(&mut self) -> Option<(Name, NameRecord)>;
}

/// Read view of the committed name registry
///
/// Implementations are expected to represent one consistent snapshot for the
/// lifetime of the borrow: no update may become visible halfway through a
/// scan.
pub trait NameRegistry {
    /// Current record of `name`, if it exists
    fn get_name(&self, name: &Name) -> Option<NameRecord>;

    /// Fresh cursor positioned before the first name
    fn iterate_names(&self) -> Box<dyn NameCursor + '_>;

    /// Height of the current chain tip
    fn height(&self) -> u32;

    /// True while the node is still catching up with the network
    fn is_initial_download(&self) -> bool {
        false
    }
}

/// Retained history of names
pub trait NameHistoryStore {
    /// Prior records of `name`, oldest first; empty when nothing is retained
    fn get_history(&self, name: &Name) -> NameHistory;
}

/// Snapshot of unconfirmed transactions
pub trait PendingPool {
    /// Transactions currently in the pool, in no particular order
    fn transactions(&self) -> Vec<Transaction>;
}

/// Renders a controlling script as an address string
pub trait AddressResolver: Send + Sync {
    /// Address form of `script`, or `None` for a non-standard script
    fn display(&self, script: &Script) -> Option<String>;
}

impl<F> AddressResolver for F
where
    F: Fn(&Script) -> Option<String> + Send + Sync,
{
    fn display(&self, script: &Script) -> Option<String> {
        self(script)
    }
}

/// Decides whether a script is controlled by the local key store
///
/// Optional: a node without local key management simply has no instance, and
/// results then omit the ownership flag entirely.
pub trait OwnershipResolver: Send + Sync {
    /// True if the local key store can spend outputs to `script`
    fn is_mine(&self, script: &Script) -> bool;
}

/// Confirmation details of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxTimestamp {
    /// Whether the transaction is in the active chain
    pub confirmed: bool,
    /// Block time in seconds since epoch, when confirmed
    pub block_time: Option<i64>,
}

/// Looks up the confirming block of a transaction
pub trait TxTimestampResolver: Send + Sync {
    /// Details for `txid`, or `None` if the transaction is unknown
    fn lookup(&self, txid: &TxId) -> Option<TxTimestamp>;
}

/// Hex serialization of raw transactions
pub trait RawTxCodec: Send + Sync {
    /// Parse a hex-encoded raw transaction
    fn decode_hex(&self, hex: &str) -> Option<Transaction>;

    /// Serialize a transaction to hex
    ///
    /// Fails with `NameError::Serialization` when the transaction cannot
    /// be written.
    fn encode_hex(&self, tx: &Transaction) -> NameResult<String>;
}
