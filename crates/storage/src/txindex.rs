//! MemoryTxIndex: transaction → confirming block time
//!
//! Backs the timestamp annotations of history-expanding exports. Uses
//! `DashMap` so lookups from an export never contend with the indexer.

use dashmap::DashMap;

use namedb_core::{TxId, TxTimestamp, TxTimestampResolver};

/// Concurrent index of known transactions
#[derive(Debug, Default)]
pub struct MemoryTxIndex {
    entries: DashMap<TxId, TxTimestamp>,
}

impl MemoryTxIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transaction confirmed in a block with the given time
    pub fn insert_confirmed(&self, txid: TxId, block_time: i64) {
        self.entries.insert(
            txid,
            TxTimestamp {
                confirmed: true,
                block_time: Some(block_time),
            },
        );
    }

    /// Record a transaction that is known but not in the active chain
    pub fn insert_unconfirmed(&self, txid: TxId) {
        self.entries.insert(
            txid,
            TxTimestamp {
                confirmed: false,
                block_time: None,
            },
        );
    }

    /// Forget a transaction
    pub fn remove(&self, txid: &TxId) -> bool {
        self.entries.remove(txid).is_some()
    }

    /// Number of indexed transactions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TxTimestampResolver for MemoryTxIndex {
    fn lookup(&self, txid: &TxId) -> Option<TxTimestamp> {
        self.entries.get(txid).map(|entry| *entry.value())
    }
}
