//! MemoryMempool: in-memory pool of unconfirmed transactions
//!
//! Readers lock the pool for the duration of a call via
//! [`MemoryMempool::lock`]; the returned guard implements `PendingPool`.

use std::collections::BTreeMap;

use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use namedb_core::{PendingPool, Transaction, TxId};

/// Pool of unconfirmed transactions keyed by txid
#[derive(Debug, Default)]
pub struct MemoryMempool {
    txs: Mutex<BTreeMap<TxId, Transaction>>,
}

impl MemoryMempool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction, replacing any with the same txid
    pub fn add(&self, tx: Transaction) {
        debug!(target: "namedb::mempool", txid = %tx.txid, "Transaction added");
        self.txs.lock().insert(tx.txid, tx);
    }

    /// Remove a transaction (e.g. once it is confirmed)
    pub fn remove(&self, txid: &TxId) -> Option<Transaction> {
        self.txs.lock().remove(txid)
    }

    /// Number of transactions in the pool
    pub fn len(&self) -> usize {
        self.txs.lock().len()
    }

    /// True if the pool is empty
    pub fn is_empty(&self) -> bool {
        self.txs.lock().is_empty()
    }

    /// Lock the pool for a consistent read
    pub fn lock(&self) -> MempoolGuard<'_> {
        MempoolGuard {
            txs: self.txs.lock(),
        }
    }
}

/// Locked view of a [`MemoryMempool`]
pub struct MempoolGuard<'a> {
    txs: MutexGuard<'a, BTreeMap<TxId, Transaction>>,
}

impl PendingPool for MempoolGuard<'_> {
    fn transactions(&self) -> Vec<Transaction> {
        self.txs.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(byte: u8) -> Transaction {
        Transaction::new(TxId::from_bytes([byte; 32]), vec![], vec![])
    }

    #[test]
    fn test_add_and_remove() {
        let pool = MemoryMempool::new();
        assert!(pool.is_empty());
        pool.add(tx(1));
        pool.add(tx(2));
        assert_eq!(pool.len(), 2);
        assert!(pool.remove(&TxId::from_bytes([1; 32])).is_some());
        assert_eq!(pool.len(), 1);
        assert!(pool.remove(&TxId::from_bytes([1; 32])).is_none());
    }

    #[test]
    fn test_add_same_txid_replaces() {
        let pool = MemoryMempool::new();
        pool.add(tx(1));
        pool.add(tx(1));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_guard_snapshot() {
        let pool = MemoryMempool::new();
        pool.add(tx(3));
        pool.add(tx(4));
        let guard = pool.lock();
        assert_eq!(guard.transactions().len(), 2);
    }
}
