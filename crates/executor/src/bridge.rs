//! Bridge module: the chain-side collaborators a command runs against.
//!
//! [`Node`] bundles the query engine with the stores it reads. Handlers take
//! a view of each store for the duration of one command, so a single
//! command never observes two different chain states.

use std::sync::Arc;

use namedb_core::RawTxCodec;
use namedb_engine::NameQueries;
use namedb_storage::{MemoryMempool, MemoryRegistry, MemoryTxIndex};

/// Everything a command may touch.
#[derive(Clone)]
pub struct Node {
    /// Query engine with its configuration and resolvers
    pub queries: NameQueries,
    /// Name registry, with history when enabled
    pub registry: Arc<MemoryRegistry>,
    /// Unconfirmed transactions
    pub mempool: Arc<MemoryMempool>,
    /// Confirming block times, for history exports
    pub tx_index: Arc<MemoryTxIndex>,
    /// Raw transaction serializer; `namerawtransaction` needs one
    pub raw_codec: Option<Arc<dyn RawTxCodec>>,
}

impl Node {
    /// Create a node without a raw transaction codec.
    pub fn new(
        queries: NameQueries,
        registry: Arc<MemoryRegistry>,
        mempool: Arc<MemoryMempool>,
        tx_index: Arc<MemoryTxIndex>,
    ) -> Self {
        Self {
            queries,
            registry,
            mempool,
            tx_index,
            raw_codec: None,
        }
    }

    /// Attach a raw transaction codec.
    pub fn with_raw_codec(mut self, codec: Arc<dyn RawTxCodec>) -> Self {
        self.raw_codec = Some(codec);
        self
    }
}
