//! High-level typed wrapper for the Executor.
//!
//! The [`Names`] struct provides a Rust API that wraps the [`Executor`] and
//! [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```text
//! use namedb_executor::{Names, NameConfig};
//!
//! let names = Names::in_memory(NameConfig::default(), addresses);
//! names.registry().apply_block(1, updates);
//!
//! let info = names.name_show("d/example", None)?;
//! let page = names.name_scan(Some("d/"), Some(10), None)?;
//! ```

mod names;

pub use names::RawNameTransaction;

use std::path::Path;
use std::sync::Arc;

use namedb_core::{AddressResolver, NamecoinExpiration};
use namedb_engine::{NameConfig, NameQueries};
use namedb_storage::{MemoryMempool, MemoryRegistry, MemoryTxIndex};

use crate::bridge::Node;
use crate::{Executor, Result};

/// High-level typed wrapper for name registry operations.
#[derive(Clone)]
pub struct Names {
    executor: Executor,
}

impl Names {
    /// Wrap an existing node.
    pub fn new(node: Node) -> Self {
        Self {
            executor: Executor::new(node),
        }
    }

    /// Fresh in-memory registry, mempool and index using Namecoin's
    /// expiration schedule.
    ///
    /// History is retained when `config.name_history` is set.
    pub fn in_memory(config: NameConfig, addresses: Arc<dyn AddressResolver>) -> Self {
        let registry = Arc::new(MemoryRegistry::new(config.name_history));
        let queries = NameQueries::new(config, Arc::new(NamecoinExpiration), addresses);
        Self::new(Node::new(
            queries,
            registry,
            Arc::new(MemoryMempool::new()),
            Arc::new(MemoryTxIndex::new()),
        ))
    }

    /// Like [`Names::in_memory`], with configuration read from a TOML file.
    pub fn from_config_file(path: &Path, addresses: Arc<dyn AddressResolver>) -> Result<Self> {
        let config = crate::convert::convert_result(NameConfig::from_file(path))?;
        Ok(Self::in_memory(config, addresses))
    }

    /// The underlying executor, for command-level access.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// The registry commands read from.
    pub fn registry(&self) -> &MemoryRegistry {
        &self.executor.node().registry
    }

    /// The mempool `name_pending` reads from.
    pub fn mempool(&self) -> &MemoryMempool {
        &self.executor.node().mempool
    }

    /// The block-time index used by history exports.
    pub fn tx_index(&self) -> &MemoryTxIndex {
        &self.executor.node().tx_index
    }
}
