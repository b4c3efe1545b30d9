//! Storage layer for namedb
//!
//! This crate implements in-memory versions of the chain-side collaborators:
//! - MemoryRegistry: BTreeMap-based name registry with RwLock snapshots and
//!   optional history retention
//! - MemoryMempool: pool of unconfirmed transactions behind a Mutex
//! - MemoryTxIndex: DashMap-based txid → block time index
//! - JsonTxCodec: hex-encoded JSON raw transactions
//!
//! A node embeds the engine against its real chain state; these stores let
//! the engine run, and be tested, on its own.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod mempool;
pub mod registry;
pub mod txcodec;
pub mod txindex;

pub use mempool::{MemoryMempool, MempoolGuard};
pub use registry::{MemoryRegistry, RegistrySnapshot};
pub use txcodec::JsonTxCodec;
pub use txindex::MemoryTxIndex;
