//! namedb - query and projection engine for blockchain name registries
//!
//! namedb answers the name RPCs of a Namecoin-style node: it reads the name
//! registry, the mempool and a transaction index, and projects records into
//! JSON-ready [`NameInfo`] objects.
//!
//! # Quick Start
//!
//! ```ignore
//! use namedb::{NameConfig, Names};
//!
//! let names = Names::in_memory(NameConfig::default(), addresses);
//!
//! // Feed the registry from the chain
//! names.registry().apply_block(100, updates);
//!
//! // Query it
//! let info = names.name_show("d/example", None)?;
//! let page = names.name_scan(Some("d/"), Some(10), None)?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based API.
//! The [`Names`] struct provides a convenient high-level interface.
//!
//! The query engine, projection and storage crates are implementation
//! details; only the executor API is public.

// Re-export the public API from namedb-executor
pub use namedb_executor::*;
