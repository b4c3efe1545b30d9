//! Name command test suite
//!
//! End-to-end coverage of the public API through the `namedb` facade:
//!
//! - `lifecycle`: show and history as a name is updated
//! - `scan`: paging, filters and encodings
//! - `export`: file exports with and without history
//! - `mempool`: pending operations and raw transactions
//! - `config`: configuration files
//!
//! ```bash
//! cargo test --test names
//! cargo test --test names scan::
//! ```

#[path = "../common/mod.rs"]
mod common;

mod config;
mod export;
mod lifecycle;
mod mempool;
mod scan;
