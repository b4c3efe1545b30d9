//! Name query engine for namedb
//!
//! This crate implements the read and transaction-construction surface of
//! the name registry:
//! - NameQueries: show, history, scan, pending, export, raw name operations
//! - Projection: records to `NameInfo` with encodings and expiration
//! - Filters: confirmation window, byte prefix, pattern
//! - Scan: cursor walk with a match budget and resumable pages
//! - Export: incremental JSON array writer over a `BufWriter<File>`
//! - Configuration: `namedb.toml`
//!
//! The engine never owns chain state. Every call borrows the collaborator
//! views defined in `namedb-core` for its duration.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod export;
pub mod filter;
pub mod options;
pub mod pending;
pub mod projection;
pub mod queries;
pub mod rawtx;
pub mod scan;
pub mod schema;

pub use config::{NameConfig, CONFIG_FILE_NAME, DEFAULT_SCAN_COUNT};
pub use export::{ExportSummary, Exporter, JsonArrayWriter};
pub use filter::{ConfirmationWindow, FilterSet, PatternFilter, PrefixFilter};
pub use options::{ConfirmationBounds, ExportOptions, OptionsObject, QueryOptions, ScanOptions};
pub use pending::PendingOperation;
pub use projection::{NameInfo, Projector, NONSTANDARD_ADDRESS};
pub use queries::NameQueries;
pub use rawtx::{NameOpRequest, NameOpResult};
pub use scan::ScanPage;
pub use schema::{FieldKind, FieldSpec, NameInfoSchema};
