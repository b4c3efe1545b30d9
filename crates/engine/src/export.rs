//! Export pipeline
//!
//! Streams every current name matching a pattern into a JSON array. Without
//! history each element is the name as a JSON string; with history each
//! element is the full projection plus the block times of the current record
//! and of every retained prior version.
//!
//! Elements are serialized and written one at a time, so memory use is
//! bounded by a single record (plus its history) regardless of registry
//! size. The output is only a valid document once the closing bracket has
//! been written; an export that fails midway leaves a truncated file.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use namedb_core::{
    NameError, NameHistoryStore, NameRegistry, NameResult, TxId, TxTimestampResolver,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::filter::PatternFilter;
use crate::projection::Projector;

/// Result of a finished export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Number of exported names
    pub count: u64,
    /// Pattern the names were matched against
    pub pattern: String,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found {} names with \"{}\" regexp", self.count, self.pattern)
    }
}

/// Incremental writer of a JSON array
///
/// Emits `[`, then each element preceded by `\n` (first) or `,\n` (rest),
/// then `\n]`.
pub struct JsonArrayWriter<W: Write> {
    out: W,
    written: u64,
}

impl<W: Write> JsonArrayWriter<W> {
    /// Write the opening bracket
    pub fn begin(mut out: W) -> NameResult<Self> {
        out.write_all(b"[")?;
        Ok(Self { out, written: 0 })
    }

    /// Serialize and append one element
    pub fn element<T: Serialize + ?Sized>(&mut self, value: &T) -> NameResult<()> {
        let separator: &[u8] = if self.written == 0 { b"\n" } else { b",\n" };
        self.out.write_all(separator)?;
        serde_json::to_writer(&mut self.out, value)
            .map_err(|e| NameError::Serialization(e.to_string()))?;
        self.written += 1;
        Ok(())
    }

    /// Number of elements written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Write the closing bracket, flush and hand back the sink
    pub fn finish(mut self) -> NameResult<W> {
        self.out.write_all(b"\n]")?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Block time of a transaction; fails if it is unknown or unconfirmed
pub fn block_time(timestamps: &dyn TxTimestampResolver, txid: &TxId) -> NameResult<i64> {
    match timestamps.lookup(txid) {
        Some(found) => match (found.confirmed, found.block_time) {
            (true, Some(time)) => Ok(time),
            _ => Err(NameError::dependency_unavailable(format!(
                "transaction {txid} is not in the active chain"
            ))),
        },
        None => Err(NameError::dependency_unavailable(format!(
            "No such mempool or blockchain transaction {txid}"
        ))),
    }
}

/// Export request after option parsing
pub struct ExportPlan<'p> {
    /// Names to export
    pub pattern: &'p PatternFilter,
    /// Emit projections with history instead of bare names
    pub with_history: bool,
    /// Stop after this many names
    pub max_count: Option<u64>,
}

/// Read side of an export
pub struct Exporter<'a> {
    registry: &'a dyn NameRegistry,
    history: &'a dyn NameHistoryStore,
    timestamps: &'a dyn TxTimestampResolver,
    projector: &'a Projector<'a>,
}

impl<'a> Exporter<'a> {
    /// Bundle the collaborators of one export
    pub fn new(
        registry: &'a dyn NameRegistry,
        history: &'a dyn NameHistoryStore,
        timestamps: &'a dyn TxTimestampResolver,
        projector: &'a Projector<'a>,
    ) -> Self {
        Self {
            registry,
            history,
            timestamps,
            projector,
        }
    }

    /// Stream matching names into `out`, returning how many were written
    pub fn write_to<W: Write>(&self, out: W, plan: &ExportPlan<'_>) -> NameResult<u64> {
        let mut array = JsonArrayWriter::begin(out)?;
        if plan.max_count == Some(0) {
            array.finish()?;
            return Ok(0);
        }

        let mut cursor = self.registry.iterate_names();
        while let Some((name, record)) = cursor.next() {
            if !plan.pattern.matches(&name) {
                continue;
            }
            // Matching implies the name is valid UTF-8.
            let Some(text) = name.to_utf8() else {
                continue;
            };

            if plan.with_history {
                let mut info = self.projector.project_record(&name, &record);
                info.last_updated = Some(block_time(self.timestamps, &record.outpoint.txid)?);
                let mut entries = Vec::new();
                for prior in self.history.get_history(&name) {
                    let mut entry = self.projector.project_record(&name, &prior);
                    entry.time = Some(block_time(self.timestamps, &prior.outpoint.txid)?);
                    entries.push(entry);
                }
                info.history = Some(entries);
                array.element(&info)?;
            } else {
                array.element(text)?;
            }

            debug!(target: "namedb::export", count = array.written(), name = text, "Exported name");
            if plan.max_count.map_or(false, |max| array.written() >= max) {
                break;
            }
        }

        let count = array.written();
        array.finish()?;
        Ok(count)
    }

    /// Export into a newly created file at `path`
    ///
    /// The file is created (or truncated) before the first record is read
    /// and closed on every exit path.
    pub fn write_file(&self, path: &Path, plan: &ExportPlan<'_>) -> NameResult<ExportSummary> {
        let file = File::create(path)?;
        let count = self.write_to(BufWriter::new(file), plan)?;
        let summary = ExportSummary {
            count,
            pattern: plan.pattern.as_str().to_string(),
        };
        info!(
            target: "namedb::export",
            count,
            pattern = %summary.pattern,
            with_history = plan.with_history,
            path = %path.display(),
            "Export finished"
        );
        Ok(summary)
    }
}
