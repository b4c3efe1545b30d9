//! Scan engine
//!
//! Walks the registry cursor in ascending name order from a start key and
//! collects up to `count` records that pass a [`FilterSet`]. Only matching
//! records consume the budget; rejected ones are skipped for free.
//!
//! ## Pagination
//!
//! `seek` is inclusive, so a page that stopped because the budget ran out
//! reports its last emitted name as `next_start`. Resuming from that name
//! yields it again as the first entry, which the caller drops.

use namedb_core::{Name, NameRecord, NameRegistry};
use tracing::debug;

use crate::filter::FilterSet;
use crate::projection::{NameInfo, Projector};

/// One page of scan results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPage {
    /// Projected records in ascending name order
    pub entries: Vec<NameInfo>,
    /// Last emitted name when the page is full; `None` once the cursor is
    /// exhausted
    pub next_start: Option<Name>,
}

impl ScanPage {
    /// An empty, finished page
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            next_start: None,
        }
    }
}

/// Collect up to `count` matching records starting at `start`
///
/// Returns nothing for `count <= 0` without creating a cursor.
pub fn scan_records(
    registry: &dyn NameRegistry,
    start: &Name,
    count: i64,
    filters: &FilterSet,
) -> Vec<(Name, NameRecord)> {
    let Ok(budget) = usize::try_from(count) else {
        return Vec::new();
    };
    if budget == 0 {
        return Vec::new();
    }

    let mut cursor = registry.iterate_names();
    cursor.seek(start);

    let mut matched = Vec::new();
    let mut visited = 0usize;
    while matched.len() < budget {
        let Some((name, record)) = cursor.next() else {
            break;
        };
        visited += 1;
        if filters.matches(&name, &record) {
            matched.push((name, record));
        }
    }

    debug!(
        target: "namedb::scan",
        visited,
        matched = matched.len(),
        budget,
        "Scan finished"
    );
    matched
}

/// Scan and project one page
pub fn scan_page(
    registry: &dyn NameRegistry,
    start: &Name,
    count: i64,
    filters: &FilterSet,
    projector: &Projector<'_>,
) -> ScanPage {
    let records = scan_records(registry, start, count, filters);
    let full = i64::try_from(records.len()).map_or(false, |n| n == count && n > 0);
    let next_start = if full {
        records.last().map(|(name, _)| name.clone())
    } else {
        None
    };
    let entries = records
        .iter()
        .map(|(name, record)| projector.project_record(name, record))
        .collect();
    ScanPage {
        entries,
        next_start,
    }
}
