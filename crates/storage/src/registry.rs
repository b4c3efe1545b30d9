//! MemoryRegistry: in-memory name registry with optional history retention
//!
//! This module implements the registry collaborator traits using:
//! - `BTreeMap<Name, NameRecord>` for ordered name storage
//! - `BTreeMap<Name, NameHistory>` for retained prior records
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Snapshots
//!
//! Readers call [`MemoryRegistry::snapshot`], which holds the read lock for
//! as long as the snapshot lives. Writers take the write lock for a whole
//! block, so a scan never observes a mix of pre- and post-update records.
//!
//! # History
//!
//! Updates never delete: the superseded record is appended to the name's
//! history when retention is enabled and dropped otherwise.

use std::collections::btree_map::Range;
use std::collections::BTreeMap;

use parking_lot::{RwLock, RwLockReadGuard};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use namedb_core::{
    describe_name, Name, NameCursor, NameEncoding, NameHistory, NameHistoryStore, NameRecord,
    NameRegistry, OutPoint,
};

#[derive(Debug, Default)]
struct RegistryState {
    names: BTreeMap<Name, NameRecord>,
    history: BTreeMap<Name, NameHistory>,
    height: u32,
    initial_download: bool,
}

impl RegistryState {
    fn apply(&mut self, name: Name, record: NameRecord, retain_history: bool) {
        let previous = self.names.insert(name.clone(), record);
        if let (Some(previous), true) = (previous, retain_history) {
            self.history.entry(name).or_default().push(previous);
        }
    }
}

/// In-memory name registry
///
/// Thread-safe through `parking_lot::RwLock`. History retention is fixed at
/// construction.
///
/// # Example
///
/// ```ignore
/// let registry = MemoryRegistry::new(true);
/// registry.apply_block(100, vec![(Name::from("d/example"), record)]);
///
/// let snapshot = registry.snapshot();
/// assert!(snapshot.get_name(&Name::from("d/example")).is_some());
/// ```
#[derive(Debug)]
pub struct MemoryRegistry {
    state: RwLock<RegistryState>,
    history_enabled: bool,
}

impl MemoryRegistry {
    /// Create an empty registry at height 0
    pub fn new(history_enabled: bool) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            history_enabled,
        }
    }

    /// Whether superseded records are retained
    pub fn history_enabled(&self) -> bool {
        self.history_enabled
    }

    /// Apply a single confirmed update
    ///
    /// The height of the chain tip is not changed.
    pub fn apply_update(&self, name: Name, record: NameRecord) {
        let mut state = self.state.write();
        debug!(
            target: "namedb::registry",
            name = %describe_name(name.as_bytes(), NameEncoding::Utf8),
            height = record.height,
            "Applying name update"
        );
        state.apply(name, record, self.history_enabled);
    }

    /// Apply all updates of a block and advance the tip to `height`
    ///
    /// Everything is applied under one write lock acquisition.
    pub fn apply_block(&self, height: u32, updates: Vec<(Name, NameRecord)>) {
        let mut state = self.state.write();
        let count = updates.len();
        for (name, record) in updates {
            state.apply(name, record, self.history_enabled);
        }
        state.height = height;
        debug!(target: "namedb::registry", height, updates = count, "Applied block");
    }

    /// Move the chain tip without touching any record
    pub fn set_height(&self, height: u32) {
        self.state.write().height = height;
    }

    /// Flag the registry as (not) catching up with the network
    pub fn set_initial_download(&self, syncing: bool) {
        self.state.write().initial_download = syncing;
    }

    /// Number of names with a current record
    pub fn len(&self) -> usize {
        self.state.read().names.len()
    }

    /// True if no name is registered
    pub fn is_empty(&self) -> bool {
        self.state.read().names.is_empty()
    }

    /// Consistent read view held until the snapshot is dropped
    pub fn snapshot(&self) -> RegistrySnapshot<'_> {
        RegistrySnapshot {
            state: self.state.read(),
        }
    }

    /// Validate the internal consistency of the registry
    ///
    /// Checks, under one read lock:
    /// - no current record lies above the chain tip
    /// - every name's history is in non-decreasing height order and not
    ///   above its current record
    /// - history only exists for names with a current record
    /// - no two names are held by the same output
    ///
    /// Each violation is logged; the result is `false` if any was found.
    pub fn validate(&self) -> bool {
        let state = self.state.read();
        let mut valid = true;
        let mut holders: FxHashMap<OutPoint, &Name> = FxHashMap::default();

        for (name, record) in state.names.iter() {
            if record.height > state.height {
                warn!(
                    target: "namedb::registry",
                    name = %describe_name(name.as_bytes(), NameEncoding::Utf8),
                    height = record.height,
                    tip = state.height,
                    "Name record above chain tip"
                );
                valid = false;
            }

            if let Some(other) = holders.insert(record.outpoint, name) {
                warn!(
                    target: "namedb::registry",
                    outpoint = %record.outpoint,
                    first = %describe_name(other.as_bytes(), NameEncoding::Utf8),
                    second = %describe_name(name.as_bytes(), NameEncoding::Utf8),
                    "Output holds more than one name"
                );
                valid = false;
            }
        }

        for (name, history) in state.history.iter() {
            let Some(current) = state.names.get(name) else {
                warn!(
                    target: "namedb::registry",
                    name = %describe_name(name.as_bytes(), NameEncoding::Utf8),
                    "History retained for a name without current record"
                );
                valid = false;
                continue;
            };

            let mut last = 0u32;
            for entry in history.entries() {
                if entry.height < last || entry.height > current.height {
                    warn!(
                        target: "namedb::registry",
                        name = %describe_name(name.as_bytes(), NameEncoding::Utf8),
                        height = entry.height,
                        current = current.height,
                        "History entry out of order"
                    );
                    valid = false;
                }
                last = entry.height;
            }
        }

        valid
    }
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Read view of a [`MemoryRegistry`]
///
/// Holds the registry's read lock; writers block until it is dropped.
pub struct RegistrySnapshot<'a> {
    state: RwLockReadGuard<'a, RegistryState>,
}

impl RegistrySnapshot<'_> {
    /// Number of names with a current record
    pub fn len(&self) -> usize {
        self.state.names.len()
    }

    /// True if no name is registered
    pub fn is_empty(&self) -> bool {
        self.state.names.is_empty()
    }
}

impl NameRegistry for RegistrySnapshot<'_> {
    fn get_name(&self, name: &Name) -> Option<NameRecord> {
        self.state.names.get(name).cloned()
    }

    fn iterate_names(&self) -> Box<dyn NameCursor + '_> {
        Box::new(MemoryCursor {
            names: &self.state.names,
            range: self.state.names.range::<Name, _>(..),
        })
    }

    fn height(&self) -> u32 {
        self.state.height
    }

    fn is_initial_download(&self) -> bool {
        self.state.initial_download
    }
}

impl NameHistoryStore for RegistrySnapshot<'_> {
    fn get_history(&self, name: &Name) -> NameHistory {
        self.state.history.get(name).cloned().unwrap_or_default()
    }
}

/// Cursor over the names of a snapshot
struct MemoryCursor<'a> {
    names: &'a BTreeMap<Name, NameRecord>,
    range: Range<'a, Name, NameRecord>,
}

impl NameCursor for MemoryCursor<'_> {
    fn seek(&mut self, start: &Name) {
        self.range = self.names.range::<Name, _>(start.clone()..);
    }

    fn next(&mut self) -> Option<(Name, NameRecord)> {
        self.range
            .next()
            .map(|(name, record)| (name.clone(), record.clone()))
    }
}
