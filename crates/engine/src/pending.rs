//! Pending-op merger
//!
//! Lists value-setting name operations that sit in the mempool. Registration
//! commitments (`name_new`) reveal no name and are not reported.

use namedb_core::{Name, NameValue, OutPoint, PendingPool, Script, UpdateKind};
use tracing::debug;

use crate::projection::{NameInfo, Projector};

/// A name-affecting output of an unconfirmed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Name being registered or updated
    pub name: Name,
    /// Value being set
    pub value: NameValue,
    /// Transaction and output carrying the operation
    pub outpoint: OutPoint,
    /// Script controlling the output
    pub address: Script,
    /// Registration or update
    pub kind: UpdateKind,
}

/// Collect pending value-setting operations, optionally for one name only
pub fn pending_operations(pool: &dyn PendingPool, filter: Option<&Name>) -> Vec<PendingOperation> {
    let mut ops = Vec::new();
    for tx in pool.transactions() {
        if !tx.name_tx {
            continue;
        }
        for (n, out) in tx.outputs.iter().enumerate() {
            let Some(op) = &out.name_op else {
                continue;
            };
            let (Some(kind), Some(name), Some(value)) = (op.update_kind(), op.name(), op.value())
            else {
                continue;
            };
            if filter.map_or(false, |wanted| wanted != name) {
                continue;
            }
            let Ok(vout) = u32::try_from(n) else {
                continue;
            };
            ops.push(PendingOperation {
                name: name.clone(),
                value: value.clone(),
                outpoint: OutPoint::new(tx.txid, vout),
                address: out.address.clone(),
                kind,
            });
        }
    }
    debug!(
        target: "namedb::pending",
        found = ops.len(),
        filtered = filter.is_some(),
        "Pending operations collected"
    );
    ops
}

/// Project pending operations, tagging each with its `op`
pub fn project_pending(ops: &[PendingOperation], projector: &Projector<'_>) -> Vec<NameInfo> {
    ops.iter()
        .map(|op| {
            let mut info = projector.project(&op.name, &op.value, &op.outpoint, &op.address);
            info.set_op(op.kind);
            info
        })
        .collect()
}
