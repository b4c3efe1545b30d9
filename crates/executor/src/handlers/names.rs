//! Name query command handlers.

use std::path::Path;
use std::sync::Arc;

use namedb_engine::OptionsObject;
use tracing::{info, warn};

use crate::bridge::Node;
use crate::convert::convert_result;
use crate::{Output, Result};

fn options_or_empty(options: Option<OptionsObject>) -> OptionsObject {
    options.unwrap_or_default()
}

/// Handle NameShow command.
pub fn name_show(n: &Arc<Node>, name: String, options: Option<OptionsObject>) -> Result<Output> {
    let snapshot = n.registry.snapshot();
    let info = convert_result(n.queries.show(&snapshot, &name, &options_or_empty(options)))?;
    Ok(Output::NameInfo(info))
}

/// Handle NameHistory command.
pub fn name_history(
    n: &Arc<Node>,
    name: String,
    options: Option<OptionsObject>,
) -> Result<Output> {
    let snapshot = n.registry.snapshot();
    let infos = convert_result(n.queries.history(
        &snapshot,
        &snapshot,
        &name,
        &options_or_empty(options),
    ))?;
    Ok(Output::NameInfos(infos))
}

/// Handle NameScan command.
pub fn name_scan(
    n: &Arc<Node>,
    start: Option<String>,
    count: Option<i64>,
    options: Option<OptionsObject>,
) -> Result<Output> {
    let snapshot = n.registry.snapshot();
    let page = convert_result(n.queries.scan(
        &snapshot,
        start.as_deref(),
        count,
        &options_or_empty(options),
    ))?;
    Ok(Output::NameInfos(page.entries))
}

/// Handle NamePending command.
pub fn name_pending(
    n: &Arc<Node>,
    name: Option<String>,
    options: Option<OptionsObject>,
) -> Result<Output> {
    let pool = n.mempool.lock();
    let infos = convert_result(n.queries.pending(
        &pool,
        name.as_deref(),
        &options_or_empty(options),
    ))?;
    Ok(Output::NameInfos(infos))
}

/// Handle NameExport command.
pub fn name_export(
    n: &Arc<Node>,
    regexp: String,
    path: &Path,
    options: Option<OptionsObject>,
) -> Result<Output> {
    let snapshot = n.registry.snapshot();
    let summary = convert_result(n.queries.export(
        &snapshot,
        &snapshot,
        n.tx_index.as_ref(),
        &regexp,
        path,
        &options_or_empty(options),
    ))?;
    Ok(Output::Exported {
        count: summary.count,
        message: summary.to_string(),
    })
}

/// Handle NameCheckDb command.
pub fn name_checkdb(n: &Arc<Node>) -> Result<Output> {
    let ok = n.registry.validate();
    if ok {
        info!(
            target: "namedb::executor",
            names = n.registry.len(),
            "Registry consistency check passed"
        );
    } else {
        warn!(target: "namedb::executor", "Registry consistency check failed");
    }
    Ok(Output::Bool(ok))
}
