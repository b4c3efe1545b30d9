//! Raw transaction command handlers.

use std::sync::Arc;

use namedb_engine::NameOpRequest;

use crate::bridge::Node;
use crate::convert::convert_result;
use crate::{Error, Output, Result};

/// Handle NameRawTransaction command.
///
/// The transaction is decoded before the operation is parsed.
pub fn name_raw_transaction(
    n: &Arc<Node>,
    hex: String,
    vout: u32,
    name_op: serde_json::Value,
) -> Result<Output> {
    let codec = n
        .raw_codec
        .as_ref()
        .ok_or_else(|| Error::DependencyUnavailable {
            reason: "no raw transaction codec configured".into(),
        })?;
    let tx = codec.decode_hex(&hex).ok_or_else(|| Error::InvalidParameter {
        reason: "TX decode failed".into(),
    })?;
    let request = convert_result(NameOpRequest::from_json(&name_op))?;
    let result = convert_result(n.queries.raw_transaction(tx, vout, &request))?;
    let hex = convert_result(codec.encode_hex(&result.tx))?;
    Ok(Output::RawTransaction {
        hex,
        rand: result.rand,
    })
}
