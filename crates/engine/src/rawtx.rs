//! Name operations in raw transactions
//!
//! Attaches a `name_new`, `name_firstupdate` or `name_update` operation to
//! one output of a caller-built transaction. Inputs, amounts and the
//! controlling script of the output are left as they are.

use namedb_core::{encoding, Name, NameError, NameOp, NameResult, NameValue, Transaction};
use rand::RngCore;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::options::QueryOptions;

/// Size of the nonce generated for `name_new` when none is given
pub const RAND_LEN: usize = 20;

/// Requested name operation, names and values still encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOpRequest {
    /// Commit to a name
    New {
        /// Name to commit to
        name: String,
        /// Hex nonce; generated when absent
        rand: Option<String>,
    },
    /// Reveal a committed name and set its first value
    FirstUpdate {
        /// Name
        name: String,
        /// Value
        value: String,
        /// Hex nonce used by the matching `name_new`
        rand: String,
    },
    /// Update a registered name
    Update {
        /// Name
        name: String,
        /// Value
        value: String,
    },
}

fn required_str<'a>(object: &'a Map<String, Value>, key: &str) -> NameResult<&'a str> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(NameError::invalid_parameter(format!("Expected type string for {key}"))),
        None => Err(NameError::invalid_parameter(format!("Missing {key}"))),
    }
}

fn optional_str<'a>(object: &'a Map<String, Value>, key: &str) -> NameResult<Option<&'a str>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => required_str(object, key).map(Some),
    }
}

impl NameOpRequest {
    /// Parse the `{"op": ..., "name": ..., ...}` object of a request
    pub fn from_json(value: &Value) -> NameResult<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| NameError::invalid_parameter("name operation must be an object"))?;
        let op = required_str(object, "op")?;
        match op {
            "name_new" => Ok(NameOpRequest::New {
                name: required_str(object, "name")?.to_string(),
                rand: optional_str(object, "rand")?.map(str::to_string),
            }),
            "name_firstupdate" => Ok(NameOpRequest::FirstUpdate {
                name: required_str(object, "name")?.to_string(),
                value: required_str(object, "value")?.to_string(),
                rand: required_str(object, "rand")?.to_string(),
            }),
            "name_update" => Ok(NameOpRequest::Update {
                name: required_str(object, "name")?.to_string(),
                value: required_str(object, "value")?.to_string(),
            }),
            _ => Err(NameError::invalid_parameter("Invalid name operation")),
        }
    }
}

/// Outcome of attaching a name operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameOpResult {
    /// The rewritten transaction
    pub tx: Transaction,
    /// Hex nonce, for `name_new`
    pub rand: Option<String>,
}

/// Commitment hash of a `name_new`: SHA-256 over the nonce followed by the name
pub fn name_new_commitment(rand: &[u8], name: &Name) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(rand);
    hasher.update(name.as_bytes());
    hasher.finalize().to_vec()
}

fn parse_rand(text: &str) -> NameResult<Vec<u8>> {
    hex::decode(text).map_err(|_| NameError::invalid_parameter("rand must be hex"))
}

/// Attach `request` to output `vout` of `tx`
///
/// Names and values are decoded with `encodings`; there is no per-call
/// options argument for this operation.
pub fn build_name_operation(
    mut tx: Transaction,
    vout: u32,
    request: &NameOpRequest,
    encodings: QueryOptions,
) -> NameResult<NameOpResult> {
    tx.set_name_tx();
    let index = usize::try_from(vout)
        .ok()
        .filter(|n| *n < tx.outputs.len())
        .ok_or_else(|| NameError::invalid_parameter("vout is out of range"))?;

    let decode_name = |text: &str| -> NameResult<Name> {
        Ok(Name::new(encoding::decode(text, encodings.name_encoding)?))
    };
    let decode_value = |text: &str| -> NameResult<NameValue> {
        Ok(NameValue::new(encoding::decode(text, encodings.value_encoding)?))
    };

    let (op, rand) = match request {
        NameOpRequest::New { name, rand: given } => {
            let nonce = match given {
                Some(text) => parse_rand(text)?,
                None => {
                    let mut bytes = vec![0u8; RAND_LEN];
                    rand::thread_rng().fill_bytes(&mut bytes);
                    bytes
                }
            };
            let name = decode_name(name)?;
            let hash = name_new_commitment(&nonce, &name);
            (NameOp::New { hash }, Some(hex::encode(&nonce)))
        }
        NameOpRequest::FirstUpdate { name, value, rand } => {
            let op = NameOp::FirstUpdate {
                name: decode_name(name)?,
                value: decode_value(value)?,
                rand: parse_rand(rand)?,
            };
            (op, None)
        }
        NameOpRequest::Update { name, value } => {
            let op = NameOp::Update {
                name: decode_name(name)?,
                value: decode_value(value)?,
            };
            (op, None)
        }
    };

    debug!(target: "namedb::rawtx", txid = %tx.txid, vout, "Attached name operation");
    tx.outputs[index].name_op = Some(op);
    Ok(NameOpResult { tx, rand })
}
