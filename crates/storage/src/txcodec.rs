//! JsonTxCodec: raw transactions as hex-encoded JSON
//!
//! Stand-in for a consensus serializer. The hex payload is the JSON form of
//! a `Transaction`, which keeps raw transactions inspectable in tests.

use namedb_core::{NameError, NameResult, RawTxCodec, Transaction};
use tracing::{debug, warn};

/// Codec that hex-encodes the JSON form of a transaction
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonTxCodec;

impl RawTxCodec for JsonTxCodec {
    fn decode_hex(&self, text: &str) -> Option<Transaction> {
        let bytes = hex::decode(text).ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(tx) => Some(tx),
            Err(e) => {
                debug!(
                    target: "namedb::storage",
                    error = %e,
                    "Raw transaction is not a valid payload"
                );
                None
            }
        }
    }

    fn encode_hex(&self, tx: &Transaction) -> NameResult<String> {
        let bytes = serde_json::to_vec(tx).map_err(|e| {
            warn!(
                target: "namedb::storage",
                txid = %tx.txid,
                error = %e,
                "Failed to serialize raw transaction"
            );
            NameError::Serialization(format!("Failed to serialize transaction: {}", e))
        })?;
        Ok(hex::encode(bytes))
    }
}
