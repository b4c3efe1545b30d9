//! Transaction model as seen by the name layer
//!
//! Only the parts of a transaction that name queries care about are modelled:
//! its outputs, and for each output the controlling script plus an optional
//! name operation. Script parsing and hex serialization belong to the chain
//! and are reached through the `RawTxCodec` collaborator.

use serde::{Deserialize, Serialize};

use crate::types::{Name, NameValue, OutPoint, Script, TxId};

/// Name operation carried by an output script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameOp {
    /// Commitment to a future registration (`name_new`); carries no name
    New {
        /// Hash committing to the name and a nonce
        hash: Vec<u8>,
    },
    /// Registration revealing the name and its first value
    FirstUpdate {
        /// Registered name
        name: Name,
        /// Initial value
        value: NameValue,
        /// Nonce revealed from the matching `name_new`
        rand: Vec<u8>,
    },
    /// Update of an existing name
    Update {
        /// Updated name
        name: Name,
        /// New value
        value: NameValue,
    },
}

impl NameOp {
    /// True for operations that set a name's value (first update or update)
    pub fn is_any_update(&self) -> bool {
        matches!(self, NameOp::FirstUpdate { .. } | NameOp::Update { .. })
    }

    /// Name touched by the operation, if it reveals one
    pub fn name(&self) -> Option<&Name> {
        match self {
            NameOp::New { .. } => None,
            NameOp::FirstUpdate { name, .. } | NameOp::Update { name, .. } => Some(name),
        }
    }

    /// Value set by the operation, if any
    pub fn value(&self) -> Option<&NameValue> {
        match self {
            NameOp::New { .. } => None,
            NameOp::FirstUpdate { value, .. } | NameOp::Update { value, .. } => Some(value),
        }
    }

    /// Kind of a value-setting operation
    pub fn update_kind(&self) -> Option<UpdateKind> {
        match self {
            NameOp::New { .. } => None,
            NameOp::FirstUpdate { .. } => Some(UpdateKind::FirstUpdate),
            NameOp::Update { .. } => Some(UpdateKind::Update),
        }
    }
}

/// Kind of a value-setting name operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateKind {
    /// Registration (`name_firstupdate`)
    FirstUpdate,
    /// Update (`name_update`)
    Update,
}

impl UpdateKind {
    /// Display string used in results
    pub const fn as_str(&self) -> &'static str {
        match self {
            UpdateKind::FirstUpdate => "name_firstupdate",
            UpdateKind::Update => "name_update",
        }
    }
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Amount in the chain's base unit
    pub amount: u64,
    /// Controlling address script
    pub address: Script,
    /// Name operation prefixed to the script, if any
    pub name_op: Option<NameOp>,
}

impl TxOut {
    /// Plain (non-name) output
    pub fn plain(amount: u64, address: Script) -> Self {
        Self {
            amount,
            address,
            name_op: None,
        }
    }

    /// Output carrying a name operation
    pub fn with_name_op(amount: u64, address: Script, op: NameOp) -> Self {
        Self {
            amount,
            address,
            name_op: Some(op),
        }
    }
}

/// Transaction as exchanged with the mempool and the raw-transaction codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id
    pub txid: TxId,
    /// Whether the transaction is flagged as carrying name operations
    pub name_tx: bool,
    /// Spent outputs
    pub inputs: Vec<OutPoint>,
    /// Created outputs
    pub outputs: Vec<TxOut>,
    /// Lock time
    pub lock_time: u32,
}

impl Transaction {
    /// Create a transaction without the name flag
    pub fn new(txid: TxId, inputs: Vec<OutPoint>, outputs: Vec<TxOut>) -> Self {
        Self {
            txid,
            name_tx: false,
            inputs,
            outputs,
            lock_time: 0,
        }
    }

    /// Mark the transaction as carrying name operations
    pub fn set_name_tx(&mut self) {
        self.name_tx = true;
    }
}
