//! Record projection
//!
//! Turns raw records into the JSON-facing [`NameInfo`] shape. Encoding
//! failures never abort a projection: the affected field is replaced by a
//! `<field>_error` entry carrying the codec's message.

use namedb_core::{
    encoding, AddressResolver, ExpirationRule, ExpirationStatus, Name, NameEncoding, NameRecord,
    NameValue, OutPoint, OwnershipResolver, Script, UpdateKind,
};
use serde::{Deserialize, Serialize};

use crate::options::QueryOptions;

/// Address shown when the controlling script has no address form
pub const NONSTANDARD_ADDRESS: &str = "<nonstandard>";

/// Projection of a name record
///
/// Exactly one of `name` / `name_error` is set, likewise for the value.
/// Optional groups are omitted from the serialized object when absent.
/// Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameInfo {
    /// Encoded name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Reason the name could not be encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_error: Option<String>,
    /// Encoding used for `name`
    pub name_encoding: NameEncoding,
    /// Encoded value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Reason the value could not be encoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_error: Option<String>,
    /// Encoding used for `value`
    pub value_encoding: NameEncoding,
    /// Txid of the last update, lowercase hex
    pub txid: String,
    /// Output index of the last update
    pub vout: u32,
    /// Controlling address or [`NONSTANDARD_ADDRESS`]
    pub address: String,
    /// Last-update height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Blocks until expiration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// Whether the name has expired
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
    /// Ownership flag, only when an ownership capability is available
    #[serde(rename = "ismine", default, skip_serializing_if = "Option::is_none")]
    pub is_mine: Option<bool>,
    /// Pending operation kind (`name_firstupdate` / `name_update`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    /// Block time of the current record's transaction (export)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
    /// Block time of a history entry's transaction (export)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    /// Prior versions, oldest first (export)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<NameInfo>>,
}

impl NameInfo {
    /// Attach expiration fields
    pub fn set_expiration(&mut self, status: ExpirationStatus) {
        self.height = Some(status.height);
        self.expires_in = Some(status.expires_in);
        self.expired = Some(status.expired);
    }

    /// Tag as a pending operation
    pub fn set_op(&mut self, kind: UpdateKind) {
        self.op = Some(kind.as_str().to_string());
    }

    /// Expiration fields, if attached
    pub fn expiration(&self) -> Option<ExpirationStatus> {
        match (self.height, self.expires_in, self.expired) {
            (Some(height), Some(expires_in), Some(expired)) => Some(ExpirationStatus {
                height,
                expires_in,
                expired,
            }),
            _ => None,
        }
    }
}

fn encode_field(bytes: &[u8], encoding: NameEncoding) -> (Option<String>, Option<String>) {
    match encoding::encode(bytes, encoding) {
        Ok(text) => (Some(text), None),
        Err(e) => (None, Some(e.to_string())),
    }
}

/// Builds [`NameInfo`] values for one call
///
/// Borrows the call's collaborators and carries the chain height observed at
/// the start of the call, so every record of a result is evaluated against
/// the same tip.
pub struct Projector<'a> {
    options: QueryOptions,
    addresses: &'a dyn AddressResolver,
    ownership: Option<&'a dyn OwnershipResolver>,
    expiration: &'a dyn ExpirationRule,
    current_height: u32,
}

impl<'a> Projector<'a> {
    /// Create a projector
    pub fn new(
        options: QueryOptions,
        addresses: &'a dyn AddressResolver,
        ownership: Option<&'a dyn OwnershipResolver>,
        expiration: &'a dyn ExpirationRule,
        current_height: u32,
    ) -> Self {
        Self {
            options,
            addresses,
            ownership,
            expiration,
            current_height,
        }
    }

    /// Resolved encodings
    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// Height all expiration fields are computed against
    pub fn current_height(&self) -> u32 {
        self.current_height
    }

    /// Project raw parts, without expiration
    ///
    /// Adds `ismine` when the ownership capability is present.
    pub fn project(
        &self,
        name: &Name,
        value: &NameValue,
        outpoint: &OutPoint,
        address: &Script,
    ) -> NameInfo {
        let (name_text, name_error) = encode_field(name.as_bytes(), self.options.name_encoding);
        let (value_text, value_error) =
            encode_field(value.as_bytes(), self.options.value_encoding);
        let address_text = self
            .addresses
            .display(address)
            .unwrap_or_else(|| NONSTANDARD_ADDRESS.to_string());

        NameInfo {
            name: name_text,
            name_error,
            name_encoding: self.options.name_encoding,
            value: value_text,
            value_error,
            value_encoding: self.options.value_encoding,
            txid: outpoint.txid.to_hex(),
            vout: outpoint.vout,
            address: address_text,
            height: None,
            expires_in: None,
            expired: None,
            is_mine: self.ownership.map(|o| o.is_mine(address)),
            op: None,
            last_updated: None,
            time: None,
            history: None,
        }
    }

    /// Project a confirmed record, with expiration
    pub fn project_record(&self, name: &Name, record: &NameRecord) -> NameInfo {
        let mut info = self.project(name, &record.value, &record.outpoint, &record.address);
        info.set_expiration(ExpirationStatus::compute(
            record.height,
            self.current_height,
            self.expiration,
        ));
        info
    }
}
