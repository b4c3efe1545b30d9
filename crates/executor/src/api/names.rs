//! Name registry operations.

use std::path::Path;

use namedb_engine::{NameInfo, OptionsObject};

use super::Names;
use crate::{Command, Error, Output, Result};

/// A raw transaction with a name operation attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNameTransaction {
    /// Hex serialization of the transaction
    pub hex: String,
    /// Hex nonce, set for `name_new`
    pub rand: Option<String>,
}

impl Names {
    fn name_infos(&self, cmd: Command) -> Result<Vec<NameInfo>> {
        let command = cmd.name();
        match self.executor.execute(cmd)? {
            Output::NameInfos(infos) => Ok(infos),
            _ => Err(Error::Internal {
                reason: format!("Unexpected output for {command}"),
            }),
        }
    }

    /// Current record of a name.
    ///
    /// Fails with [`Error::NameNotFound`] when the name has no record.
    pub fn name_show(&self, name: &str, options: Option<OptionsObject>) -> Result<NameInfo> {
        match self.executor.execute(Command::NameShow {
            name: name.to_string(),
            options,
        })? {
            Output::NameInfo(info) => Ok(info),
            _ => Err(Error::Internal {
                reason: "Unexpected output for NameShow".into(),
            }),
        }
    }

    /// Prior records of a name, oldest first, followed by the current one.
    pub fn name_history(
        &self,
        name: &str,
        options: Option<OptionsObject>,
    ) -> Result<Vec<NameInfo>> {
        self.name_infos(Command::NameHistory {
            name: name.to_string(),
            options,
        })
    }

    /// Up to `count` names in key order, starting at `start` inclusive.
    ///
    /// To page, pass the last returned name as the next `start` and drop the
    /// first entry of the next page.
    pub fn name_scan(
        &self,
        start: Option<&str>,
        count: Option<i64>,
        options: Option<OptionsObject>,
    ) -> Result<Vec<NameInfo>> {
        self.name_infos(Command::NameScan {
            start: start.map(str::to_string),
            count,
            options,
        })
    }

    /// Pending operations, for one name or all.
    pub fn name_pending(
        &self,
        name: Option<&str>,
        options: Option<OptionsObject>,
    ) -> Result<Vec<NameInfo>> {
        self.name_infos(Command::NamePending {
            name: name.map(str::to_string),
            options,
        })
    }

    /// Export names matching `regexp` to `path` and return the summary line.
    pub fn name_export(
        &self,
        regexp: &str,
        path: &Path,
        options: Option<OptionsObject>,
    ) -> Result<String> {
        match self.executor.execute(Command::NameExport {
            regexp: regexp.to_string(),
            path: path.to_path_buf(),
            options,
        })? {
            Output::Exported { message, .. } => Ok(message),
            _ => Err(Error::Internal {
                reason: "Unexpected output for NameExport".into(),
            }),
        }
    }

    /// Check the registry for internal consistency.
    pub fn name_checkdb(&self) -> Result<bool> {
        match self.executor.execute(Command::NameCheckDb)? {
            Output::Bool(ok) => Ok(ok),
            _ => Err(Error::Internal {
                reason: "Unexpected output for NameCheckDb".into(),
            }),
        }
    }

    /// Attach `name_op` to output `vout` of the hex transaction.
    pub fn name_raw_transaction(
        &self,
        hex: &str,
        vout: u32,
        name_op: serde_json::Value,
    ) -> Result<RawNameTransaction> {
        match self.executor.execute(Command::NameRawTransaction {
            hex: hex.to_string(),
            vout,
            name_op,
        })? {
            Output::RawTransaction { hex, rand } => Ok(RawNameTransaction { hex, rand }),
            _ => Err(Error::Internal {
                reason: "Unexpected output for NameRawTransaction".into(),
            }),
        }
    }
}
