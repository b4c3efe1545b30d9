//! Configuration file support for namedb.
//!
//! A node embedding the name engine keeps its settings in `namedb.toml`.
//! Every field has a default, so a missing or partial file is fine.

use std::path::Path;

use namedb_core::{NameEncoding, NameError, NameResult};
use serde::{Deserialize, Serialize};

/// Config file name placed next to the node's data.
pub const CONFIG_FILE_NAME: &str = "namedb.toml";

/// Default number of entries returned by a scan.
pub const DEFAULT_SCAN_COUNT: i64 = 500;

/// Settings of the name query engine.
///
/// Parsed from `namedb.toml`:
///
/// ```toml
/// name_encoding = "ascii"
/// value_encoding = "ascii"
/// name_history = false
/// default_scan_count = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameConfig {
    /// Encoding used for names when a call does not pick one.
    pub name_encoding: NameEncoding,
    /// Encoding used for values when a call does not pick one.
    pub value_encoding: NameEncoding,
    /// Whether superseded records are retained (enables history queries).
    pub name_history: bool,
    /// Page size of `name_scan` when the caller omits `count`.
    pub default_scan_count: i64,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            name_encoding: NameEncoding::Ascii,
            value_encoding: NameEncoding::Ascii,
            name_history: false,
            default_scan_count: DEFAULT_SCAN_COUNT,
        }
    }
}

impl NameConfig {
    /// Default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# namedb configuration

# Encoding of names in results and arguments: "ascii", "utf8" or "hex".
name_encoding = "ascii"

# Encoding of values in results and arguments: "ascii", "utf8" or "hex".
value_encoding = "ascii"

# Keep superseded records so name_history and history exports work.
# Changing this requires rebuilding the registry.
name_history = false

# Number of names returned by name_scan when no count is given.
default_scan_count = 500
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> NameResult<Self> {
        let config: NameConfig = toml::from_str(content)
            .map_err(|e| NameError::Serialization(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> NameResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            NameError::Serialization(reason) => NameError::Serialization(format!(
                "{} ({})",
                reason,
                path.display()
            )),
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default(path: &Path) -> NameResult<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> NameResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NameError::Serialization(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> NameResult<()> {
        if self.default_scan_count < 0 {
            return Err(NameError::invalid_parameter(
                "default_scan_count must not be negative",
            ));
        }
        Ok(())
    }
}
