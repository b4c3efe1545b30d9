//! Query options
//!
//! Every read command accepts an optional JSON object of options as its last
//! argument. The object is resolved once at the start of a call into the
//! typed structs below; nothing downstream looks at raw JSON again.
//!
//! Rules shared by all commands:
//! - a recognized key holding the wrong JSON type is an `InvalidParameter`
//!   error (`null` counts as absent)
//! - unknown keys are ignored
//! - an unknown encoding name is not an error: the configured default is
//!   used and a warning is logged

use namedb_core::{NameEncoding, NameError, NameResult};
use serde_json::{Map, Value};
use tracing::warn;

use crate::config::NameConfig;

/// Raw options object as received from a caller
pub type OptionsObject = Map<String, Value>;

/// Resolved encodings of one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Encoding of names in arguments and results
    pub name_encoding: NameEncoding,
    /// Encoding of values in arguments and results
    pub value_encoding: NameEncoding,
}

impl QueryOptions {
    /// Resolve `nameEncoding` / `valueEncoding` against the configured defaults
    pub fn parse(options: &OptionsObject, config: &NameConfig) -> NameResult<Self> {
        Ok(Self {
            name_encoding: encoding_option(options, "nameEncoding", config.name_encoding)?,
            value_encoding: encoding_option(options, "valueEncoding", config.value_encoding)?,
        })
    }

    /// The configured defaults, as used by calls without an options argument
    pub fn defaults(config: &NameConfig) -> Self {
        Self {
            name_encoding: config.name_encoding,
            value_encoding: config.value_encoding,
        }
    }
}

/// Confirmation bounds requested for a scan
///
/// Validated when parsed; turned into absolute heights by
/// [`ConfirmationWindow`](crate::filter::ConfirmationWindow) once the chain
/// height is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationBounds {
    /// Minimum confirmations (at least 1)
    pub min_conf: i64,
    /// Maximum confirmations, if bounded (at least 0)
    pub max_conf: Option<i64>,
}

impl Default for ConfirmationBounds {
    fn default() -> Self {
        Self {
            min_conf: 1,
            max_conf: None,
        }
    }
}

impl ConfirmationBounds {
    /// Check the bounds
    pub fn new(min_conf: i64, max_conf: Option<i64>) -> NameResult<Self> {
        if min_conf < 1 {
            return Err(NameError::invalid_parameter("minConf must be >= 1"));
        }
        if let Some(max) = max_conf {
            if max < 0 {
                return Err(NameError::invalid_parameter(
                    "maxConf must not be negative",
                ));
            }
        }
        Ok(Self { min_conf, max_conf })
    }
}

/// Options of `name_scan`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Encodings
    pub query: QueryOptions,
    /// `minConf` / `maxConf`
    pub bounds: ConfirmationBounds,
    /// `prefix`, still in its encoded text form
    pub prefix: Option<String>,
    /// `regexp`
    pub regexp: Option<String>,
}

impl ScanOptions {
    /// Parse and validate scan options
    pub fn parse(options: &OptionsObject, config: &NameConfig) -> NameResult<Self> {
        let query = QueryOptions::parse(options, config)?;
        let min_conf = int_option(options, "minConf")?.unwrap_or(1);
        let max_conf = int_option(options, "maxConf")?;
        Ok(Self {
            query,
            bounds: ConfirmationBounds::new(min_conf, max_conf)?,
            prefix: str_option(options, "prefix")?.map(str::to_owned),
            regexp: str_option(options, "regexp")?.map(str::to_owned),
        })
    }
}

/// Options of `name_export`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Encodings used for history-expanded elements
    pub query: QueryOptions,
    /// `withHistory`: emit full projections with history instead of names
    pub with_history: bool,
    /// `count`: cap on exported names; `None` is unbounded
    pub max_count: Option<u64>,
}

impl ExportOptions {
    /// Parse export options; a negative `count` means unbounded
    pub fn parse(options: &OptionsObject, config: &NameConfig) -> NameResult<Self> {
        let query = QueryOptions::parse(options, config)?;
        let with_history = bool_option(options, "withHistory")?.unwrap_or(false);
        let max_count = int_option(options, "count")?
            .and_then(|count| u64::try_from(count).ok());
        Ok(Self {
            query,
            with_history,
            max_count,
        })
    }
}

fn present<'a>(options: &'a OptionsObject, key: &str) -> Option<&'a Value> {
    options.get(key).filter(|value| !value.is_null())
}

fn type_error(key: &str, expected: &str, got: &Value) -> NameError {
    let got = match got {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    NameError::invalid_parameter(format!("Expected type {expected} for {key}, got {got}"))
}

fn str_option<'a>(options: &'a OptionsObject, key: &str) -> NameResult<Option<&'a str>> {
    match present(options, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(type_error(key, "string", other)),
    }
}

fn int_option(options: &OptionsObject, key: &str) -> NameResult<Option<i64>> {
    match present(options, key) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| NameError::invalid_parameter(format!("{key} must be an integer"))),
        Some(other) => Err(type_error(key, "number", other)),
    }
}

fn bool_option(options: &OptionsObject, key: &str) -> NameResult<Option<bool>> {
    match present(options, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(type_error(key, "bool", other)),
    }
}

fn encoding_option(
    options: &OptionsObject,
    key: &str,
    default: NameEncoding,
) -> NameResult<NameEncoding> {
    let Some(text) = str_option(options, key)? else {
        return Ok(default);
    };
    match text.parse::<NameEncoding>() {
        Ok(encoding) => Ok(encoding),
        Err(e) => {
            warn!(
                target: "namedb::options",
                field = key,
                error = %e,
                default = %default,
                "Invalid value in options, using default"
            );
            Ok(default)
        }
    }
}
