//! Result schema
//!
//! A plain structural description of the objects the name commands return.
//! Front ends use it to render help text; tests use it to check that a
//! projection emits only described fields and all required ones.

use serde::Serialize;
use serde_json::Value;

/// JSON kind of a result field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text
    String,
    /// Lowercase hex text
    Hex,
    /// Integer
    Number,
    /// Boolean
    Bool,
    /// Array
    Array,
}

impl FieldKind {
    /// Whether `value` has this kind
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Hex => value
                .as_str()
                .map(|s| s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)))
                .unwrap_or(false),
            FieldKind::Number => value.is_i64() || value.is_u64(),
            FieldKind::Bool => value.is_boolean(),
            FieldKind::Array => value.is_array(),
        }
    }
}

/// One field of a result object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Key in the result object
    pub name: &'static str,
    /// Expected JSON kind
    pub kind: FieldKind,
    /// Whether the key may be missing
    pub optional: bool,
    /// Human-readable description
    pub description: &'static str,
}

impl FieldSpec {
    /// Required field
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            optional: false,
            description,
        }
    }

    /// Optional field
    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            optional: true,
            description,
        }
    }
}

/// Ordered field list describing a `NameInfo` object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameInfoSchema {
    fields: Vec<FieldSpec>,
}

impl NameInfoSchema {
    /// Fields present on every projection
    pub fn base() -> Self {
        use FieldKind::*;
        Self {
            fields: vec![
                FieldSpec::optional("name", String, "the requested name"),
                FieldSpec::optional("name_error", String, "replaces name if the encoding failed"),
                FieldSpec::required("name_encoding", String, "the encoding of name"),
                FieldSpec::optional("value", String, "the name's current value"),
                FieldSpec::optional("value_error", String, "replaces value if the encoding failed"),
                FieldSpec::required("value_encoding", String, "the encoding of value"),
                FieldSpec::required("txid", Hex, "the name's last update tx"),
                FieldSpec::required(
                    "vout",
                    Number,
                    "the index of the name output in the last update",
                ),
                FieldSpec::required("address", String, "the address holding the name"),
            ],
        }
    }

    /// Add the expiration group
    pub fn with_expiration(self) -> Self {
        self.with_field(FieldSpec::required(
            "height",
            FieldKind::Number,
            "the name's last update height",
        ))
        .with_field(FieldSpec::required(
            "expires_in",
            FieldKind::Number,
            "expire counter for the name",
        ))
        .with_field(FieldSpec::required(
            "expired",
            FieldKind::Bool,
            "whether the name is expired",
        ))
    }

    /// Add the ownership flag
    pub fn with_ownership(self) -> Self {
        self.with_field(FieldSpec::optional(
            "ismine",
            FieldKind::Bool,
            "whether the name is owned by the local key store",
        ))
    }

    /// Add an arbitrary field
    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Fields in order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by key
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check a serialized object against the schema
    ///
    /// Fails on undescribed keys, missing required keys, kind mismatches and
    /// on objects carrying both or neither of `name` / `name_error` (same for
    /// value).
    pub fn check(&self, object: &Value) -> Result<(), String> {
        let Some(map) = object.as_object() else {
            return Err("not an object".to_string());
        };
        for (key, value) in map {
            let field = self
                .field(key)
                .ok_or_else(|| format!("undescribed field '{key}'"))?;
            if !field.kind.matches(value) {
                return Err(format!("field '{key}' is not a {:?}", field.kind));
            }
        }
        for field in self.fields.iter().filter(|f| !f.optional) {
            if !map.contains_key(field.name) {
                return Err(format!("missing field '{}'", field.name));
            }
        }
        for base in ["name", "value"] {
            let error = format!("{base}_error");
            if map.contains_key(base) == map.contains_key(&error) {
                return Err(format!("exactly one of '{base}' and '{error}' expected"));
            }
        }
        Ok(())
    }
}
