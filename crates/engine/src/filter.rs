//! Filter predicates for name scans
//!
//! A scan evaluates every candidate record against a [`FilterSet`]: the
//! confirmation window first, then the byte prefix, then the pattern. All
//! active filters must pass.

use namedb_core::{encoding, Name, NameEncoding, NameError, NameRecord, NameResult};
use regex::Regex;

use crate::options::ConfirmationBounds;

/// Absolute height range derived from confirmation bounds
///
/// With tip height `h`, a record at height `r` has `h - r + 1`
/// confirmations. `min_conf` therefore caps the height at
/// `h - min_conf + 1`, and `max_conf` floors it at `h - max_conf + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationWindow {
    max_height: i64,
    min_height: Option<i64>,
}

impl ConfirmationWindow {
    /// Window for `bounds` at tip `current_height`
    pub fn new(bounds: ConfirmationBounds, current_height: u32) -> Self {
        let tip = i64::from(current_height);
        Self {
            max_height: tip - bounds.min_conf + 1,
            min_height: bounds.max_conf.map(|max| tip - max + 1),
        }
    }

    /// Highest admitted height
    pub fn max_height(&self) -> i64 {
        self.max_height
    }

    /// Lowest admitted height, if bounded
    pub fn min_height(&self) -> Option<i64> {
        self.min_height
    }

    /// Whether a record at `height` lies inside the window
    pub fn contains(&self, height: u32) -> bool {
        let height = i64::from(height);
        if height > self.max_height {
            return false;
        }
        match self.min_height {
            Some(min) => height >= min,
            None => true,
        }
    }
}

/// Byte-wise name prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixFilter {
    prefix: Vec<u8>,
}

impl PrefixFilter {
    /// Prefix over raw bytes
    pub fn new(prefix: impl Into<Vec<u8>>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Decode `text` with `encoding` into a prefix
    pub fn decode(text: &str, encoding: NameEncoding) -> NameResult<Self> {
        Ok(Self::new(encoding::decode(text, encoding)?))
    }

    /// Whether `name` starts with the prefix
    pub fn matches(&self, name: &Name) -> bool {
        name.starts_with(&self.prefix)
    }
}

/// Regular expression searched in the UTF-8 form of a name
///
/// The search is unanchored: use `^` / `$` to anchor. Names that are not
/// valid UTF-8 never match.
#[derive(Debug, Clone)]
pub struct PatternFilter {
    regex: Regex,
}

impl PatternFilter {
    /// Compile `pattern`
    pub fn new(pattern: &str) -> NameResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| NameError::invalid_parameter(format!("invalid regexp: {e}")))?;
        Ok(Self { regex })
    }

    /// The source pattern
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the pattern occurs in the name's UTF-8 text
    pub fn matches(&self, name: &Name) -> bool {
        name.to_utf8()
            .map(|text| self.regex.is_match(text))
            .unwrap_or(false)
    }
}

/// Conjunction of the active filters of one scan
#[derive(Debug, Clone)]
pub struct FilterSet {
    window: ConfirmationWindow,
    prefix: Option<PrefixFilter>,
    pattern: Option<PatternFilter>,
}

impl FilterSet {
    /// Filters with only a confirmation window
    pub fn new(window: ConfirmationWindow) -> Self {
        Self {
            window,
            prefix: None,
            pattern: None,
        }
    }

    /// Add a prefix filter
    pub fn with_prefix(mut self, prefix: PrefixFilter) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Add a pattern filter
    pub fn with_pattern(mut self, pattern: PatternFilter) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// The confirmation window
    pub fn window(&self) -> &ConfirmationWindow {
        &self.window
    }

    /// Whether a record passes every active filter
    pub fn matches(&self, name: &Name, record: &NameRecord) -> bool {
        if !self.window.contains(record.height) {
            return false;
        }
        if let Some(prefix) = &self.prefix {
            if !prefix.matches(name) {
                return false;
            }
        }
        if let Some(pattern) = &self.pattern {
            if !pattern.matches(name) {
                return false;
            }
        }
        true
    }
}
