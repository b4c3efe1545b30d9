//! Expiration status of a name
//!
//! The expiration *rule* (how many blocks a name survives after its last
//! update) is a consensus parameter owned by the chain. This module only
//! applies it:
//!
//! ```text
//! expires_in = (height + depth(current_height)) - current_height
//! expired    = expires_in <= 0
//! ```
//!
//! The status depends on the current chain height and must be recomputed on
//! every query; it is never stored.

use serde::{Deserialize, Serialize};

/// Supplies the expiration depth in effect at a given chain height
pub trait ExpirationRule: Send + Sync {
    /// Number of blocks a name survives after its last update, as in effect
    /// at `current_height`
    fn expiration_depth(&self, current_height: u32) -> i64;
}

impl<F> ExpirationRule for F
where
    F: Fn(u32) -> i64 + Send + Sync,
{
    fn expiration_depth(&self, current_height: u32) -> i64 {
        self(current_height)
    }
}

/// Expiration depth that does not vary with height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedExpiration(pub i64);

impl ExpirationRule for FixedExpiration {
    fn expiration_depth(&self, _current_height: u32) -> i64 {
        self.0
    }
}

/// Namecoin mainnet schedule
///
/// Names lived 12000 blocks until height 24000; the depth then grows one
/// block per block until it reaches 36000 at height 48000.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamecoinExpiration;

impl ExpirationRule for NamecoinExpiration {
    fn expiration_depth(&self, current_height: u32) -> i64 {
        let height = i64::from(current_height);
        if height < 24_000 {
            12_000
        } else if height < 48_000 {
            height - 12_000
        } else {
            36_000
        }
    }
}

/// Derived expiration fields of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationStatus {
    /// Last-update height of the record
    pub height: u32,
    /// Blocks left until expiration (zero or negative once expired)
    pub expires_in: i64,
    /// Whether the name has expired
    pub expired: bool,
}

impl ExpirationStatus {
    /// Compute the status of a record last updated at `height`
    ///
    /// `expires_in` saturates at the `i64` bounds for extreme depths.
    pub fn compute(height: u32, current_height: u32, rule: &dyn ExpirationRule) -> Self {
        let depth = rule.expiration_depth(current_height);
        let exact = i128::from(height) + i128::from(depth) - i128::from(current_height);
        let expires_in = exact.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
        Self {
            height,
            expires_in,
            expired: expires_in <= 0,
        }
    }
}
