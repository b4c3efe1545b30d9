//! Error types for the name registry
//!
//! This module defines the error taxonomy shared by every layer above core.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

use crate::encoding::{EncodingError, NameEncoding};

/// Result type alias for name registry operations
pub type NameResult<T> = std::result::Result<T, NameError>;

/// Error types for the name registry
#[derive(Debug, Error)]
pub enum NameError {
    /// Malformed or out-of-range option, rejected before any state is touched
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Text that cannot be decoded under the requested encoding
    #[error("Name/value is invalid for encoding {encoding}")]
    InvalidEncoding {
        /// Encoding the caller asked for (or the configured default)
        encoding: NameEncoding,
    },

    /// The queried name has no current record
    #[error("name not found: {0}")]
    NotFound(String),

    /// A feature was requested that is disabled by configuration
    #[error("{0} is not enabled")]
    FeatureDisabled(String),

    /// A required external lookup could not be satisfied
    #[error("Dependency unavailable: {0}")]
    DependencyUnavailable(String),

    /// The registry is still catching up with the chain
    #[error("registry is still downloading blocks")]
    InitialDownload,

    /// I/O error (export file creation and writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl NameError {
    /// Shorthand for an `InvalidParameter` error
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        NameError::InvalidParameter(reason.into())
    }

    /// Shorthand for a `DependencyUnavailable` error
    pub fn dependency_unavailable(reason: impl Into<String>) -> Self {
        NameError::DependencyUnavailable(reason.into())
    }
}

impl From<EncodingError> for NameError {
    fn from(e: EncodingError) -> Self {
        NameError::InvalidEncoding {
            encoding: e.encoding(),
        }
    }
}
