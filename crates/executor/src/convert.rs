//! Error conversion from internal error types.
//!
//! Maps [`NameError`] from the engine onto the executor's [`Error`] without
//! losing the message the engine produced.

use namedb_core::NameError;

use crate::Error;

impl From<NameError> for Error {
    fn from(err: NameError) -> Self {
        match err {
            NameError::InvalidParameter(reason) => Error::InvalidParameter { reason },
            e @ NameError::InvalidEncoding { .. } => Error::InvalidEncoding {
                reason: e.to_string(),
            },
            NameError::NotFound(name) => Error::NameNotFound { name },
            NameError::FeatureDisabled(feature) => Error::FeatureDisabled { feature },
            NameError::DependencyUnavailable(reason) => Error::DependencyUnavailable { reason },
            NameError::InitialDownload => Error::InitialDownload,
            NameError::Io(e) => Error::Io {
                reason: e.to_string(),
            },
            NameError::Serialization(reason) => Error::Serialization { reason },
        }
    }
}

/// Convert an engine result into an executor result.
pub fn convert_result<T>(result: namedb_core::NameResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
