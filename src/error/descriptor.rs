//! Descriptor errors

use super::UnitError;

/// Creates a malformed descriptor error
pub fn malformed(reason: impl Into<String>) -> UnitError {
    UnitError::MalformedDescriptor {
        reason: reason.into(),
    }
}

/// Creates an unsupported version error
pub fn unsupported_version(found: impl Into<String>, supported: impl Into<String>) -> UnitError {
    UnitError::UnsupportedVersion {
        found: found.into(),
        supported: supported.into(),
    }
}

/// Creates a missing descriptor error
pub fn missing(path: impl Into<String>) -> UnitError {
    UnitError::MissingDescriptor { path: path.into() }
}

/// Creates a descriptor read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> UnitError {
    UnitError::DescriptorReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
