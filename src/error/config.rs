//! Configuration errors

use super::UnitError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> UnitError {
    UnitError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> UnitError {
    UnitError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
