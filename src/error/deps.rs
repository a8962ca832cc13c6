//! Dependency errors

use super::UnitError;

/// Creates an unresolvable dependency error
pub fn unresolvable(coordinate: impl ToString, reason: impl Into<String>) -> UnitError {
    UnitError::UnresolvableDependency {
        coordinate: coordinate.to_string(),
        reason: reason.into(),
    }
}

/// Creates an invalid dependency shape error
pub fn invalid_shape(coordinate: impl ToString, reason: impl Into<String>) -> UnitError {
    UnitError::InvalidDependencyShape {
        coordinate: coordinate.to_string(),
        reason: reason.into(),
    }
}
