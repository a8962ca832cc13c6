//! Binary content errors

use super::UnitError;

/// Creates a binary unreadable error
pub fn unreadable(location: impl Into<String>, reason: impl ToString) -> UnitError {
    UnitError::BinaryUnreadable {
        location: location.into(),
        reason: reason.to_string(),
    }
}
