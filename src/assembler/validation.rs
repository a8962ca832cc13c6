//! Input validation for the assembler
//!
//! Plugin dependencies are isolation boundaries and shared dependencies are
//! exported; a dependency cannot be both. Checking this once up front keeps
//! the assembly rules total.

use crate::domain::ResolvedDependency;
use crate::error::{Result, deps::invalid_shape};

/// Validate every node of the resolved forest
pub fn validate_shapes(dependencies: &[ResolvedDependency]) -> Result<()> {
    for root in dependencies {
        for node in root.walk() {
            if node.is_plugin() && node.is_shared() {
                return Err(invalid_shape(
                    node.coordinate(),
                    "a plugin dependency is isolated and cannot also be shared",
                ));
            }
        }
    }
    Ok(())
}
