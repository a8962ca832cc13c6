//! Error types and handling for unitpath
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Descriptor loading errors
//! - [`deps`]: Dependency resolution and shape errors
//! - [`binary`]: Binary content exploration errors
//! - [`config`]: Settings errors

pub mod binary;
pub mod config;
pub mod deps;
pub mod descriptor;


use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for unitpath operations
#[derive(Error, Diagnostic, Debug)]
pub enum UnitError {
    // Descriptor errors
    #[error("Malformed unit descriptor: {reason}")]
    #[diagnostic(
        code(unitpath::descriptor::malformed),
        help("Check the descriptor keys (minRuntimeVersion, dependencies, ...)")
    )]
    MalformedDescriptor { reason: String },

    #[error("Unsupported version {found}: this runtime supports up to {supported}")]
    #[diagnostic(code(unitpath::descriptor::unsupported_version))]
    UnsupportedVersion { found: String, supported: String },

    #[error("Unit descriptor not found: {path}")]
    #[diagnostic(
        code(unitpath::descriptor::missing),
        help("Every unit root must contain META-INF/unit-artifact/unit-artifact.json")
    )]
    MissingDescriptor { path: String },

    #[error("Failed to read unit descriptor: {path}: {reason}")]
    #[diagnostic(code(unitpath::descriptor::read_failed))]
    DescriptorReadFailed { path: String, reason: String },

    // Dependency errors
    #[error("Unable to resolve dependency '{coordinate}': {reason}")]
    #[diagnostic(
        code(unitpath::deps::unresolvable),
        help("Check that the coordinate exists in the configured repository")
    )]
    UnresolvableDependency { coordinate: String, reason: String },

    #[error("Invalid dependency shape for '{coordinate}': {reason}")]
    #[diagnostic(
        code(unitpath::deps::invalid_shape),
        help("A plugin dependency is isolated and can never be shared")
    )]
    InvalidDependencyShape { coordinate: String, reason: String },

    // Binary errors
    #[error("Failed to read binary at '{location}': {reason}")]
    #[diagnostic(code(unitpath::binary::unreadable))]
    BinaryUnreadable { location: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(unitpath::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(unitpath::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },
}

/// Failure to build a single unit
///
/// Carries the unit root so a failure can always be traced back to the unit
/// being deployed. The wrapped [`UnitError`] is the lower-layer error,
/// unchanged in kind.
#[derive(Error, Diagnostic, Debug)]
#[error("Failed to build unit at '{}'", unit_root.display())]
#[diagnostic(code(unitpath::build::failed))]
pub struct BuildError {
    pub unit_root: PathBuf,
    #[source]
    #[diagnostic_source]
    pub source: UnitError,
}

impl BuildError {
    pub fn new(unit_root: impl Into<PathBuf>, source: UnitError) -> Self {
        Self {
            unit_root: unit_root.into(),
            source,
        }
    }

    /// The lower-layer error that caused the build to fail
    pub fn kind(&self) -> &UnitError {
        &self.source
    }

    pub fn unit_root(&self) -> &Path {
        &self.unit_root
    }

    pub fn into_inner(self) -> UnitError {
        self.source
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UnitError>;
