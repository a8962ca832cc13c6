//! Domain models for unitpath
//!
//! This module contains the values flowing between the resolver, the
//! assembler and the factory. Output types ([`ClassLoaderModel`],
//! [`ArtifactDescriptor`]) expose accessors only.

pub mod artifact;
pub mod classloader;
pub mod dependency;
pub mod location;

pub use artifact::ArtifactDescriptor;
pub use classloader::{BundleDependency, ClassLoaderModel};
pub use dependency::{ExportSurface, ResolvedDependency};
pub use location::{directory_location, location_for, location_path};
