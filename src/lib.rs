//! unitpath - classpath and isolation assembler for deployable units
//!
//! Given a unit root on disk, unitpath reads the unit's declarative
//! descriptor, resolves its dependencies and computes the unit's
//! [`ClassLoaderModel`](domain::ClassLoaderModel): which binaries sit on its
//! classpath, which plugin dependencies are isolated behind their own
//! boundary, and which packages and resources the unit exports.
//!
//! ```no_run
//! use std::path::Path;
//! use unitpath::factory::ArtifactDescriptorFactory;
//! use unitpath::resolver::LocalRepositoryResolver;
//!
//! let factory = ArtifactDescriptorFactory::new(LocalRepositoryResolver::new("/opt/repository"));
//! let artifact = factory.build(Path::new("/opt/units/echo"))?;
//! for entry in artifact.class_loader_model().classpath() {
//!     println!("{}", entry.display());
//! }
//! # Ok::<(), unitpath::error::BuildError>(())
//! ```

pub mod assembler;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod explorer;
pub mod factory;
pub mod hash;
pub mod resolver;
pub mod settings;

#[cfg(test)]
mod test_fixtures;
