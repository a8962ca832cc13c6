//! Dependency resolution adapter
//!
//! The only seam between unitpath and dependency-resolution infrastructure.
//! A [`DependencyResolver`] turns declared dependencies into
//! [`ResolvedDependency`] trees: one per direct dependency, in declaration
//! order, each owning its transitive closure.
//!
//! Resolvers perform no isolation logic and never retry; a coordinate that
//! cannot be located is reported as
//! [`UnitError::UnresolvableDependency`](crate::error::UnitError::UnresolvableDependency).
//!
//! Implementations:
//! - [`LocalRepositoryResolver`]: materializes coordinates from an on-disk
//!   repository
//! - [`InMemoryResolver`]: serves pre-resolved trees

pub mod memory;
pub mod repository;

use crate::descriptor::DependencySpec;
use crate::domain::ResolvedDependency;
use crate::error::Result;

pub use memory::InMemoryResolver;
pub use repository::LocalRepositoryResolver;

pub trait DependencyResolver: Send + Sync {
    /// Resolve each direct dependency together with its transitive closure
    fn resolve(&self, dependencies: &[DependencySpec]) -> Result<Vec<ResolvedDependency>>;
}

impl<R: DependencyResolver + ?Sized> DependencyResolver for &R {
    fn resolve(&self, dependencies: &[DependencySpec]) -> Result<Vec<ResolvedDependency>> {
        (**self).resolve(dependencies)
    }
}

impl<R: DependencyResolver + ?Sized> DependencyResolver for Box<R> {
    fn resolve(&self, dependencies: &[DependencySpec]) -> Result<Vec<ResolvedDependency>> {
        (**self).resolve(dependencies)
    }
}
