//! Resolver serving pre-resolved dependency trees

use std::collections::HashMap;

use crate::descriptor::{Coordinate, DependencySpec};
use crate::domain::ResolvedDependency;
use crate::error::{Result, deps::unresolvable};
use crate::resolver::DependencyResolver;

/// Answers from trees registered up front, keyed by the coordinate of their
/// root
///
/// The declared spec (scope, shared flag) replaces the registered root's
/// spec, so one tree can serve units that declare it differently.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResolver {
    entries: HashMap<Coordinate, ResolvedDependency>,
}

impl InMemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, dependency: ResolvedDependency) -> Self {
        self.insert(dependency);
        self
    }

    /// Register a tree, replacing any tree with the same root coordinate
    pub fn insert(&mut self, dependency: ResolvedDependency) {
        self.entries
            .insert(dependency.coordinate().clone(), dependency);
    }
}

impl FromIterator<ResolvedDependency> for InMemoryResolver {
    fn from_iter<I: IntoIterator<Item = ResolvedDependency>>(iter: I) -> Self {
        let mut resolver = Self::new();
        for dependency in iter {
            resolver.insert(dependency);
        }
        resolver
    }
}

impl DependencyResolver for InMemoryResolver {
    fn resolve(&self, dependencies: &[DependencySpec]) -> Result<Vec<ResolvedDependency>> {
        dependencies
            .iter()
            .map(|spec| {
                let mut resolved = self
                    .entries
                    .get(&spec.coordinate)
                    .cloned()
                    .ok_or_else(|| {
                        unresolvable(&spec.coordinate, "not registered with the resolver")
                    })?;
                resolved.spec = spec.clone();
                Ok(resolved)
            })
            .collect()
    }
}
