//! Resolved dependencies
//!
//! The resolver hands the assembler a rooted forest: one
//! [`ResolvedDependency`] per direct dependency, each owning the subtree of
//! its transitive closure. A binary reachable through two parents appears as
//! two independent copies, because isolation is decided per path.

use std::collections::BTreeSet;

use serde::Serialize;
use url::Url;

use crate::descriptor::{Coordinate, DependencySpec, Scope};

/// Packages and resources a binary offers to the units that export it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSurface {
    pub packages: BTreeSet<String>,
    pub resources: BTreeSet<String>,
}

impl ExportSurface {
    pub fn new<P, R>(packages: P, resources: R) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.resources.is_empty()
    }
}

/// A dependency materialized into a concrete binary location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDependency {
    pub spec: DependencySpec,
    pub location: Url,
    /// Public surface of the binary; only consulted when the dependency is
    /// shared
    pub surface: ExportSurface,
    /// Transitive dependencies, in declaration order
    pub dependencies: Vec<ResolvedDependency>,
}

impl ResolvedDependency {
    pub fn new(spec: DependencySpec, location: Url) -> Self {
        Self {
            spec,
            location,
            surface: ExportSurface::default(),
            dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_surface(mut self, surface: ExportSurface) -> Self {
        self.surface = surface;
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: ResolvedDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.spec.coordinate
    }

    pub fn scope(&self) -> Scope {
        self.spec.scope
    }

    pub fn is_plugin(&self) -> bool {
        self.spec.is_plugin()
    }

    pub fn is_shared(&self) -> bool {
        self.spec.is_shared()
    }

    /// This dependency followed by its whole closure, depth-first in
    /// declaration order
    pub fn walk(&self) -> Vec<&ResolvedDependency> {
        let mut nodes = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.dependencies.iter().rev());
        }
        nodes
    }
}
