//! Class loader model
//!
//! The output of assembly. Built once by the assembler and read-only
//! afterwards: there are no setters, only accessors.

use std::collections::BTreeSet;
use std::path::PathBuf;

use indexmap::IndexSet;
use serde::Serialize;
use url::Url;

use crate::descriptor::{Coordinate, Scope};
use crate::domain::dependency::ResolvedDependency;
use crate::domain::location::location_path;

/// Reporting projection of a direct dependency
///
/// Recorded for every direct dependency, isolated or not. Does not imply the
/// binary is on the classpath.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleDependency {
    pub coordinate: Coordinate,
    pub scope: Scope,
    pub bundle_uri: Url,
}

impl From<&ResolvedDependency> for BundleDependency {
    fn from(dependency: &ResolvedDependency) -> Self {
        Self {
            coordinate: dependency.coordinate().clone(),
            scope: dependency.scope(),
            bundle_uri: dependency.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLoaderModel {
    urls: Vec<Url>,
    dependencies: IndexSet<BundleDependency>,
    exported_packages: BTreeSet<String>,
    exported_resources: BTreeSet<String>,
}

impl ClassLoaderModel {
    pub(crate) fn new(
        urls: Vec<Url>,
        dependencies: IndexSet<BundleDependency>,
        exported_packages: BTreeSet<String>,
        exported_resources: BTreeSet<String>,
    ) -> Self {
        Self {
            urls,
            dependencies,
            exported_packages,
            exported_resources,
        }
    }

    /// Classpath locations in precedence order; the unit's own classes first
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// One record per direct dependency, in declaration order
    pub fn dependencies(&self) -> &IndexSet<BundleDependency> {
        &self.dependencies
    }

    pub fn exported_packages(&self) -> &BTreeSet<String> {
        &self.exported_packages
    }

    pub fn exported_resources(&self) -> &BTreeSet<String> {
        &self.exported_resources
    }

    pub fn contains_url(&self, location: &Url) -> bool {
        self.urls.contains(location)
    }

    /// Classpath as filesystem paths
    pub fn classpath(&self) -> Vec<PathBuf> {
        self.urls.iter().filter_map(location_path).collect()
    }
}
