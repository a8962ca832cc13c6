//! Resolution against an on-disk repository
//!
//! Layout, for `org.foo:lib:1.0[:classifier]`:
//!
//! ```text
//! <root>/org/foo/lib/1.0/lib-1.0[-classifier].jar        binary (jar)
//! <root>/org/foo/lib/1.0/lib-1.0[-classifier]/           binary (exploded)
//! <root>/org/foo/lib/1.0/lib-1.0[-classifier].deps.yaml  transitive dependencies
//! ```
//!
//! The metadata file is optional and lists dependencies the same way a unit
//! descriptor does:
//!
//! ```yaml
//! dependencies:
//!   - groupId: org.foo
//!     artifactId: helper
//!     version: "2.0"
//!     scope: runtime
//! ```
//!
//! Transitive `test` and `provided` dependencies are not part of the runtime
//! closure and are not followed. A binary reached through two parents is
//! materialized once per parent.

use std::path::{Path, PathBuf};

use crate::descriptor::serialization::RawDependencyMetadata;
use crate::descriptor::{Coordinate, DependencySpec};
use crate::domain::{ExportSurface, ResolvedDependency, location_for};
use crate::error::{Result, deps::unresolvable};
use crate::explorer::explore;
use crate::resolver::DependencyResolver;
use crate::settings::{DEFAULT_MAX_RESOLUTION_DEPTH, Settings};

const JAR_EXTENSION: &str = "jar";
const METADATA_SUFFIX: &str = ".deps.yaml";

#[derive(Debug, Clone)]
pub struct LocalRepositoryResolver {
    root: PathBuf,
    max_depth: usize,
}

impl LocalRepositoryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(settings.repository_dir()?).with_max_depth(settings.max_resolution_depth))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every file of a coordinate's version
    pub fn version_dir(&self, coordinate: &Coordinate) -> PathBuf {
        let mut dir = self.root.clone();
        dir.extend(coordinate.group_id.split('.').filter(|s| !s.is_empty()));
        dir.push(&coordinate.artifact_id);
        dir.push(&coordinate.version);
        dir
    }

    /// Binary of a coordinate: the jar if present, else the exploded
    /// directory
    pub fn binary_path(&self, coordinate: &Coordinate) -> Option<PathBuf> {
        let dir = self.version_dir(coordinate);
        let base = base_name(coordinate);

        let jar = dir.join(format!("{base}.{JAR_EXTENSION}"));
        if jar.is_file() {
            return Some(jar);
        }

        let exploded = dir.join(&base);
        exploded.is_dir().then_some(exploded)
    }

    fn metadata_path(&self, coordinate: &Coordinate) -> PathBuf {
        self.version_dir(coordinate)
            .join(format!("{}{METADATA_SUFFIX}", base_name(coordinate)))
    }

    /// Transitive dependencies listed next to the binary
    fn transitive_specs(&self, coordinate: &Coordinate) -> Result<Vec<DependencySpec>> {
        let path = self.metadata_path(coordinate);
        if !path.is_file() {
            return Ok(Vec::new());
        }

        let yaml = std::fs::read_to_string(&path).map_err(|e| {
            unresolvable(
                coordinate,
                format!("failed to read '{}': {e}", path.display()),
            )
        })?;
        let metadata: RawDependencyMetadata = serde_yaml::from_str(&yaml).map_err(|e| {
            unresolvable(
                coordinate,
                format!("invalid dependency metadata '{}': {e}", path.display()),
            )
        })?;

        let mut specs = Vec::with_capacity(metadata.dependencies.len());
        for (position, raw) in metadata.dependencies.into_iter().enumerate() {
            let mut spec = raw.into_spec(position).map_err(|e| {
                unresolvable(
                    coordinate,
                    format!("invalid dependency metadata '{}': {e}", path.display()),
                )
            })?;
            // Only the unit decides what it shares
            spec.shared = false;
            if spec.scope.is_transitive() {
                specs.push(spec);
            } else {
                tracing::trace!(
                    parent = %coordinate,
                    coordinate = %spec.coordinate,
                    scope = %spec.scope,
                    "transitive dependency not followed"
                );
            }
        }
        Ok(specs)
    }

    fn resolve_node(
        &self,
        spec: &DependencySpec,
        chain: &mut Vec<Coordinate>,
    ) -> Result<ResolvedDependency> {
        let coordinate = &spec.coordinate;

        if chain.contains(coordinate) {
            let cycle = chain
                .iter()
                .map(ToString::to_string)
                .chain(std::iter::once(coordinate.to_string()))
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(unresolvable(coordinate, format!("dependency cycle: {cycle}")));
        }
        if chain.len() >= self.max_depth {
            return Err(unresolvable(
                coordinate,
                format!("resolution depth exceeds {}", self.max_depth),
            ));
        }

        let binary = self.binary_path(coordinate).ok_or_else(|| {
            unresolvable(
                coordinate,
                format!("not found in repository '{}'", self.root.display()),
            )
        })?;
        let location = location_for(&binary).ok_or_else(|| {
            unresolvable(
                coordinate,
                format!("'{}' is not a valid location", binary.display()),
            )
        })?;

        let surface = if spec.is_shared() && !spec.is_plugin() {
            explore(&binary)?
        } else {
            ExportSurface::default()
        };

        tracing::debug!(%coordinate, %location, depth = chain.len(), "resolved dependency");

        let mut resolved = ResolvedDependency::new(spec.clone(), location).with_surface(surface);

        chain.push(coordinate.clone());
        for child in self.transitive_specs(coordinate)? {
            match self.resolve_node(&child, chain) {
                Ok(node) => resolved.dependencies.push(node),
                Err(e) => {
                    chain.pop();
                    return Err(e);
                }
            }
        }
        chain.pop();

        Ok(resolved)
    }
}

impl DependencyResolver for LocalRepositoryResolver {
    fn resolve(&self, dependencies: &[DependencySpec]) -> Result<Vec<ResolvedDependency>> {
        let mut chain = Vec::new();
        dependencies
            .iter()
            .map(|spec| self.resolve_node(spec, &mut chain))
            .collect()
    }
}

/// File name of a coordinate's binary without extension
fn base_name(coordinate: &Coordinate) -> String {
    match &coordinate.classifier {
        Some(classifier) => format!(
            "{}-{}-{classifier}",
            coordinate.artifact_id, coordinate.version
        ),
        None => format!("{}-{}", coordinate.artifact_id, coordinate.version),
    }
}
