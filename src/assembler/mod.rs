//! Classpath and isolation assembly
//!
//! Turns a unit descriptor and its resolved dependency forest into a
//! [`ClassLoaderModel`].
//!
//! ## Rules
//!
//! For every direct dependency `d`, in declaration order:
//!
//! 1. `d` is recorded as a [`BundleDependency`], isolated or not.
//! 2. A plugin `d` is an isolation boundary: neither its location nor any
//!    location of its closure reaches the classpath, and nothing from the
//!    closure is exported.
//! 3. A non-plugin `d` contributes its location and, depth-first, those of
//!    its closure. A plugin met inside the closure is isolated from there
//!    down.
//! 4. A shared `d` additionally exports its binary's packages and resources.
//!
//! The unit's own classes location always comes first and the descriptor's
//! explicit exports are always included.
//!
//! A location that belongs to any isolated closure stays off the classpath
//! even when a non-plugin path reaches it too: isolation wins over merging.
//! Locations are deduplicated by identity, first occurrence wins.

pub mod validation;

use std::collections::{BTreeSet, HashSet};

use indexmap::{IndexMap, IndexSet};
use url::Url;

use crate::descriptor::UnitDescriptor;
use crate::domain::{BundleDependency, ClassLoaderModel, ResolvedDependency};
use crate::error::Result;

pub use validation::validate_shapes;

/// Assemble the class loader model of a unit
///
/// Performs no I/O. The only failure is an invalid dependency shape,
/// detected before any rule is applied.
pub fn assemble(
    descriptor: &UnitDescriptor,
    classes_location: Url,
    dependencies: &[ResolvedDependency],
) -> Result<ClassLoaderModel> {
    validate_shapes(dependencies)?;

    let isolated = isolated_locations(dependencies);

    let mut classpath = Classpath::new(classes_location);
    let mut bundles = IndexSet::new();
    let mut exported_packages: BTreeSet<String> = descriptor.exported_packages.clone();
    let mut exported_resources: BTreeSet<String> = descriptor.exported_resources.clone();

    for dependency in dependencies {
        bundles.insert(BundleDependency::from(dependency));

        if dependency.is_plugin() {
            tracing::debug!(coordinate = %dependency.coordinate(), "isolating plugin dependency");
            continue;
        }

        classpath.add_closure(dependency, &isolated);

        if dependency.is_shared() {
            if isolated.contains(&dependency.location) {
                tracing::warn!(
                    coordinate = %dependency.coordinate(),
                    "shared dependency is also part of an isolated plugin closure; not exported"
                );
                continue;
            }
            if dependency.surface.is_empty() {
                tracing::warn!(
                    coordinate = %dependency.coordinate(),
                    "shared dependency exports no packages or resources"
                );
            }
            exported_packages.extend(dependency.surface.packages.iter().cloned());
            exported_resources.extend(dependency.surface.resources.iter().cloned());
        }
    }

    Ok(ClassLoaderModel::new(
        classpath.into_urls(),
        bundles,
        exported_packages,
        exported_resources,
    ))
}

/// Locations of every plugin-classified node and its whole closure, wherever
/// in the forest the plugin appears
fn isolated_locations(dependencies: &[ResolvedDependency]) -> HashSet<&Url> {
    let mut isolated = HashSet::new();
    for root in dependencies {
        for node in root.walk() {
            if node.is_plugin() {
                isolated.extend(node.walk().into_iter().map(|member| &member.location));
            }
        }
    }
    isolated
}

/// Ordered, duplicate-free classpath under construction
struct Classpath {
    /// Location to the coordinate that first contributed it
    entries: IndexMap<Url, Option<String>>,
}

impl Classpath {
    fn new(classes_location: Url) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(classes_location, None);
        Self { entries }
    }

    /// Add a non-plugin dependency and its closure, depth-first in
    /// declaration order, stopping at plugin boundaries
    fn add_closure(&mut self, dependency: &ResolvedDependency, isolated: &HashSet<&Url>) {
        let mut stack = vec![dependency];
        while let Some(node) = stack.pop() {
            if node.is_plugin() {
                tracing::debug!(coordinate = %node.coordinate(), "isolating transitive plugin");
                continue;
            }

            if isolated.contains(&node.location) {
                tracing::debug!(
                    coordinate = %node.coordinate(),
                    "location belongs to an isolated closure; skipped"
                );
            } else if let Some(first) = self.entries.get(&node.location) {
                tracing::trace!(
                    coordinate = %node.coordinate(),
                    first = first.as_deref().unwrap_or("<unit>"),
                    "location already on classpath"
                );
            } else {
                tracing::debug!(
                    coordinate = %node.coordinate(),
                    location = %node.location,
                    "classpath entry"
                );
                self.entries
                    .insert(node.location.clone(), Some(node.coordinate().to_string()));
            }

            stack.extend(node.dependencies.iter().rev());
        }
    }

    fn into_urls(self) -> Vec<Url> {
        self.entries.into_keys().collect()
    }
}

#[cfg(test)]
mod tests;
