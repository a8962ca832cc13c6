//! Unit descriptor (`META-INF/unit-artifact/unit-artifact.json`)
//!
//! This module handles the declarative descriptor of a deployable unit:
//! - [`dependency`]: coordinates, scopes and dependency declarations
//! - [`version`]: dotted numeric runtime versions
//! - [`loader`]: parsing and normalizing raw descriptor bytes
//! - `serialization`: the raw on-disk shape

pub mod dependency;
pub mod loader;
pub(crate) mod serialization;
pub mod version;

use std::collections::BTreeSet;

use serde::Serialize;

pub use dependency::{Coordinate, DependencySpec, PLUGIN_CLASSIFIER, Scope, SharedLibrarySpec};
pub use loader::DescriptorLoader;
pub use version::RuntimeVersion;

/// Location of the descriptor file, relative to the unit root
pub const DESCRIPTOR_PATH: &str = "META-INF/unit-artifact/unit-artifact.json";

/// Configuration resource used when a descriptor declares none
pub const DEFAULT_CONFIG_RESOURCE: &str = "unit-config.xml";

/// Normalized descriptor of a deployable unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDescriptor {
    /// Unit name override; the unit root's directory name is used otherwise
    pub name: Option<String>,

    pub min_runtime_version: RuntimeVersion,

    /// Configuration resource names; the first one is the primary resource
    pub config_resources: Vec<String>,

    /// Declared dependencies, in declaration order
    pub dependencies: Vec<DependencySpec>,

    pub shared_libraries: BTreeSet<SharedLibrarySpec>,

    pub exported_packages: BTreeSet<String>,

    pub exported_resources: BTreeSet<String>,
}

impl UnitDescriptor {
    /// Create a descriptor with no dependencies, no exports and the default
    /// configuration resource
    pub fn new(min_runtime_version: RuntimeVersion) -> Self {
        Self {
            name: None,
            min_runtime_version,
            config_resources: vec![DEFAULT_CONFIG_RESOURCE.to_string()],
            dependencies: Vec::new(),
            shared_libraries: BTreeSet::new(),
            exported_packages: BTreeSet::new(),
            exported_resources: BTreeSet::new(),
        }
    }

    /// The primary configuration resource
    pub fn primary_config_resource(&self) -> &str {
        self.config_resources
            .first()
            .map_or(DEFAULT_CONFIG_RESOURCE, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_config_resource() {
        let descriptor = UnitDescriptor::new(RuntimeVersion::new(4, 0, 0));
        assert_eq!(descriptor.config_resources, vec!["unit-config.xml"]);
        assert_eq!(descriptor.primary_config_resource(), "unit-config.xml");
        assert!(descriptor.exported_packages.is_empty());
        assert!(descriptor.exported_resources.is_empty());
    }
}
