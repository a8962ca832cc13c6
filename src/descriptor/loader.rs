//! Descriptor loader
//!
//! Turns raw descriptor bytes into a normalized [`UnitDescriptor`]:
//!
//! 1. The document must be a JSON object.
//! 2. `descriptorVersion` (default `1.0`) must not be newer than what this
//!    loader understands.
//! 3. Required keys are checked and dependency declarations validated.
//! 4. `sharedLibraries` entries are folded into the `shared` flag of the
//!    dependency they name. A plugin dependency cannot end up shared.
//! 5. Defaults are applied: the default configuration resource when none is
//!    declared, empty export sets when none are declared.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use indexmap::IndexSet;
use serde_json::Value;

use crate::descriptor::serialization::RawDescriptor;
use crate::descriptor::{
    DEFAULT_CONFIG_RESOURCE, DependencySpec, RuntimeVersion, SharedLibrarySpec, UnitDescriptor,
};
use crate::error::Result;
use crate::error::deps::invalid_shape;
use crate::error::descriptor::{malformed, missing, read_failed, unsupported_version};

/// Highest descriptor format major version this loader understands
pub const SUPPORTED_DESCRIPTOR_MAJOR: u32 = 1;

#[derive(Debug, Clone, Default)]
pub struct DescriptorLoader {
    /// Version of the running runtime; units requiring a newer one are rejected
    runtime_version: Option<RuntimeVersion>,
}

impl DescriptorLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_runtime_version(mut self, runtime_version: Option<RuntimeVersion>) -> Self {
        self.runtime_version = runtime_version;
        self
    }

    /// Read and load the descriptor file at `path`
    pub fn load_file(&self, path: &Path) -> Result<UnitDescriptor> {
        if !path.is_file() {
            return Err(missing(path.display().to_string()));
        }

        let raw = std::fs::read(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        self.load(&raw)
    }

    /// Parse raw descriptor bytes
    pub fn load(&self, raw: &[u8]) -> Result<UnitDescriptor> {
        let value: Value = serde_json::from_slice(raw)
            .map_err(|e| malformed(format!("descriptor is not valid JSON: {e}")))?;

        if !value.is_object() {
            return Err(malformed("descriptor must be a JSON object"));
        }

        check_format_version(&value)?;

        let raw: RawDescriptor =
            serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;

        let min_runtime_version = match raw.min_runtime_version.as_deref() {
            Some(version) => RuntimeVersion::parse(version)?,
            None => return Err(malformed("missing required key 'minRuntimeVersion'")),
        };
        self.check_runtime_compatibility(&min_runtime_version)?;

        let name = match raw.name {
            Some(name) if name.trim().is_empty() => {
                return Err(malformed("'name' must not be empty"));
            }
            other => other.map(|name| name.trim().to_string()),
        };

        let config_resources =
            normalize_config_resources(raw.config_resources.unwrap_or_default())?;

        let mut dependencies = raw
            .dependencies
            .into_iter()
            .enumerate()
            .map(|(position, dep)| dep.into_spec(position))
            .collect::<Result<Vec<_>>>()?;
        reject_duplicate_dependencies(&dependencies)?;

        let shared_libraries = raw
            .shared_libraries
            .into_iter()
            .enumerate()
            .map(|(position, lib)| lib.into_spec(position))
            .collect::<Result<BTreeSet<_>>>()?;
        apply_shared_libraries(&mut dependencies, &shared_libraries)?;
        reject_shared_plugins(&dependencies)?;

        let exported_packages = normalize_names(raw.exported_packages, "exportedPackages", |p| {
            p.to_string()
        })?;
        let exported_resources = normalize_names(raw.exported_resources, "exportedResources", |r| {
            r.trim_start_matches('/').to_string()
        })?;

        tracing::debug!(
            dependencies = dependencies.len(),
            config_resources = config_resources.len(),
            "loaded unit descriptor"
        );

        Ok(UnitDescriptor {
            name,
            min_runtime_version,
            config_resources,
            dependencies,
            shared_libraries,
            exported_packages,
            exported_resources,
        })
    }

    fn check_runtime_compatibility(&self, required: &RuntimeVersion) -> Result<()> {
        match &self.runtime_version {
            Some(running) if required > running => Err(unsupported_version(
                format!("{required} (minRuntimeVersion)"),
                running.to_string(),
            )),
            _ => Ok(()),
        }
    }
}

fn check_format_version(value: &Value) -> Result<()> {
    let Some(raw) = value.get("descriptorVersion") else {
        return Ok(());
    };

    let Some(raw) = raw.as_str() else {
        return Err(malformed("'descriptorVersion' must be a string"));
    };

    let version = RuntimeVersion::parse(raw)?;
    if version.major() > SUPPORTED_DESCRIPTOR_MAJOR {
        return Err(unsupported_version(
            format!("{version} (descriptorVersion)"),
            format!("{SUPPORTED_DESCRIPTOR_MAJOR}.x"),
        ));
    }

    Ok(())
}

fn normalize_config_resources(declared: Vec<String>) -> Result<Vec<String>> {
    let mut resources = IndexSet::new();
    for resource in declared {
        let trimmed = resource.trim();
        if trimmed.is_empty() {
            return Err(malformed("'configResources' contains an empty entry"));
        }
        resources.insert(trimmed.to_string());
    }

    if resources.is_empty() {
        return Ok(vec![DEFAULT_CONFIG_RESOURCE.to_string()]);
    }

    Ok(resources.into_iter().collect())
}

fn reject_duplicate_dependencies(dependencies: &[DependencySpec]) -> Result<()> {
    let mut seen = HashSet::new();
    for dep in dependencies {
        if !seen.insert(&dep.coordinate) {
            return Err(malformed(format!(
                "dependency '{}' is declared more than once",
                dep.coordinate
            )));
        }
    }
    Ok(())
}

fn apply_shared_libraries(
    dependencies: &mut [DependencySpec],
    shared_libraries: &BTreeSet<SharedLibrarySpec>,
) -> Result<()> {
    for library in shared_libraries {
        let mut matched = false;
        for dep in dependencies.iter_mut() {
            if dep.coordinate.matches(&library.group_id, &library.artifact_id) {
                dep.shared = true;
                matched = true;
            }
        }

        if !matched {
            return Err(malformed(format!(
                "shared library '{library}' is not declared as a dependency"
            )));
        }
    }
    Ok(())
}

fn reject_shared_plugins(dependencies: &[DependencySpec]) -> Result<()> {
    match dependencies.iter().find(|dep| dep.is_plugin() && dep.is_shared()) {
        Some(dep) => Err(invalid_shape(
            &dep.coordinate,
            "a plugin dependency is isolated and cannot also be shared",
        )),
        None => Ok(()),
    }
}

fn normalize_names(
    names: Vec<String>,
    key: &str,
    normalize: impl Fn(&str) -> String,
) -> Result<BTreeSet<String>> {
    names
        .iter()
        .map(|name| {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                Err(malformed(format!("'{key}' contains an empty entry")))
            } else {
                Ok(normalize(trimmed))
            }
        })
        .collect()
}
