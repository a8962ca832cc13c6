//! Artifact descriptor factory
//!
//! Builds an [`ArtifactDescriptor`] from a unit root on disk:
//!
//! 1. Read and fingerprint `<root>/META-INF/unit-artifact/unit-artifact.json`
//! 2. Load it into a [`UnitDescriptor`](crate::descriptor::UnitDescriptor)
//! 3. Resolve its dependencies
//! 4. Assemble the class loader model
//! 5. Resolve configuration resources against `<root>/config`
//!
//! Any failure is reported as a [`BuildError`] naming the unit root; the
//! lower-layer error is kept unchanged as its source. A failed build leaves
//! nothing behind.

use std::path::{Path, PathBuf};

use crate::assembler::assemble;
use crate::descriptor::{DESCRIPTOR_PATH, DescriptorLoader};
use crate::domain::{ArtifactDescriptor, directory_location};
use crate::error::descriptor::{missing, read_failed};
use crate::error::{BuildError, Result, binary::unreadable};
use crate::hash::hash_bytes;
use crate::resolver::DependencyResolver;
use crate::settings::{DEFAULT_CLASSES_DIR, DEFAULT_CONFIG_DIR, Settings};

#[derive(Debug, Clone)]
pub struct ArtifactDescriptorFactory<R> {
    loader: DescriptorLoader,
    resolver: R,
    classes_dir: PathBuf,
    config_dir: PathBuf,
}

impl<R: DependencyResolver> ArtifactDescriptorFactory<R> {
    /// Factory with the default unit layout and no runtime version gate
    pub fn new(resolver: R) -> Self {
        Self {
            loader: DescriptorLoader::new(),
            resolver,
            classes_dir: PathBuf::from(DEFAULT_CLASSES_DIR),
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
        }
    }

    /// Factory using the unit layout and runtime version of `settings`
    pub fn from_settings(settings: &Settings, resolver: R) -> Self {
        Self {
            loader: DescriptorLoader::new().with_runtime_version(settings.runtime_version.clone()),
            resolver,
            classes_dir: PathBuf::from(&settings.classes_dir),
            config_dir: PathBuf::from(&settings.config_dir),
        }
    }

    /// Build the artifact descriptor of the unit at `unit_root`
    pub fn build(&self, unit_root: &Path) -> std::result::Result<ArtifactDescriptor, BuildError> {
        let _span = tracing::info_span!("build_unit", root = %unit_root.display()).entered();

        self.build_unit(unit_root).map_err(|source| {
            tracing::debug!(error = %source, "unit build failed");
            BuildError::new(unit_root, source)
        })
    }

    /// Build several units, one result per root in the same order
    ///
    /// Units are independent: one failing does not stop the others.
    pub fn build_all<I, P>(
        &self,
        unit_roots: I,
    ) -> Vec<std::result::Result<ArtifactDescriptor, BuildError>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        unit_roots
            .into_iter()
            .map(|root| self.build(root.as_ref()))
            .collect()
    }

    fn build_unit(&self, unit_root: &Path) -> Result<ArtifactDescriptor> {
        let descriptor_path = unit_root.join(DESCRIPTOR_PATH);
        if !descriptor_path.is_file() {
            return Err(missing(descriptor_path.display().to_string()));
        }

        let root = dunce::canonicalize(unit_root)
            .map_err(|e| read_failed(unit_root.display().to_string(), e.to_string()))?;
        let descriptor_path = root.join(DESCRIPTOR_PATH);

        let raw = std::fs::read(&descriptor_path)
            .map_err(|e| read_failed(descriptor_path.display().to_string(), e.to_string()))?;
        let descriptor_hash = hash_bytes(&raw);
        let descriptor = self.loader.load(&raw)?;

        let classes_dir = root.join(&self.classes_dir);
        let classes_location = directory_location(&classes_dir).ok_or_else(|| {
            unreadable(
                classes_dir.display().to_string(),
                "not a valid classes location",
            )
        })?;

        let resolved = self.resolver.resolve(&descriptor.dependencies)?;
        let class_loader_model = assemble(&descriptor, classes_location, &resolved)?;

        let config_root = root.join(&self.config_dir);
        let absolute_resource_paths = descriptor
            .config_resources
            .iter()
            .map(|resource| config_root.join(resource.trim_start_matches('/')))
            .collect();

        let name = descriptor
            .name
            .clone()
            .unwrap_or_else(|| unit_name(&root));

        tracing::info!(
            unit = %name,
            classpath = class_loader_model.urls().len(),
            dependencies = class_loader_model.dependencies().len(),
            exported_packages = class_loader_model.exported_packages().len(),
            "built unit"
        );

        Ok(ArtifactDescriptor::new(
            name,
            root,
            descriptor.min_runtime_version,
            descriptor.config_resources,
            absolute_resource_paths,
            class_loader_model,
            descriptor_hash,
        ))
    }
}

/// Last path segment of the unit root
fn unit_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
