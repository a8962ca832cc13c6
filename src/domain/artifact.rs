//! Artifact descriptor: the final, immutable result of building a unit

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::descriptor::{DESCRIPTOR_PATH, RuntimeVersion};
use crate::domain::classloader::ClassLoaderModel;
use crate::hash::hash_file;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDescriptor {
    name: String,
    root: PathBuf,
    min_runtime_version: RuntimeVersion,
    config_resources: Vec<String>,
    absolute_resource_paths: Vec<PathBuf>,
    class_loader_model: ClassLoaderModel,
    descriptor_hash: String,
}

impl ArtifactDescriptor {
    pub(crate) fn new(
        name: String,
        root: PathBuf,
        min_runtime_version: RuntimeVersion,
        config_resources: Vec<String>,
        absolute_resource_paths: Vec<PathBuf>,
        class_loader_model: ClassLoaderModel,
        descriptor_hash: String,
    ) -> Self {
        Self {
            name,
            root,
            min_runtime_version,
            config_resources,
            absolute_resource_paths,
            class_loader_model,
            descriptor_hash,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn min_runtime_version(&self) -> &RuntimeVersion {
        &self.min_runtime_version
    }

    /// Configuration resource names as declared, primary first
    pub fn config_resources(&self) -> &[String] {
        &self.config_resources
    }

    /// Configuration resources resolved against the unit's config directory,
    /// in the same order as [`Self::config_resources`]
    pub fn absolute_resource_paths(&self) -> &[PathBuf] {
        &self.absolute_resource_paths
    }

    pub fn class_loader_model(&self) -> &ClassLoaderModel {
        &self.class_loader_model
    }

    pub fn descriptor_hash(&self) -> &str {
        &self.descriptor_hash
    }

    /// Whether the descriptor on disk no longer matches the one this was
    /// built from
    ///
    /// A stale descriptor must be replaced by a fresh build; it is never
    /// patched in place. A descriptor that disappeared or cannot be read
    /// counts as stale.
    pub fn is_stale(&self) -> bool {
        !hash_file(&self.root.join(DESCRIPTOR_PATH))
            .is_ok_and(|current| current == self.descriptor_hash)
    }
}
