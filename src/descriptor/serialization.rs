//! On-disk shape of unit descriptors and dependency declarations
//!
//! Fields that the loader requires are still `Option`s here so that a
//! missing key is reported with the key's name instead of a generic serde
//! message.

use serde::Deserialize;

use crate::descriptor::dependency::{Coordinate, DependencySpec, Scope, SharedLibrarySpec};
use crate::error::{Result, descriptor::malformed};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDescriptor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub min_runtime_version: Option<String>,
    #[serde(default)]
    pub config_resources: Option<Vec<String>>,
    #[serde(default)]
    pub dependencies: Vec<RawDependency>,
    #[serde(default)]
    pub shared_libraries: Vec<RawSharedLibrary>,
    #[serde(default)]
    pub exported_packages: Vec<String>,
    #[serde(default)]
    pub exported_resources: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDependency {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub shared: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSharedLibrary {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
}

/// Dependency metadata stored next to a binary in a repository
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawDependencyMetadata {
    #[serde(default)]
    pub dependencies: Vec<RawDependency>,
}

impl RawDependency {
    /// Convert into a validated dependency spec
    ///
    /// `position` is the zero-based index of the entry in its list and is
    /// only used to point at the offending entry in error messages.
    pub fn into_spec(self, position: usize) -> Result<DependencySpec> {
        let group_id = required(self.group_id, "groupId", position)?;
        let artifact_id = required(self.artifact_id, "artifactId", position)?;
        let version = required(self.version, "version", position)?;

        let classifier = match self.classifier {
            Some(value) if value.trim().is_empty() => None,
            other => other,
        };

        let scope = match self.scope {
            Some(raw) => raw.parse::<Scope>()?,
            None => Scope::default(),
        };

        let coordinate = Coordinate {
            group_id,
            artifact_id,
            version,
            classifier,
        };

        Ok(DependencySpec {
            coordinate,
            scope,
            shared: self.shared,
        })
    }
}

impl RawSharedLibrary {
    pub fn into_spec(self, position: usize) -> Result<SharedLibrarySpec> {
        Ok(SharedLibrarySpec {
            group_id: required(self.group_id, "groupId", position)?,
            artifact_id: required(self.artifact_id, "artifactId", position)?,
        })
    }
}

fn required(value: Option<String>, key: &str, position: usize) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Some(_) => Err(malformed(format!(
            "entry #{} has an empty '{key}'",
            position + 1
        ))),
        None => Err(malformed(format!(
            "entry #{} is missing '{key}'",
            position + 1
        ))),
    }
}
