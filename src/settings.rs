//! Settings for building units
//!
//! Sources, lowest to highest precedence:
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. environment variables (`UNITPATH_REPOSITORY`, `UNITPATH_RUNTIME_VERSION`)
//! 4. command line flags, applied by the binary
//!
//! ```yaml
//! repository: /opt/units/repository
//! runtime_version: "4.1.0"
//! classes_dir: classes
//! config_dir: config
//! max_resolution_depth: 64
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::descriptor::RuntimeVersion;
use crate::error::config::{invalid, read_failed};
use crate::error::{Result, UnitError};

/// Overrides the repository root
pub const REPOSITORY_ENV: &str = "UNITPATH_REPOSITORY";

/// Overrides the running runtime version
pub const RUNTIME_VERSION_ENV: &str = "UNITPATH_RUNTIME_VERSION";

/// Default repository location, relative to the home directory
const REPOSITORY_DIR: &str = ".unitpath/repository";

pub const DEFAULT_CLASSES_DIR: &str = "classes";
pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const DEFAULT_MAX_RESOLUTION_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Repository root; `<home>/.unitpath/repository` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<PathBuf>,

    /// Version of the running runtime; when set, units requiring a newer one
    /// are rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_version: Option<RuntimeVersion>,

    /// Unit's own classes directory, relative to the unit root
    pub classes_dir: String,

    /// Configuration resources directory, relative to the unit root
    pub config_dir: String,

    /// Deepest transitive chain the repository resolver follows
    pub max_resolution_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository: None,
            runtime_version: None,
            classes_dir: DEFAULT_CLASSES_DIR.to_string(),
            config_dir: DEFAULT_CONFIG_DIR.to_string(),
            max_resolution_depth: DEFAULT_MAX_RESOLUTION_DEPTH,
        }
    }
}

impl Settings {
    /// Defaults, then `config_file` if given, then the environment
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut settings = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        settings.apply_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from YAML; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Self = serde_yaml::from_str(yaml).map_err(|e| invalid(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            UnitError::ConfigInvalid { message } => {
                invalid(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    /// Apply environment overrides
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(repository) = std::env::var(REPOSITORY_ENV) {
            if !repository.trim().is_empty() {
                self.repository = Some(PathBuf::from(repository));
            }
        }

        if let Ok(version) = std::env::var(RUNTIME_VERSION_ENV) {
            if !version.trim().is_empty() {
                let parsed = RuntimeVersion::parse(&version).map_err(|_| {
                    invalid(format!("{RUNTIME_VERSION_ENV}='{version}' is not a version"))
                })?;
                self.runtime_version = Some(parsed);
            }
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for (key, dir) in [("classes_dir", &self.classes_dir), ("config_dir", &self.config_dir)] {
            if dir.trim().is_empty() {
                return Err(invalid(format!("'{key}' cannot be empty")));
            }
            if Path::new(dir).is_absolute() {
                return Err(invalid(format!(
                    "'{key}' must be relative to the unit root, got '{dir}'"
                )));
            }
        }

        if self.max_resolution_depth == 0 {
            return Err(invalid("'max_resolution_depth' must be at least 1"));
        }

        Ok(())
    }

    /// The repository root, falling back to the default location
    pub fn repository_dir(&self) -> Result<PathBuf> {
        if let Some(repository) = &self.repository {
            return Ok(repository.clone());
        }

        let home = dirs::home_dir().ok_or_else(|| {
            invalid("Could not determine home directory for the default repository")
        })?;
        Ok(home.join(REPOSITORY_DIR))
    }
}
