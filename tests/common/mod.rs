//! Common test utilities for unitpath integration tests

#![allow(dead_code)]

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Descriptor location inside a unit root
pub const DESCRIPTOR: &str = "META-INF/unit-artifact/unit-artifact.json";

/// A scratch area holding unit roots and a local repository
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Repository root used by [`Self::install_jar`]
    pub fn repository(&self) -> PathBuf {
        self.path.join("repository")
    }

    /// Create a unit root with the given descriptor and an empty classes
    /// directory
    pub fn create_unit(&self, name: &str, descriptor: &str) -> PathBuf {
        let root = self.path.join("units").join(name);
        self.write_file(&format!("units/{name}/{DESCRIPTOR}"), descriptor);
        std::fs::create_dir_all(root.join("classes")).expect("Failed to create classes directory");
        root
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Install a jar for `group:artifact:version[:classifier]` in the
    /// repository
    pub fn install_jar(&self, coordinate: &str, entries: &[&str]) -> PathBuf {
        let jar = with_suffix(&self.artifact_base(coordinate), ".jar");
        write_jar(&jar, entries);
        jar
    }

    /// Install a file that is not a readable archive as the jar of a
    /// coordinate
    pub fn install_corrupt_jar(&self, coordinate: &str) -> PathBuf {
        let jar = with_suffix(&self.artifact_base(coordinate), ".jar");
        std::fs::write(&jar, b"not a zip").expect("Failed to write jar");
        jar
    }

    /// Install an exploded directory for a coordinate in the repository
    pub fn install_exploded(&self, coordinate: &str, files: &[&str]) -> PathBuf {
        let dir = self.artifact_base(coordinate);
        std::fs::create_dir_all(&dir).expect("Failed to create exploded binary");
        for file in files {
            let path = dir.join(file);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create parent directory");
            }
            std::fs::write(path, b"").expect("Failed to write file");
        }
        dir
    }

    /// Write the transitive dependency metadata of a coordinate
    pub fn install_deps(&self, coordinate: &str, yaml: &str) {
        let metadata = with_suffix(&self.artifact_base(coordinate), ".deps.yaml");
        std::fs::write(metadata, yaml).expect("Failed to write metadata");
    }

    /// Repository path of a coordinate without extension
    fn artifact_base(&self, coordinate: &str) -> PathBuf {
        let parts: Vec<&str> = coordinate.split(':').collect();
        let (group, artifact, version) = (parts[0], parts[1], parts[2]);
        let file = match parts.get(3) {
            Some(classifier) => format!("{artifact}-{version}-{classifier}"),
            None => format!("{artifact}-{version}"),
        };

        let mut dir = self.repository();
        dir.extend(group.split('.'));
        dir.push(artifact);
        dir.push(version);
        std::fs::create_dir_all(&dir).expect("Failed to create version directory");
        dir.join(file)
    }

    /// The unitpath binary, pointed at this workspace's repository with no
    /// inherited configuration
    pub fn unitpath_cmd(&self) -> Command {
        let mut cmd = unitpath_cmd();
        cmd.env("UNITPATH_REPOSITORY", self.repository())
            .env_remove("UNITPATH_RUNTIME_VERSION")
            .env_remove("RUST_LOG")
            .current_dir(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// `base` with `suffix` appended to its file name
fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut path = base.as_os_str().to_os_string();
    path.push(suffix);
    PathBuf::from(path)
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn unitpath_cmd() -> Command {
    Command::cargo_bin("unitpath").expect("unitpath binary")
}

/// Write a jar holding one small entry per name
pub fn write_jar(path: &Path, entries: &[&str]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create jar directory");
    }
    let file = std::fs::File::create(path).expect("Failed to create jar");
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for entry in entries {
        zip.start_file(*entry, options).expect("Failed to start jar entry");
        zip.write_all(b"\xCA\xFE\xBA\xBE").expect("Failed to write jar entry");
    }
    zip.finish().expect("Failed to finish jar");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_install_jar_layout() {
        let workspace = TestWorkspace::new();
        let jar = workspace.install_jar("org.foo:lib:1.0:unit-plugin", &["a/B.class"]);
        assert_eq!(
            jar,
            workspace
                .repository()
                .join("org/foo/lib/1.0/lib-1.0-unit-plugin.jar")
        );
        assert!(jar.is_file());
    }
}
