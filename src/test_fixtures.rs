//! Test fixtures for unit roots, jars and resolved dependencies
//!
//! ```ignore
//! use crate::test_fixtures::{create_unit, write_jar};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let root = create_unit(&temp, "echo", r#"{"minRuntimeVersion": "4.0"}"#);
//!     write_jar(&temp.path().join("lib.jar"), &["org/foo/Foo.class"]);
//! }
//! ```

#![allow(clippy::expect_used)]

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use url::Url;

use crate::descriptor::{Coordinate, DESCRIPTOR_PATH, DependencySpec, PLUGIN_CLASSIFIER, Scope};
use crate::domain::ResolvedDependency;

/// Group used by every fixture coordinate
pub const TEST_GROUP: &str = "org.test";

/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a unit root named `name` with the given descriptor and an empty
/// classes directory
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_unit(temp: &TempDir, name: &str, descriptor: &str) -> PathBuf {
    let root = temp.path().join(name);
    let descriptor_path = root.join(DESCRIPTOR_PATH);
    if let Some(parent) = descriptor_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create descriptor directory");
    }
    std::fs::create_dir_all(root.join("classes")).expect("Failed to create classes directory");
    std::fs::write(&descriptor_path, descriptor).expect("Failed to write descriptor");
    root
}

/// Write a jar holding one small entry per name
///
/// # Panics
///
/// Panics if the jar cannot be written.
pub fn write_jar(path: &Path, entries: &[&str]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create jar directory");
    }
    let file = std::fs::File::create(path).expect("Failed to create jar");
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for entry in entries {
        zip.start_file(*entry, options).expect("Failed to start jar entry");
        zip.write_all(&[0xCA, 0xFE, 0xBA, 0xBE])
            .expect("Failed to write jar entry");
    }
    zip.finish().expect("Failed to finish jar");
}

/// `org.test:<artifact>:1.0`
#[must_use]
pub fn coordinate(artifact: &str) -> Coordinate {
    Coordinate::new(TEST_GROUP, artifact, "1.0")
}

/// Compile-scoped resolved library at `file:///repo/<artifact>-1.0.jar`
///
/// # Panics
///
/// Panics if `artifact` does not form a valid URL path.
#[must_use]
pub fn library(artifact: &str) -> ResolvedDependency {
    resolved(coordinate(artifact))
}

/// Compile-scoped resolved plugin at `file:///repo/<artifact>-1.0.jar`
///
/// # Panics
///
/// Panics if `artifact` does not form a valid URL path.
#[must_use]
pub fn plugin(artifact: &str) -> ResolvedDependency {
    resolved(coordinate(artifact).with_classifier(PLUGIN_CLASSIFIER))
}

/// Location fixtures resolve `artifact` to
///
/// # Panics
///
/// Panics if `artifact` does not form a valid URL path.
#[must_use]
pub fn location(artifact: &str) -> Url {
    Url::parse(&format!("file:///repo/{artifact}-1.0.jar")).expect("Failed to build location")
}

fn resolved(coordinate: Coordinate) -> ResolvedDependency {
    let location = location(&coordinate.artifact_id);
    ResolvedDependency::new(DependencySpec::new(coordinate, Scope::Compile), location)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_unit() {
        let temp = create_temp_dir();
        let root = create_unit(&temp, "echo", "{}");
        assert!(root.join(DESCRIPTOR_PATH).is_file());
        assert!(root.join("classes").is_dir());
    }

    #[test]
    fn test_write_jar_readable() {
        let temp = create_temp_dir();
        let jar = temp.path().join("nested/lib.jar");
        write_jar(&jar, &["a/B.class"]);

        let archive = zip::ZipArchive::new(std::fs::File::open(&jar).expect("open")).expect("zip");
        assert_eq!(archive.len(), 1);
    }

    #[test]
    fn test_plugin_fixture() {
        assert!(plugin("http").is_plugin());
        assert!(!library("lib").is_plugin());
        assert_eq!(library("lib").location, location("lib"));
    }
}
