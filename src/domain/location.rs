//! Binary locations
//!
//! Classpath entries are `file:` URLs. Directories get a trailing slash so a
//! classes directory and a jar of the same name never compare equal.

use std::path::{Path, PathBuf};

use url::Url;

/// `file:` URL for a binary on disk; `None` when `path` cannot be made
/// absolute
pub fn location_for(path: &Path) -> Option<Url> {
    let absolute = std::path::absolute(path).ok()?;
    if absolute.is_dir() {
        Url::from_directory_path(&absolute).ok()
    } else {
        Url::from_file_path(&absolute).ok()
    }
}

/// `file:` URL for a directory, whether or not it exists yet
pub fn directory_location(path: &Path) -> Option<Url> {
    let absolute = std::path::absolute(path).ok()?;
    Url::from_directory_path(absolute).ok()
}

/// Filesystem path of a `file:` location, without the trailing separator of
/// directory locations
pub fn location_path(location: &Url) -> Option<PathBuf> {
    let path = location.to_file_path().ok()?;
    Some(path.components().collect())
}
