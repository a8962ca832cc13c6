//! Binary content exploration
//!
//! Lists the packages and resources a binary offers, so that a shared
//! dependency can export them. Jar files are read as zip archives; exploded
//! directories are walked.
//!
//! - A package is a directory that directly contains a `.class` file, with
//!   `/` turned into `.`. Classes in the default package and under
//!   `META-INF` do not define a package.
//! - A resource is any other file, named by its `/`-separated relative path.

use std::fs::File;
use std::path::Path;

use walkdir::WalkDir;
use zip::ZipArchive;

use crate::domain::ExportSurface;
use crate::error::{Result, binary::unreadable};

const CLASS_SUFFIX: &str = ".class";

/// Explore a jar file or an exploded directory
pub fn explore(path: &Path) -> Result<ExportSurface> {
    if path.is_dir() {
        explore_directory(path)
    } else {
        explore_archive(path)
    }
}

fn explore_archive(path: &Path) -> Result<ExportSurface> {
    let location = path.display().to_string();
    let file = File::open(path).map_err(|e| unreadable(location.clone(), e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| unreadable(location.clone(), e))?;

    let mut surface = ExportSurface::default();
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| unreadable(location.clone(), e))?;
        if entry.is_dir() {
            continue;
        }
        record_entry(&mut surface, entry.name());
    }

    Ok(surface)
}

fn explore_directory(path: &Path) -> Result<ExportSurface> {
    let mut surface = ExportSurface::default();
    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.map_err(|e| unreadable(path.display().to_string(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(path) else {
            continue;
        };
        let name = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        record_entry(&mut surface, &name);
    }

    Ok(surface)
}

fn record_entry(surface: &mut ExportSurface, name: &str) {
    let name = name.trim_start_matches('/');
    if name.is_empty() {
        return;
    }

    if name.ends_with(CLASS_SUFFIX) {
        if let Some(package) = package_of(name) {
            surface.packages.insert(package);
        }
    } else {
        surface.resources.insert(name.to_string());
    }
}

fn package_of(class_entry: &str) -> Option<String> {
    let (directory, _) = class_entry.rsplit_once('/')?;
    if directory == "META-INF" || directory.starts_with("META-INF/") {
        return None;
    }
    Some(directory.replace('/', "."))
}
