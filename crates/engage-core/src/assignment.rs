//! Assignment directory aggregation
//!
//! Each assignment is a directory holding the MediaSpace export `.csv` files
//! downloaded for that activity. Aggregation is non-recursive and all-or-
//! nothing: the first malformed export aborts the whole assignment.

use crate::error::{Error, Result};
use crate::export::{parse_export, VideoStats};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Parse every `.csv` export directly inside `dir`.
///
/// Files are sorted by name before parsing so the result order does not
/// depend on filesystem enumeration order. Non-`.csv` entries and
/// subdirectories are ignored.
pub fn parse_assignment<P: AsRef<Path>>(dir: P) -> Result<Vec<VideoStats>> {
    let export_paths = list_exports(dir)?;

    let mut videos = Vec::with_capacity(export_paths.len());
    for path in &export_paths {
        videos.push(parse_export(path)?);
    }

    Ok(videos)
}

/// List the `.csv` export files directly inside `dir`, sorted by name
pub fn list_exports<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    ensure_directory(dir)?;

    let mut export_paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            export_paths.push(path.to_path_buf());
        }
    }
    export_paths.sort();
    Ok(export_paths)
}

/// List the direct subdirectories of `base`, sorted by name.
///
/// When no assignment is named on the command line, every subdirectory of
/// the base directory is treated as an assignment.
pub fn discover_assignments<P: AsRef<Path>>(base: P) -> Result<Vec<String>> {
    let base = base.as_ref();
    ensure_directory(base)?;

    let mut names: Vec<String> = Vec::new();
    for entry in WalkDir::new(base).min_depth(1).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn ensure_directory(path: &Path) -> Result<()> {
    let meta = fs::metadata(path).map_err(|e| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source: e,
    })?;
    if !meta.is_dir() {
        return Err(Error::SourceUnavailable {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        });
    }
    Ok(())
}
