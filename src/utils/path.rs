//! Path manipulation utilities

use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// Resolve a user-supplied path against the current working directory
///
/// Absolute paths are returned unchanged; relative ones are joined onto the
/// working directory. `..` is left for the OS to resolve, since folding it
/// lexically is wrong when the preceding component is a symlink. The working
/// directory is read, never changed.
pub fn resolve_path(system: &dyn System, path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let current = system
        .current_dir()
        .context("Failed to determine the current working directory")?;
    Ok(current.join(path))
}

/// Relative path an archive entry may safely be written to
///
/// Both `/` and `\` separate components. Empty, `.` and `..` components are
/// dropped, which turns absolute names relative and keeps every entry inside
/// the extraction directory. Returns `None` when nothing is left.
#[must_use]
pub fn sanitize_entry_name(name: &str) -> Option<PathBuf> {
    let relative: PathBuf = name
        .split(['/', '\\'])
        .filter(|part| !matches!(*part, "" | "." | ".."))
        .collect();

    (!relative.as_os_str().is_empty()).then_some(relative)
}

/// File name of an archive with its `.zip` extension stripped
#[must_use]
pub fn archive_stem(archive: &Path) -> String {
    archive
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
