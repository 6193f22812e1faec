//! File system utilities

use crate::error::ClientError;
use crate::system::System;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

/// Extension matched by the archive scan
const ARCHIVE_EXTENSION: &str = ".zip";

/// Create parent directories for a file path if they don't exist
pub fn create_parent_directories(system: &dyn System, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent()
        && !system.is_dir(parent)
    {
        system.create_dir_all(parent).map_err(|e| {
            ClientError::filesystem(format!(
                "Failed to create parent directories for {}: {e}",
                file_path.display()
            ))
        })?;
    }
    Ok(())
}

/// Whether a bare file name matches the `*.zip` glob
///
/// Hidden files never match, the same way a shell glob skips them.
#[must_use]
pub fn is_archive_name(name: &str) -> bool {
    !name.starts_with('.') && name.len() > ARCHIVE_EXTENSION.len() && name.ends_with(ARCHIVE_EXTENSION)
}

/// List the zip archives directly inside `dir`, sorted by name
pub fn list_archives(system: &dyn System, dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = system
        .read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut archives: Vec<PathBuf> = entries
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_archive_name)
        })
        .filter(|path| system.is_file(path))
        .collect();

    archives.sort();
    Ok(archives)
}

/// Get human-readable file size
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "Display only")]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_owned();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
