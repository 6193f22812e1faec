//! Zip archive expansion through the `System` abstraction

use crate::dataset::ArchiveReport;
use crate::error::ClientError;
use crate::system::System;
use crate::utils::fs::{create_parent_directories, format_file_size};
use crate::utils::path::{archive_stem, sanitize_entry_name};
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Read, Seek as _, SeekFrom, Write};
use std::path::Path;
use tracing::debug;
use zip::ZipArchive;

/// Expand every entry of `archive_path` into `dest`
///
/// Entries are streamed to disk one at a time. Existing files with the same
/// name are overwritten. Absolute entry names are made relative and `..`
/// components are dropped, so nothing lands outside `dest`. The archive
/// itself is left in place.
pub fn extract_archive(
    system: &dyn System,
    archive_path: &Path,
    dest: &Path,
) -> Result<ArchiveReport> {
    let archive_name = archive_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let read_error = |e: io::Error| {
        ClientError::archive(format!(
            "Failed to read archive {}: {e}",
            archive_path.display()
        ))
    };

    let mut reader = system.open(archive_path).map_err(read_error)?;
    let size = reader.seek(SeekFrom::End(0)).map_err(read_error)?;
    reader.rewind().map_err(read_error)?;

    let mut archive = ZipArchive::new(reader).map_err(|e| {
        ClientError::archive(format!(
            "Failed to open zip archive {}: {e}",
            archive_path.display()
        ))
    })?;

    let stem = archive_stem(archive_path);
    debug!(
        "Expanding {} ({}, {} entries, stem '{}') into {}",
        archive_name,
        format_file_size(size),
        archive.len(),
        stem,
        dest.display()
    );

    let pb = ProgressBar::new(u64::try_from(archive.len()).unwrap_or(u64::MAX));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("━━─"),
    );

    let mut files_extracted = 0;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| {
            ClientError::archive(format!(
                "Failed to read entry #{index} of {archive_name}: {e}"
            ))
        })?;

        let Some(relative) = sanitize_entry_name(entry.name()) else {
            debug!("Skipping entry '{}' with no usable name", entry.name());
            pb.inc(1);
            continue;
        };
        let out_path = dest.join(&relative);
        pb.set_message(relative.to_string_lossy().into_owned());

        if entry.is_dir() {
            system.create_dir_all(&out_path).map_err(|e| {
                ClientError::filesystem(format!(
                    "Failed to create directory {}: {e}",
                    out_path.display()
                ))
            })?;
            pb.inc(1);
            continue;
        }

        create_parent_directories(system, &out_path)?;
        let mut out = system.create(&out_path).map_err(|e| {
            ClientError::filesystem(format!("Failed to create {}: {e}", out_path.display()))
        })?;
        copy_entry(
            &mut entry,
            &mut out,
            &relative.to_string_lossy(),
            &archive_name,
            &out_path,
        )?;

        files_extracted += 1;
        pb.inc(1);
    }

    pb.finish_and_clear();

    Ok(ArchiveReport {
        archive: archive_name,
        stem,
        files_extracted,
    })
}

/// Stream one entry into `out`
///
/// Read failures are archive errors, write failures are filesystem errors.
fn copy_entry(
    entry: &mut dyn Read,
    out: &mut dyn Write,
    entry_name: &str,
    archive_name: &str,
    out_path: &Path,
) -> Result<()> {
    let write_error = |e: io::Error| {
        ClientError::filesystem(format!("Failed to write {}: {e}", out_path.display()))
    };

    let mut buffer = [0_u8; 64 * 1024];
    loop {
        let read = match entry.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(ClientError::archive(format!(
                    "Failed to decompress '{entry_name}' from {archive_name}: {e}"
                ))
                .into());
            }
        };
        out.write_all(&buffer[..read]).map_err(write_error)?;
    }

    out.flush().map_err(write_error)?;
    Ok(())
}
