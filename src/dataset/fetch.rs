//! Download a competition into a fresh directory and expand its archives

use crate::dataset::{FetchReport, extract_archive};
use crate::error::ClientError;
use crate::kaggle::KaggleApi;
use crate::system::System;
use crate::utils::fs::list_archives;
use anyhow::Result;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Fetch every file of `competition` into `target` and unpack the archives
///
/// `target` must not exist yet; it is created (without parents) before the
/// download starts. Each `*.zip` the download leaves directly in `target` is
/// expanded into `target` and then deleted. Archives are processed in name
/// order and the first failure stops the run, leaving earlier archives
/// expanded. Download errors are returned as the collaborator produced them.
///
/// The process working directory is never touched.
pub fn fetch_dataset(
    system: &dyn System,
    api: &dyn KaggleApi,
    competition: &str,
    target: &Path,
) -> Result<FetchReport> {
    if let Ok(cwd) = system.current_dir() {
        debug!("Fetching from working directory {}", cwd.display());
    }

    system.create_dir(target).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            ClientError::target_exists(target)
        } else {
            ClientError::filesystem(format!(
                "Failed to create target directory {}: {e}",
                target.display()
            ))
        }
    })?;

    info!("Downloading '{}' into {}", competition, target.display());
    api.download(competition, target)?;

    let archives = list_archives(system, target)?;
    if archives.is_empty() {
        info!("  No zip archives to expand");
    }

    let mut reports = Vec::with_capacity(archives.len());

    for archive in &archives {
        let report = extract_archive(system, archive, target)?;

        system.remove_file(archive).map_err(|e| {
            ClientError::filesystem(format!(
                "Failed to delete archive {}: {e}",
                archive.display()
            ))
        })?;

        info!(
            "  \u{2713} {} \u{2192} {} files",
            report.archive, report.files_extracted
        );
        reports.push(report);
    }

    let report = FetchReport {
        target: target.to_path_buf(),
        archives: reports,
    };

    info!(
        "\u{2713} Fetched '{}': {} archive(s), {} files in {}",
        competition,
        report.archives.len(),
        report.files_extracted(),
        target.display()
    );

    Ok(report)
}
