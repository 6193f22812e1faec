//! Dataset acquisition: download a competition's archives and expand them

pub mod extract;
pub mod fetch;

pub use extract::extract_archive;
pub use fetch::fetch_dataset;

use std::path::PathBuf;

/// Outcome of expanding a single archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    /// File name of the archive, e.g. `titanic.zip`
    pub archive: String,

    /// Archive name without `.zip`
    ///
    /// Entries are always expanded into the target directory itself; the
    /// stem only identifies where they came from.
    pub stem: String,

    /// Number of files written
    pub files_extracted: usize,
}

/// Outcome of a successful fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchReport {
    pub target: PathBuf,
    pub archives: Vec<ArchiveReport>,
}

impl FetchReport {
    /// Total files written across all archives
    #[must_use]
    pub fn files_extracted(&self) -> usize {
        self.archives.iter().map(|a| a.files_extracted).sum()
    }
}
