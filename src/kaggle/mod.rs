//! Kaggle API collaborator
//!
//! The client never talks to Kaggle directly. Everything remote goes through
//! [`KaggleApi`], whose production implementation drives the official
//! `kaggle` executable.

use anyhow::Result;
use std::path::Path;

pub mod cli;
pub mod mock;

pub use cli::KaggleCli;
pub use mock::MockKaggleApi;

/// Remote operations on a competition
pub trait KaggleApi: Send + Sync {
    /// Download every file of `competition` into the directory `dest`
    fn download(&self, competition: &str, dest: &Path) -> Result<()>;

    /// Submit `file` to `competition` with a description
    fn submit(&self, competition: &str, file: &Path, message: &str) -> Result<()>;

    /// Human-readable listing of the submissions made to `competition`
    fn submissions(&self, competition: &str) -> Result<String>;
}
