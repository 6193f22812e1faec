//! Custom error types with exit codes

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for kaggle-client operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientError {
    /// Configuration Error - missing or invalid settings
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Usage Error - unknown command or invalid arguments
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Target Error - the dataset target directory already exists
    #[error("Target directory already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    /// Download Error - the download collaborator failed
    #[error("Download error: {message}")]
    Download { message: String },

    /// Submission Error - submitting or listing submissions failed
    #[error("Submission error: {message}")]
    Submission { message: String },

    /// Archive Error - a zip archive could not be read or expanded
    #[error("Archive error: {message}")]
    Archive { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl ClientError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Usage { .. } => 2,
            Self::TargetExists { .. } => 3,
            Self::Download { .. } => 4,
            Self::Submission { .. } => 5,
            Self::Archive { .. } => 6,
            Self::Filesystem { .. } => 7,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a usage error
    #[inline]
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create a target-exists error
    #[inline]
    pub fn target_exists<P: Into<PathBuf>>(path: P) -> Self {
        Self::TargetExists { path: path.into() }
    }

    /// Create a download error
    #[inline]
    pub fn download<S: Into<String>>(message: S) -> Self {
        Self::Download {
            message: message.into(),
        }
    }

    /// Create a submission error
    #[inline]
    pub fn submission<S: Into<String>>(message: S) -> Self {
        Self::Submission {
            message: message.into(),
        }
    }

    /// Create an archive error
    #[inline]
    pub fn archive<S: Into<String>>(message: S) -> Self {
        Self::Archive {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }
}
