//! System abstraction for environment and filesystem operations
//!
//! This module provides a unified trait for all external system interactions,
//! allowing for easy testing with mock implementations. Every filesystem call
//! takes an explicit path; nothing in the crate changes the process working
//! directory.

use std::env::VarError;
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for system operations (environment + filesystem)
///
/// This trait abstracts all interactions with the operating system,
/// including environment variables and filesystem operations.
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::env` and `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    // ==================== Environment Operations ====================

    /// Get an environment variable
    fn env_var(&self, key: &str) -> Result<String, VarError>;

    /// Get the current working directory
    fn current_dir(&self) -> io::Result<PathBuf>;

    // ==================== Filesystem Operations ====================

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write bytes to a file, creating or truncating it
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create a single directory
    ///
    /// Fails with `AlreadyExists` if the path exists and with `NotFound` if
    /// the parent directory is missing.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Remove a file
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a file
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read directory entries, returning paths of all direct children
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Open a file for reading (returns a seekable stream)
    fn open(&self, path: &Path) -> io::Result<Box<dyn ReadSeek + '_>>;

    /// Create a file for writing (returns a writable stream)
    ///
    /// Truncates an existing file. Fails with `NotFound` if the parent
    /// directory is missing.
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write + '_>>;
}

/// Readable stream that can also seek, as zip archives need
pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}
