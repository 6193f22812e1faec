//! Mock system implementation for testing

#![expect(clippy::module_name_repetitions)]

use super::{ReadSeek, System};
use std::collections::{HashMap, HashSet};
use std::env::VarError;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::error;

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem and environment,
/// perfect for fast, isolated unit tests without side effects.
/// Clones share the same state.
///
/// # Example
/// ```
/// use kaggle_client::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_env("HOME", "/home/user").unwrap()
///     .with_file("/data/file.txt", b"Hello, world!").unwrap()
///     .with_dir("/data/subdir").unwrap();
///
/// assert_eq!(system.env_var("HOME").unwrap(), "/home/user");
/// assert!(system.exists(Path::new("/data/file.txt")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    env_vars: HashMap<String, String>,
    current_dir: PathBuf,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
}

fn lock_error<E: ToString>(e: E) -> io::Error {
    io::Error::other(e.to_string())
}

fn not_found(what: &str, path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{what} not found: {}", path.display()),
    )
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                env_vars: HashMap::new(),
                current_dir: PathBuf::from("/"),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
            })),
        }
    }

    /// Set an environment variable (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_env(self, key: &str, value: &str) -> io::Result<Self> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.env_vars.insert(key.to_owned(), value.to_owned());
        drop(state);
        Ok(self)
    }

    /// Set the current working directory (builder pattern)
    ///
    /// The directory is created if it is not already known.
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_current_dir<P: AsRef<Path>>(self, dir: P) -> io::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let mut state = self.state.write().map_err(lock_error)?;
        Self::ensure_parent_dirs(&mut state.dirs, &dir);
        state.current_dir = dir;
        drop(state);
        Ok(self)
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self.state.write().map_err(lock_error)?;

        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self.state.write().map_err(lock_error)?;
        Self::ensure_parent_dirs(&mut state.dirs, &path_buf);
        drop(state);
        Ok(self)
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor == Path::new("") {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    #[expect(clippy::map_err_ignore, reason = "This is for VarError")]
    fn env_var(&self, key: &str) -> Result<String, VarError> {
        let state = self.state.read().map_err(|_| VarError::NotPresent)?;
        state.env_vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[inline]
    fn current_dir(&self) -> io::Result<PathBuf> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.current_dir.clone())
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self.state.read().map_err(lock_error)?;
        let bytes = state
            .files
            .get(path)
            .ok_or_else(|| not_found("File", path))?
            .clone();
        drop(state);
        String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        if state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("Is a directory: {}", path.display()),
            ));
        }

        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(not_found("Parent directory", parent));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        if state.dirs.contains(path) || state.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("File exists: {}", path.display()),
            ));
        }

        if let Some(parent) = path.parent()
            && !state.dirs.contains(parent)
        {
            return Err(not_found("Parent directory", parent));
        }

        state.dirs.insert(path.to_path_buf());
        drop(state);
        Ok(())
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        Self::ensure_parent_dirs(&mut state.dirs, path);
        drop(state);
        Ok(())
    }

    #[inline]
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.files.remove(path).is_none() {
            return Err(not_found("File", path));
        }
        drop(state);
        Ok(())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.files.contains_key(path) || state.dirs.contains(path))
    }

    #[inline]
    fn is_file(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.files.contains_key(path))
    }

    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        self.state
            .read()
            .is_ok_and(|state| state.dirs.contains(path))
    }

    #[inline]
    fn read_dir(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let state = self.state.read().map_err(lock_error)?;

        if !state.dirs.contains(path) {
            return Err(not_found("Directory", path));
        }

        let children = state
            .files
            .keys()
            .chain(state.dirs.iter())
            .filter(|child| child.as_path() != path && child.parent() == Some(path))
            .cloned()
            .collect();

        drop(state);
        Ok(children)
    }

    #[inline]
    fn open(&self, path: &Path) -> io::Result<Box<dyn ReadSeek + '_>> {
        let state = self.state.read().map_err(lock_error)?;
        let bytes = state
            .files
            .get(path)
            .ok_or_else(|| not_found("File", path))?
            .clone();
        drop(state);
        Ok(Box::new(Cursor::new(bytes)))
    }

    #[inline]
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write + '_>> {
        // Truncate now so a missing parent fails here, like `File::create`
        self.write(path, &[])?;
        Ok(Box::new(MockWriter {
            path: path.to_path_buf(),
            buffer: Vec::new(),
            system: self.clone(),
        }))
    }
}

/// Writer that stores its bytes in the in-memory filesystem on flush
struct MockWriter {
    path: PathBuf,
    buffer: Vec<u8>,
    system: MockSystem,
}

#[expect(
    clippy::missing_trait_methods,
    reason = "Only implementing what I need"
)]
impl Write for MockWriter {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        self.system.write(&self.path, &self.buffer)
    }
}

impl Drop for MockWriter {
    #[inline]
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            error!("Failed to flush mock writer: {e}");
        }
    }
}
