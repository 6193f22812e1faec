//! In-memory `KaggleApi` for testing

#![expect(clippy::module_name_repetitions)]

use super::KaggleApi;
use crate::error::ClientError;
use crate::system::{MockSystem, System as _};
use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// A call received by [`MockKaggleApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Download { competition: String, dest: PathBuf },
    Submit { competition: String, file: PathBuf, message: String },
    Submissions { competition: String },
}

/// Serves pre-registered competition files into a [`MockSystem`]
///
/// # Example
/// ```
/// use kaggle_client::kaggle::{KaggleApi, MockKaggleApi};
/// use kaggle_client::system::{MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new().with_dir("/data").unwrap();
/// let api = MockKaggleApi::new(system.clone())
///     .with_file("titanic", "titanic.zip", b"not really a zip");
///
/// api.download("titanic", Path::new("/data")).unwrap();
/// assert!(system.exists(Path::new("/data/titanic.zip")));
/// ```
#[derive(Clone)]
pub struct MockKaggleApi {
    system: MockSystem,
    files: HashMap<String, Vec<(String, Vec<u8>)>>,
    submissions: HashMap<String, String>,
    failure: Option<String>,
    calls: Arc<RwLock<Vec<ApiCall>>>,
}

impl MockKaggleApi {
    /// Create an API that knows no competitions and writes into `system`
    #[must_use]
    pub fn new(system: MockSystem) -> Self {
        Self {
            system,
            files: HashMap::new(),
            submissions: HashMap::new(),
            failure: None,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a file served for `competition` (builder pattern)
    #[must_use]
    pub fn with_file(mut self, competition: &str, name: &str, contents: &[u8]) -> Self {
        self.files
            .entry(competition.to_owned())
            .or_default()
            .push((name.to_owned(), contents.to_vec()));
        self
    }

    /// Register the submission listing for `competition` (builder pattern)
    #[must_use]
    pub fn with_submissions(mut self, competition: &str, listing: &str) -> Self {
        self.submissions
            .insert(competition.to_owned(), listing.to_owned());
        self
    }

    /// Make every operation fail with `message` (builder pattern)
    #[must_use]
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_owned());
        self
    }

    /// Calls received so far, in order
    #[must_use]
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls
            .read()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: ApiCall) -> Result<()> {
        self.calls
            .write()
            .map_err(|e| anyhow!("Mock call log poisoned: {e}"))?
            .push(call);
        Ok(())
    }
}

impl KaggleApi for MockKaggleApi {
    fn download(&self, competition: &str, dest: &Path) -> Result<()> {
        self.record(ApiCall::Download {
            competition: competition.to_owned(),
            dest: dest.to_path_buf(),
        })?;

        if let Some(message) = &self.failure {
            return Err(ClientError::download(message.clone()).into());
        }

        let files = self.files.get(competition).ok_or_else(|| {
            ClientError::download(format!("Competition not found: {competition}"))
        })?;

        for (name, contents) in files {
            self.system.write(&dest.join(name), contents)?;
        }
        Ok(())
    }

    fn submit(&self, competition: &str, file: &Path, message: &str) -> Result<()> {
        self.record(ApiCall::Submit {
            competition: competition.to_owned(),
            file: file.to_path_buf(),
            message: message.to_owned(),
        })?;

        if let Some(failure) = &self.failure {
            return Err(ClientError::submission(failure.clone()).into());
        }
        Ok(())
    }

    fn submissions(&self, competition: &str) -> Result<String> {
        self.record(ApiCall::Submissions {
            competition: competition.to_owned(),
        })?;

        if let Some(failure) = &self.failure {
            return Err(ClientError::submission(failure.clone()).into());
        }
        Ok(self
            .submissions
            .get(competition)
            .cloned()
            .unwrap_or_default())
    }
}
