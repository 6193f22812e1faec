//! `KaggleApi` backed by the official `kaggle` executable

use super::KaggleApi;
use crate::config::Settings;
use crate::error::ClientError;
use crate::system::System;
use anyhow::Result;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Program invoked when nothing else is configured
pub const DEFAULT_PROGRAM: &str = "kaggle";

/// Environment variable that overrides the configured program
pub const PROGRAM_ENV: &str = "KAGGLE_CLI";

/// Runs `kaggle competitions ...` as a child process
///
/// Output locations are always passed explicitly; the child inherits the
/// parent's working directory untouched.
#[derive(Debug, Clone)]
pub struct KaggleCli {
    program: String,
    username: Option<String>,
    key: Option<String>,
}

impl KaggleCli {
    /// Create a runner for `program` without credentials
    #[must_use]
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            username: None,
            key: None,
        }
    }

    /// Build a runner from settings, honouring the `KAGGLE_CLI` override
    #[must_use]
    pub fn from_settings(system: &dyn System, settings: &Settings) -> Self {
        let program = system
            .env_var(PROGRAM_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .or_else(|| settings.cli.clone())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_owned());

        Self {
            program,
            username: settings.username.clone(),
            key: settings.key.clone(),
        }
    }

    /// The executable this runner invokes
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the program and return its stdout, or a formatted failure message
    ///
    /// Arguments are passed as `OsStr` so paths reach the child byte for byte.
    fn invoke(&self, args: &[&OsStr]) -> core::result::Result<String, String> {
        let shown = args
            .iter()
            .map(|arg| arg.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ");
        debug!("Running {} {}", self.program, shown);

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(username) = &self.username {
            command.env("KAGGLE_USERNAME", username);
        }
        if let Some(key) = &self.key {
            command.env("KAGGLE_KEY", key);
        }

        let output = command.output().map_err(|e| {
            format!(
                "Failed to launch '{}': {e}. Is the Kaggle CLI installed and on PATH?",
                self.program
            )
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);

            let mut message = format!(
                "'{} {}' failed with exit code {}",
                self.program,
                shown,
                output.status.code().unwrap_or(-1)
            );

            if !stderr.trim().is_empty() {
                message.push_str(&format!("\nError output:\n{}", stderr.trim()));
            }

            if !stdout.trim().is_empty() {
                message.push_str(&format!("\nStandard output:\n{}", stdout.trim()));
            }

            return Err(message);
        }

        Ok(stdout)
    }
}

impl KaggleApi for KaggleCli {
    fn download(&self, competition: &str, dest: &Path) -> Result<()> {
        let stdout = self
            .invoke(&[
                OsStr::new("competitions"),
                OsStr::new("download"),
                OsStr::new("-c"),
                OsStr::new(competition),
                OsStr::new("-p"),
                dest.as_os_str(),
            ])
            .map_err(ClientError::download)?;

        if !stdout.trim().is_empty() {
            debug!("{}", stdout.trim());
        }
        Ok(())
    }

    fn submit(&self, competition: &str, file: &Path, message: &str) -> Result<()> {
        let stdout = self
            .invoke(&[
                OsStr::new("competitions"),
                OsStr::new("submit"),
                OsStr::new("-c"),
                OsStr::new(competition),
                OsStr::new("-f"),
                file.as_os_str(),
                OsStr::new("-m"),
                OsStr::new(message),
            ])
            .map_err(ClientError::submission)?;

        if !stdout.trim().is_empty() {
            debug!("{}", stdout.trim());
        }
        Ok(())
    }

    fn submissions(&self, competition: &str) -> Result<String> {
        Ok(self
            .invoke(&[
                OsStr::new("competitions"),
                OsStr::new("submissions"),
                OsStr::new("-c"),
                OsStr::new(competition),
            ])
            .map_err(ClientError::submission)?)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn program_defaults_to_kaggle() {
        let system = MockSystem::new();
        let cli = KaggleCli::from_settings(&system, &Settings::default());
        assert_eq!(cli.program(), DEFAULT_PROGRAM);
    }

    #[test]
    fn env_override_beats_settings() {
        let system = MockSystem::new()
            .with_env(PROGRAM_ENV, "/opt/bin/kaggle")
            .unwrap();
        let settings = Settings {
            cli: Some("/usr/local/bin/kaggle".to_owned()),
            ..Settings::default()
        };

        let cli = KaggleCli::from_settings(&system, &settings);
        assert_eq!(cli.program(), "/opt/bin/kaggle");
    }

    #[test]
    fn missing_program_is_a_download_error() {
        let cli = KaggleCli::new("definitely-not-a-real-kaggle-binary");

        let err = cli
            .download("titanic", Path::new("/tmp/nowhere"))
            .unwrap_err();
        let client_err = err.downcast_ref::<ClientError>().unwrap();
        assert_eq!(client_err.exit_code(), 4);
        assert!(err.to_string().contains("Failed to launch"));
    }
}
