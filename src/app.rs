//! The client application: registry, collaborators and settings in one place

use crate::commands::{ClientCommand as _, CommandContext, CommandManager, FetchCommand};
use crate::config::Settings;
use crate::dataset::{FetchReport, fetch_dataset};
use crate::error::ClientError;
use crate::kaggle::KaggleApi;
use crate::system::System;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application description shown in `--help`
pub const DESCRIPTION: &str = "API wrapper for the unofficial Kaggle command line tool.";

/// Dispatches commands and runs dataset fetches
pub struct KaggleClient<'src> {
    system: &'src dyn System,
    api: &'src dyn KaggleApi,
    settings: Settings,
    settings_path: PathBuf,
    manager: CommandManager,
}

impl<'src> KaggleClient<'src> {
    /// Build a client with the built-in commands plus `fetch`
    #[must_use]
    pub fn new(
        system: &'src dyn System,
        api: &'src dyn KaggleApi,
        settings: Settings,
        settings_path: PathBuf,
    ) -> Self {
        let mut manager = CommandManager::with_builtins();
        manager.add_command(Box::new(FetchCommand));

        Self {
            system,
            api,
            settings,
            settings_path,
            manager,
        }
    }

    /// Run `argv[0]` with the remaining arguments
    pub fn run(&self, argv: &[String]) -> Result<()> {
        let (name, args) = argv
            .split_first()
            .ok_or_else(|| ClientError::usage("No command given"))?;

        let command = self.manager.find(name)?;
        debug!("Running command '{}' with {:?}", command.name(), args);

        let ctx = CommandContext {
            system: self.system,
            api: self.api,
            settings: &self.settings,
            settings_path: &self.settings_path,
        };
        command.execute(&ctx, args)
    }

    /// Download `competition` into the new directory `target_path` and unpack it
    pub fn download_dataset(&self, competition: &str, target_path: &Path) -> Result<FetchReport> {
        fetch_dataset(self.system, self.api, competition, target_path)
    }

    /// `(name, about)` for every registered command
    pub fn commands(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.manager.describe()
    }
}
