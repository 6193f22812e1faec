//! Command registry
//!
//! Maps command names to [`ClientCommand`] implementations. Each command
//! parses its own arguments, so the registry only needs the name.

pub mod config;
pub mod download;
pub mod fetch;
pub mod submissions;
pub mod submit;

pub use config::ConfigCommand;
pub use download::DownloadCommand;
pub use fetch::FetchCommand;
pub use submissions::SubmissionsCommand;
pub use submit::SubmitCommand;

use crate::config::Settings;
use crate::error::ClientError;
use crate::kaggle::KaggleApi;
use crate::system::System;
use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

/// Everything a command may touch
pub struct CommandContext<'src> {
    pub system: &'src dyn System,
    pub api: &'src dyn KaggleApi,
    pub settings: &'src Settings,
    pub settings_path: &'src Path,
}

/// A named, self-parsing command
pub trait ClientCommand: Send + Sync {
    /// Name the command is registered under
    fn name(&self) -> &'static str;

    /// One-line description for listings
    fn about(&self) -> &'static str;

    /// Run the command with the arguments that followed its name
    fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> Result<()>;
}

/// Name to command mapping
#[derive(Default)]
pub struct CommandManager {
    commands: BTreeMap<&'static str, Box<dyn ClientCommand>>,
}

impl CommandManager {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `config`, `download`, `submit` and `submissions`
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut manager = Self::new();
        manager.add_command(Box::new(ConfigCommand));
        manager.add_command(Box::new(DownloadCommand));
        manager.add_command(Box::new(SubmitCommand));
        manager.add_command(Box::new(SubmissionsCommand));
        manager
    }

    /// Register a command, replacing any command of the same name
    pub fn add_command(&mut self, command: Box<dyn ClientCommand>) {
        self.commands.insert(command.name(), command);
    }

    /// Look a command up by name
    pub fn find(&self, name: &str) -> Result<&dyn ClientCommand> {
        self.commands
            .get(name)
            .map(|command| command.as_ref())
            .ok_or_else(|| {
                ClientError::usage(format!(
                    "Unknown command '{name}'. Available commands: {}",
                    self.names().collect::<Vec<_>>().join(", ")
                ))
                .into()
            })
    }

    /// Registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// `(name, about)` pairs in sorted order
    pub fn describe(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.commands
            .values()
            .map(|command| (command.name(), command.about()))
    }
}

/// Parse a command's own arguments
///
/// Returns `None` when clap printed help or version output and there is
/// nothing left to do.
pub fn parse_command_args<T: Parser>(name: &str, args: &[String]) -> Result<Option<T>> {
    let argv = core::iter::once(name.to_owned()).chain(args.iter().cloned());

    match T::try_parse_from(argv) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(ClientError::usage(err.render().to_string().trim_end()).into()),
    }
}

#[expect(clippy::unwrap_used, reason = "Constant pattern")]
static COMPETITION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

/// Check that a competition id is a plain slug
pub fn validate_competition_id(competition: &str) -> Result<()> {
    if COMPETITION_ID.is_match(competition) {
        return Ok(());
    }
    Err(ClientError::usage(format!(
        "Invalid competition id '{competition}': expected letters, digits, '.', '_' or '-'"
    ))
    .into())
}

/// Pick the competition from the flag or the settings default
pub fn resolve_competition(flag: Option<&str>, settings: &Settings) -> Result<String> {
    let competition = flag
        .or(settings.competition.as_deref())
        .ok_or_else(|| {
            ClientError::usage(
                "No competition given. Pass -c <COMPETITION> or set a default with 'config -c'",
            )
        })?;

    validate_competition_id(competition)?;
    Ok(competition.to_owned())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn competition_ids() {
        validate_competition_id("titanic").unwrap();
        validate_competition_id("house-prices-advanced-regression-techniques").unwrap();
        validate_competition_id("digit_recognizer.v2").unwrap();

        assert!(validate_competition_id("").is_err());
        assert!(validate_competition_id("-c").is_err());
        assert!(validate_competition_id("../secret").is_err());
        assert!(validate_competition_id("a b").is_err());
    }

    #[test]
    fn flag_wins_over_settings() {
        let settings = Settings {
            competition: Some("titanic".to_owned()),
            ..Settings::default()
        };

        assert_eq!(resolve_competition(Some("mnist"), &settings).unwrap(), "mnist");
        assert_eq!(resolve_competition(None, &settings).unwrap(), "titanic");
    }

    #[test]
    fn missing_competition_is_a_usage_error() {
        let err = resolve_competition(None, &Settings::default()).unwrap_err();
        let client_err = err.downcast_ref::<ClientError>().unwrap();
        assert_eq!(client_err.exit_code(), 2);
    }
}
