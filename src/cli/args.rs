use crate::app::DESCRIPTION;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for kaggle-client
#[derive(Parser, Debug, Clone)]
#[command(name = "kaggle-client")]
#[command(about = DESCRIPTION)]
#[command(long_about = None)]
#[command(version)]
#[command(after_help = "Run 'kaggle-client' without a command to list the registered commands.\nRun 'kaggle-client <COMMAND> --help' for command options.")]
pub struct Args {
    /// Settings file path
    #[arg(long, value_name = "PATH", env = "KAGGLE_CLIENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Command and its arguments
    #[command(subcommand)]
    pub command: Option<CommandLine>,
}

/// Raw command line handed to the command registry
#[derive(Subcommand, Debug, Clone)]
pub enum CommandLine {
    /// Any registered command; the registry parses its arguments
    #[command(external_subcommand)]
    Run(Vec<String>),
}

impl Args {
    /// Command name followed by its arguments, if a command was given
    #[must_use]
    pub fn command_line(&self) -> Option<&[String]> {
        match &self.command {
            Some(CommandLine::Run(argv)) => Some(argv.as_slice()),
            None => None,
        }
    }
}
