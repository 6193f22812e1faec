//! `fetch`: download a competition into a new directory and unpack it

use super::{ClientCommand, CommandContext, parse_command_args, resolve_competition};
use crate::dataset::fetch_dataset;
use crate::utils::path::resolve_path;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fetch",
    about = "Download a competition's dataset into a new directory and unpack its archives"
)]
struct FetchArgs {
    /// Competition to fetch (defaults to the configured one)
    #[arg(short, long, value_name = "COMPETITION")]
    competition: Option<String>,

    /// Directory to create; must not exist yet
    #[arg(value_name = "TARGET")]
    target: PathBuf,
}

/// Command-line face of [`fetch_dataset`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchCommand;

impl ClientCommand for FetchCommand {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn about(&self) -> &'static str {
        "Download a competition's dataset into a new directory and unpack it"
    }

    fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> Result<()> {
        let Some(args) = parse_command_args::<FetchArgs>(self.name(), args)? else {
            return Ok(());
        };

        let competition = resolve_competition(args.competition.as_deref(), ctx.settings)?;
        let target = resolve_path(ctx.system, &args.target)?;

        fetch_dataset(ctx.system, ctx.api, &competition, &target)?;
        Ok(())
    }
}
