//! `download`: fetch the raw competition files

use super::{ClientCommand, CommandContext, parse_command_args, resolve_competition};
use crate::utils::path::resolve_path;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "download", about = "Download the files of a competition")]
struct DownloadArgs {
    /// Competition to download (defaults to the configured one)
    #[arg(short, long, value_name = "COMPETITION")]
    competition: Option<String>,

    /// Directory the files are written to
    #[arg(short, long, value_name = "PATH", default_value = ".")]
    path: PathBuf,
}

/// Downloads competition files without unpacking them
#[derive(Debug, Clone, Copy, Default)]
pub struct DownloadCommand;

impl ClientCommand for DownloadCommand {
    fn name(&self) -> &'static str {
        "download"
    }

    fn about(&self) -> &'static str {
        "Download the files of a competition"
    }

    fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> Result<()> {
        let Some(args) = parse_command_args::<DownloadArgs>(self.name(), args)? else {
            return Ok(());
        };

        let competition = resolve_competition(args.competition.as_deref(), ctx.settings)?;
        let dest = resolve_path(ctx.system, &args.path)?;

        info!("Downloading '{}' into {}", competition, dest.display());
        ctx.api.download(&competition, &dest)?;
        info!("\u{2713} Download complete");
        Ok(())
    }
}
