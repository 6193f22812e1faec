//! `submit`: upload a predictions file

use super::{ClientCommand, CommandContext, parse_command_args, resolve_competition};
use crate::error::ClientError;
use crate::utils::path::resolve_path;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "submit", about = "Submit a file to a competition")]
struct SubmitArgs {
    /// File to submit
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Submission description
    #[arg(short, long, value_name = "MESSAGE", default_value = "")]
    message: String,

    /// Competition to submit to (defaults to the configured one)
    #[arg(short, long, value_name = "COMPETITION")]
    competition: Option<String>,
}

/// Submits a local file
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitCommand;

impl ClientCommand for SubmitCommand {
    fn name(&self) -> &'static str {
        "submit"
    }

    fn about(&self) -> &'static str {
        "Submit a file to a competition"
    }

    fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> Result<()> {
        let Some(args) = parse_command_args::<SubmitArgs>(self.name(), args)? else {
            return Ok(());
        };

        let competition = resolve_competition(args.competition.as_deref(), ctx.settings)?;
        let file = resolve_path(ctx.system, &args.file)?;

        if !ctx.system.is_file(&file) {
            return Err(ClientError::filesystem(format!(
                "Submission file not found: {}",
                file.display()
            ))
            .into());
        }

        info!("Submitting {} to '{}'", file.display(), competition);
        ctx.api.submit(&competition, &file, &args.message)?;
        info!("\u{2713} Submitted");
        Ok(())
    }
}
