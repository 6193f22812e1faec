//! `submissions`: list past submissions

use super::{ClientCommand, CommandContext, parse_command_args, resolve_competition};
use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "submissions", about = "List the submissions made to a competition")]
struct SubmissionsArgs {
    /// Competition to list (defaults to the configured one)
    #[arg(short, long, value_name = "COMPETITION")]
    competition: Option<String>,
}

/// Prints the submission listing to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionsCommand;

impl ClientCommand for SubmissionsCommand {
    fn name(&self) -> &'static str {
        "submissions"
    }

    fn about(&self) -> &'static str {
        "List the submissions made to a competition"
    }

    fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> Result<()> {
        let Some(args) = parse_command_args::<SubmissionsArgs>(self.name(), args)? else {
            return Ok(());
        };

        let competition = resolve_competition(args.competition.as_deref(), ctx.settings)?;
        let listing = ctx.api.submissions(&competition)?;

        // Output to stdout (not using logging)
        println!("{}", listing.trim_end());
        Ok(())
    }
}
