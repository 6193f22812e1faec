//! `config`: show or update the persisted settings

use super::{ClientCommand, CommandContext, parse_command_args, validate_competition_id};
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "config", about = "Show or update the client settings")]
struct ConfigArgs {
    /// Kaggle account name
    #[arg(short, long, value_name = "USER")]
    username: Option<String>,

    /// Kaggle API key
    #[arg(short, long, value_name = "KEY")]
    key: Option<String>,

    /// Competition used when a command is given no -c
    #[arg(short, long, value_name = "COMPETITION")]
    competition: Option<String>,

    /// Path or name of the kaggle executable
    #[arg(long, value_name = "PATH")]
    cli: Option<String>,
}

impl ConfigArgs {
    const fn is_empty(&self) -> bool {
        self.username.is_none() && self.key.is_none() && self.competition.is_none() && self.cli.is_none()
    }
}

/// Prints the settings, or merges the given values into the settings file
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigCommand;

impl ClientCommand for ConfigCommand {
    fn name(&self) -> &'static str {
        "config"
    }

    fn about(&self) -> &'static str {
        "Show or update the client settings"
    }

    fn execute(&self, ctx: &CommandContext<'_>, args: &[String]) -> Result<()> {
        let Some(args) = parse_command_args::<ConfigArgs>(self.name(), args)? else {
            return Ok(());
        };

        if args.is_empty() {
            // Output to stdout (not using logging)
            println!("# {}", ctx.settings_path.display());
            println!("{}", ctx.settings.describe());
            return Ok(());
        }

        if let Some(competition) = args.competition.as_deref() {
            validate_competition_id(competition)?;
        }

        let mut settings = ctx.settings.clone();
        settings.username = args.username.or(settings.username);
        settings.key = args.key.or(settings.key);
        settings.competition = args.competition.or(settings.competition);
        settings.cli = args.cli.or(settings.cli);

        settings.save_to_file(ctx.system, ctx.settings_path)?;
        info!("Saved settings to {}", ctx.settings_path.display());
        Ok(())
    }
}
