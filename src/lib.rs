//! `kaggle-client` - API wrapper for the unofficial Kaggle command line tool
//!
//! This library registers the `config`, `download`, `submit` and
//! `submissions` commands on an explicit command registry and adds dataset
//! fetching: download a competition into a new directory, unpack every zip
//! archive there and remove the archives.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod kaggle;
pub mod system;
pub mod utils;

use anyhow::Result;
use app::KaggleClient;
use cli::Args;
use config::{Settings, default_config_path};
use kaggle::KaggleCli;
use system::{RealSystem, System};

/// Main entry point for the kaggle-client library
pub fn run(args: &Args) -> Result<()> {
    let system = RealSystem::new();
    run_with_system(args, &system)
}

/// Run against an explicit system, using the `kaggle` executable for remote calls
pub fn run_with_system(args: &Args, system: &dyn System) -> Result<()> {
    let settings_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    let settings = Settings::load_from_file(system, &settings_path)?;
    let api = KaggleCli::from_settings(system, &settings);
    let client = KaggleClient::new(system, &api, settings, settings_path);

    let Some(argv) = args.command_line() else {
        // Output to stdout (not using logging)
        println!("Commands:");
        for (name, about) in client.commands() {
            println!("  {name:<12} {about}");
        }
        return Ok(());
    };

    client.run(argv)
}
