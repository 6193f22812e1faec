//! # `kaggle-client`
//!
//! Command-line client for Kaggle competitions. Wraps the official `kaggle`
//! executable and adds `fetch`, which downloads a competition into a new
//! directory and unpacks its archives in place.
//!
//! ## Usage
//!
//! ```sh
//! kaggle-client config -u alice -k 0123abcd -c titanic
//! kaggle-client fetch ./data/titanic
//! kaggle-client submit -f predictions.csv -m "first try"
//! kaggle-client submissions
//! ```
//!
//! See `kaggle-client --help` and `kaggle-client <COMMAND> --help`.

use clap::Parser as _;
use kaggle_client::cli::Args;
use kaggle_client::error::ClientError;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match kaggle_client::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<ClientError>()
                    .map_or(1, ClientError::exit_code),
            );
        }
    }
}
