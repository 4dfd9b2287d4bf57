//! Sealnote CLI - seal a markdown document under a one-time key
//!
//! This binary is the user-facing side of Sealnote: it collects documents and
//! keys, shows keys to the user, and turns core failures into messages and
//! exit codes. All crypto and storage work happens in `sealnote-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;

use clap::Parser;
use sealnote_core::SealError;

use crate::cli::Cli;
use crate::errors::CliError;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = commands::run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        if let Some(cli_err) = err.downcast_ref::<SealError>().and_then(CliError::from_seal) {
            cli_err.exit();
        }
        tracing::debug!(error = ?err, "command failed");
        return Err(err);
    }
    Ok(())
}
