//! Command handlers.

mod misc;
mod new;
mod open;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init { force } => misc::handle_init(cli, *force),
        Commands::New { file } => new::handle_new(cli, file.as_deref()),
        Commands::Open { key, output } => open::handle_open(cli, key.as_deref(), output.as_deref()),
        Commands::Keygen => misc::handle_keygen(),
        Commands::Status => misc::handle_status(cli),
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}
