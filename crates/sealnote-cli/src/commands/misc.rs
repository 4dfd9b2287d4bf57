use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use sealnote_core::crypto::{generate_key, ENVELOPE_VERSION};
use sealnote_core::SealError;

use crate::app::{effective_config, open_store, resolve_config_path};
use crate::cli::Cli;
use crate::config::{write_config, Backend, SealnoteConfig};

pub fn handle_init(cli: &Cli, force: bool) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        ));
    }

    let mut config = SealnoteConfig::default_for(cli.backend.unwrap_or(Backend::File))?;
    if let Some(path) = &cli.store {
        config.store.path = path.to_string_lossy().to_string();
    }
    write_config(&config_path, &config)?;

    if !cli.quiet {
        println!("Wrote config to {}", config_path.display());
        println!("Documents will be stored at {}", config.store.path);
    }
    Ok(())
}

pub fn handle_keygen() -> anyhow::Result<()> {
    println!("{}", generate_key()?.to_hex());
    Ok(())
}

pub fn handle_status(cli: &Cli) -> anyhow::Result<()> {
    let config = effective_config(cli)?;
    let store = open_store(&config)?;

    match store.get() {
        Ok(envelope) => {
            let format = match envelope.version() {
                Some(ENVELOPE_VERSION) => ENVELOPE_VERSION.to_string(),
                Some(other) => format!("{} (unsupported)", other),
                None => "unrecognized".to_string(),
            };
            if cli.quiet {
                println!("saved");
            } else {
                println!("Store: {}", store.location());
                println!("Document: saved ({} bytes, format {})", envelope.as_str().len(), format);
            }
        }
        Err(SealError::EmptySlot) => {
            if cli.quiet {
                println!("empty");
            } else {
                println!("Store: {}", store.location());
                println!("Document: none saved");
            }
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

pub fn handle_completions(shell: Shell) -> anyhow::Result<()> {
    let mut command = Cli::command();
    generate(shell, &mut command, "sealnote", &mut io::stdout());
    Ok(())
}
