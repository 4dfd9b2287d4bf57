use std::io::{self, IsTerminal, Write};
use std::path::Path;

use dialoguer::Password;
use sealnote_core::crypto::decrypt_with_key_text;
use sealnote_core::fs::write_atomic;

use crate::app::{effective_config, open_store};
use crate::cli::Cli;
use crate::errors::CliError;

pub fn handle_open(cli: &Cli, key: Option<&str>, output: Option<&Path>) -> anyhow::Result<()> {
    let config = effective_config(cli)?;
    let store = open_store(&config)?;

    // Fail before prompting if there is nothing to open.
    let envelope = store.get()?;

    let key_text = match key {
        Some(key) => key.to_string(),
        None => prompt_key()?,
    };
    let document = decrypt_with_key_text(&envelope, &key_text)?;

    match output {
        Some(path) => {
            // Plaintext on disk gets the same owner-only mode as the slot.
            write_atomic(path, document.as_bytes())
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
            if !cli.quiet {
                eprintln!("Wrote document to {}", path.display());
            }
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn prompt_key() -> anyhow::Result<String> {
    if !io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "No key provided. Pass --key or set SEALNOTE_KEY.",
        )
        .into());
    }
    Password::new()
        .with_prompt("Decryption key")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read key: {}", e))
}
