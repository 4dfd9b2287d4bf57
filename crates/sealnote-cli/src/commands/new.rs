use std::io::{self, IsTerminal, Read};
use std::path::Path;

use sealnote_core::crypto::{encrypt, generate_key};

use crate::app::{effective_config, open_store};
use crate::cli::Cli;
use crate::errors::CliError;

pub fn handle_new(cli: &Cli, file: Option<&Path>) -> anyhow::Result<()> {
    let document = read_document(file, cli.quiet)?;
    if document.is_empty() {
        return Err(CliError::invalid_input("Please enter some content before saving.").into());
    }

    let config = effective_config(cli)?;
    let store = open_store(&config)?;

    let key = generate_key()?;
    let envelope = encrypt(&document, &key)?;
    store.put(&envelope)?;

    if cli.quiet {
        println!("{}", key.to_hex());
    } else {
        println!("Saved document to {}", store.location());
        println!("Key: {}", key.to_hex());
        println!("Keep this key safe. It is the only way to open the document.");
    }
    Ok(())
}

fn read_document(file: Option<&Path>, quiet: bool) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() && !quiet {
        eprintln!("Enter your Markdown, then press Ctrl-D to save:");
    }
    let mut document = String::new();
    stdin
        .read_to_string(&mut document)
        .map_err(|e| anyhow::anyhow!("Failed to read document from stdin: {}", e))?;
    Ok(document)
}
