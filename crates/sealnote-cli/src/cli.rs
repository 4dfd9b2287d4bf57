use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use sealnote_core::VERSION;

use crate::config::Backend;

/// Sealnote - write a document, seal it under a one-time key, open it later
#[derive(Parser)]
#[command(name = "sealnote")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the slot (a file, or a SQLite database)
    #[arg(short, long, global = true, env = "SEALNOTE_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Storage backend (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub backend: Option<Backend>,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Seal a new document and print its key (replaces any saved document)
    New {
        /// Read the document from a file instead of stdin
        #[arg(short, long, value_name = "PATH")]
        file: Option<PathBuf>,
    },

    /// Open the saved document with its key
    Open {
        /// Decryption key (prompted for when omitted)
        #[arg(short, long, env = "SEALNOTE_KEY", hide_env_values = true)]
        key: Option<String>,

        /// Write the document to a file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Print a freshly generated key
    Keygen,

    /// Show where the slot lives and whether it holds a document
    Status,

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
