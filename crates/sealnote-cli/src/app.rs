//! Resolves configuration and builds the slot store for a command.

use std::path::PathBuf;

use sealnote_core::storage::{FileSlot, SlotStore, SqliteSlot};

use crate::cli::Cli;
use crate::config::{
    default_config_path, default_store_path, read_config, Backend, SealnoteConfig,
};
use crate::constants::CONFIG_ENV;

pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, falling back to file-backend defaults when there is none.
pub fn load_config() -> anyhow::Result<SealnoteConfig> {
    let path = resolve_config_path()?;
    if path.exists() {
        tracing::debug!(path = %path.display(), "loading config");
        read_config(&path)
    } else {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        SealnoteConfig::default_for(Backend::File)
    }
}

/// Apply command-line overrides on top of the loaded config.
pub fn effective_config(cli: &Cli) -> anyhow::Result<SealnoteConfig> {
    let mut config = load_config()?;

    if let Some(backend) = cli.backend {
        if backend != config.store.backend {
            // The configured path belongs to the other backend's format.
            config.store.backend = backend;
            config.store.path = default_store_path(backend)?
                .to_string_lossy()
                .to_string();
        }
    }
    if let Some(path) = &cli.store {
        config.store.path = path.to_string_lossy().to_string();
    }
    Ok(config)
}

pub fn open_store(config: &SealnoteConfig) -> anyhow::Result<Box<dyn SlotStore>> {
    let path = PathBuf::from(&config.store.path);
    let store: Box<dyn SlotStore> = match config.store.backend {
        Backend::File => Box::new(FileSlot::new(path)),
        Backend::Sqlite => Box::new(SqliteSlot::open_named(&path, config.slot_name())?),
    };
    tracing::debug!(location = %store.location(), "opened slot");
    Ok(store)
}
