use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use sealnote_core::storage::DEFAULT_SLOT_NAME;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SealnoteConfig {
    pub store: StoreSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreSection {
    pub backend: Backend,
    pub path: String,
    /// Row name inside the SQLite database; ignored by the file backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// One file, replaced atomically on every save
    File,
    /// One row in a SQLite database
    Sqlite,
}

impl SealnoteConfig {
    pub fn new(backend: Backend, store_path: PathBuf) -> Self {
        Self {
            store: StoreSection {
                backend,
                path: store_path.to_string_lossy().to_string(),
                slot: None,
            },
        }
    }

    pub fn default_for(backend: Backend) -> anyhow::Result<Self> {
        Ok(Self::new(backend, default_store_path(backend)?))
    }

    pub fn slot_name(&self) -> &str {
        self.store.slot.as_deref().unwrap_or(DEFAULT_SLOT_NAME)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path(backend: Backend) -> anyhow::Result<PathBuf> {
    let file_name = match backend {
        Backend::File => "document.sealed",
        Backend::Sqlite => "sealnote.db",
    };
    Ok(xdg_data_dir()?.join(file_name))
}

pub fn read_config(path: &Path) -> anyhow::Result<SealnoteConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &SealnoteConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sealnote"));
        }
    }
    Ok(home_dir()?.join(".config").join("sealnote"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sealnote"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("sealnote"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sealnote").join("config.toml");
        let mut config = SealnoteConfig::new(Backend::Sqlite, dir.path().join("notes.db"));
        config.store.slot = Some("work".to_string());

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.slot_name(), "work");
    }

    #[test]
    fn test_slot_defaults_when_missing() {
        let parsed: SealnoteConfig =
            toml::from_str("[store]\nbackend = \"file\"\npath = \"/tmp/doc.sealed\"\n").unwrap();

        assert_eq!(parsed.store.backend, Backend::File);
        assert_eq!(parsed.slot_name(), DEFAULT_SLOT_NAME);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let result: Result<SealnoteConfig, _> =
            toml::from_str("[store]\nbackend = \"s3\"\npath = \"x\"\n");
        assert!(result.is_err());
    }
}
