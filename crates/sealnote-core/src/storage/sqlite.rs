//! SQLite-backed slot.
//!
//! The slot is one row of a `slots` table, keyed by name. Several named
//! slots can share a database file, but each `SqliteSlot` only ever touches
//! its own row.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension};

use crate::crypto::Envelope;
use crate::error::{Result, SealError};
use crate::storage::traits::SlotStore;

/// Slot name used when none is given.
pub const DEFAULT_SLOT_NAME: &str = "encryptedContent";

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS slots (
    name TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// A slot stored as a row in a SQLite database.
pub struct SqliteSlot {
    conn: Mutex<Connection>,
    name: String,
    location: String,
}

impl SqliteSlot {
    /// Open (or create) the database at `path` and use the default slot.
    ///
    /// # Errors
    ///
    /// Returns `SealError::Storage` if the database cannot be opened or its
    /// schema cannot be created.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_named(path, DEFAULT_SLOT_NAME)
    }

    /// Open (or create) the database at `path` and use the slot `name`.
    pub fn open_named(path: &Path, name: &str) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::init(
            conn,
            name,
            format!("sqlite:{}#{}", path.display(), name),
        )
    }

    /// Use a private in-memory database. The slot disappears with the value.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(
            conn,
            DEFAULT_SLOT_NAME,
            format!("sqlite::memory:#{}", DEFAULT_SLOT_NAME),
        )
    }

    fn init(conn: Connection, name: &str, location: String) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
            name: name.to_string(),
            location,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> std::result::Result<Option<String>, String> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| "SQLite connection poisoned".to_string())?;
        conn.query_row(
            "SELECT value FROM slots WHERE name = ?1",
            [&self.name],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| e.to_string())
    }
}

impl SlotStore for SqliteSlot {
    fn put(&self, envelope: &Envelope) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| SealError::Storage("SQLite connection poisoned".to_string()))?;
        conn.execute(
            "INSERT INTO slots (name, value) VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET value = excluded.value",
            (&self.name, envelope.as_str()),
        )?;
        tracing::debug!(
            slot = %self.name,
            bytes = envelope.as_str().len(),
            "stored envelope in sqlite slot"
        );
        Ok(())
    }

    fn get(&self) -> Result<Envelope> {
        match self.read() {
            Ok(Some(text)) => Ok(Envelope::from(text)),
            Ok(None) => Err(SealError::EmptySlot),
            Err(err) => {
                tracing::warn!(
                    slot = %self.name,
                    error = %err,
                    "sqlite slot unreadable; treating as empty"
                );
                Err(SealError::EmptySlot)
            }
        }
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}

impl std::fmt::Debug for SqliteSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteSlot")
            .field("location", &self.location)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_in_memory_slot_starts_empty() {
        let slot = SqliteSlot::open_in_memory().unwrap();
        assert!(matches!(slot.get(), Err(SealError::EmptySlot)));
        assert_eq!(slot.name(), DEFAULT_SLOT_NAME);
    }

    #[test]
    fn test_put_keeps_a_single_row() {
        let slot = SqliteSlot::open_in_memory().unwrap();
        slot.put(&Envelope::from("v1:first")).unwrap();
        slot.put(&Envelope::from("v1:second")).unwrap();

        let rows: i64 = slot
            .conn
            .lock()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM slots", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(slot.get().unwrap().as_str(), "v1:second");
    }

    #[test]
    fn test_named_slots_are_independent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("slots.db");
        let a = SqliteSlot::open_named(&path, "a").unwrap();
        let b = SqliteSlot::open_named(&path, "b").unwrap();

        a.put(&Envelope::from("v1:for-a")).unwrap();

        assert_eq!(a.get().unwrap().as_str(), "v1:for-a");
        assert!(matches!(b.get(), Err(SealError::EmptySlot)));
    }

    #[test]
    fn test_value_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("slots.db");

        SqliteSlot::open(&path)
            .unwrap()
            .put(&Envelope::from("v1:kept"))
            .unwrap();

        let reopened = SqliteSlot::open(&path).unwrap();
        assert_eq!(reopened.get().unwrap().as_str(), "v1:kept");
    }
}
