//! File-backed slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::crypto::Envelope;
use crate::error::{Result, SealError};
use crate::fs::write_atomic;
use crate::storage::traits::SlotStore;

/// A slot kept in a single file.
///
/// Each `put` replaces the file atomically, so a crash mid-save leaves the
/// previous envelope intact. The file holds only the envelope text.
///
/// Writes through one `FileSlot` are serialized; separate handles or
/// processes on the same path still resolve to whichever rename lands last.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSlot {
    /// Use the file at `path`. Nothing is created until the first `put`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SlotStore for FileSlot {
    fn put(&self, envelope: &Envelope) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| SealError::Storage("File slot lock poisoned".to_string()))?;
        write_atomic(&self.path, envelope.as_str().as_bytes()).map_err(|e| {
            SealError::Storage(format!(
                "Failed to write slot {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            bytes = envelope.as_str().len(),
            "stored envelope in file slot"
        );
        Ok(())
    }

    fn get(&self) -> Result<Envelope> {
        match fs::read(&self.path) {
            // Damaged bytes are kept (as U+FFFD) so the cipher rejects them.
            Ok(bytes) => Ok(Envelope::from(
                String::from_utf8_lossy(&bytes).into_owned(),
            )),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(SealError::EmptySlot),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "slot file unreadable; treating as empty"
                );
                Err(SealError::EmptySlot)
            }
        }
    }

    fn location(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
