//! In-memory slot, for tests and embedding.

use std::sync::Mutex;

use crate::crypto::Envelope;
use crate::error::{Result, SealError};
use crate::storage::traits::SlotStore;

/// A slot that lives only as long as the value does.
#[derive(Debug, Default)]
pub struct MemorySlot {
    slot: Mutex<Option<Envelope>>,
}

impl MemorySlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlot {
    fn put(&self, envelope: &Envelope) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| SealError::Storage("Memory slot poisoned".to_string()))?;
        *slot = Some(envelope.clone());
        tracing::debug!(bytes = envelope.as_str().len(), "stored envelope in memory slot");
        Ok(())
    }

    fn get(&self) -> Result<Envelope> {
        let slot = self.slot.lock().map_err(|_| {
            tracing::warn!("memory slot poisoned; treating as empty");
            SealError::EmptySlot
        })?;
        slot.clone().ok_or(SealError::EmptySlot)
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_empty() {
        let slot = MemorySlot::new();
        assert!(slot.is_empty());
        assert!(matches!(slot.get(), Err(SealError::EmptySlot)));
    }

    #[test]
    fn test_put_overwrites() {
        let slot = MemorySlot::new();
        slot.put(&Envelope::from("v1:first")).unwrap();
        slot.put(&Envelope::from("v1:second")).unwrap();

        assert_eq!(slot.get().unwrap().as_str(), "v1:second");
        assert!(!slot.is_empty());
    }
}
