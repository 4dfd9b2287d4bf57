//! Single-slot store trait definition.
//!
//! The `SlotStore` trait is the persistence boundary of Sealnote. A slot
//! holds at most one envelope, so a backend only needs one named location
//! that can be overwritten as a whole: a file, a database row, or a map entry.

use crate::crypto::Envelope;
use crate::error::{Result, SealError};

/// Persistence for the one saved document.
///
/// All implementations must ensure:
/// - A new slot starts empty
/// - `put` replaces any previous envelope unconditionally (last writer wins,
///   no merge); the old envelope is gone afterwards
/// - A `get` after a `put` in the same process sees the new envelope
/// - Envelopes are stored and returned verbatim
pub trait SlotStore: Send + Sync {
    /// Save `envelope`, replacing whatever the slot held.
    ///
    /// # Errors
    ///
    /// Returns `SealError::Storage` if the backing medium cannot be written.
    fn put(&self, envelope: &Envelope) -> Result<()>;

    /// Read the saved envelope.
    ///
    /// # Errors
    ///
    /// Returns `SealError::EmptySlot` if nothing has been saved, or if the
    /// backing medium is unavailable.
    fn get(&self) -> Result<Envelope>;

    /// Whether `get` would report an empty slot.
    fn is_empty(&self) -> bool {
        matches!(self.get(), Err(SealError::EmptySlot))
    }

    /// Short human-readable location of the slot, e.g. `file:/path/to/slot`.
    fn location(&self) -> String;
}

impl<S: SlotStore + ?Sized> SlotStore for Box<S> {
    fn put(&self, envelope: &Envelope) -> Result<()> {
        (**self).put(envelope)
    }

    fn get(&self) -> Result<Envelope> {
        (**self).get()
    }

    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
