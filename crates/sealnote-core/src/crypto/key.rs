//! Symmetric key generation and its text form.

use std::str::FromStr;

use zeroize::ZeroizeOnDrop;

use crate::error::{Result, SealError};

/// Length of a document key in bytes (128 bits).
pub const KEY_LENGTH: usize = 16;

/// Length of a key's text form: two lowercase hex digits per byte.
pub const KEY_TEXT_LENGTH: usize = KEY_LENGTH * 2;

/// A random 128-bit key that seals exactly one saved document.
///
/// The key is never persisted by this crate. Its text form (see
/// [`SymmetricKey::to_hex`]) is handed to the user, who keeps it out of band
/// and types it back in to open the document.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct SymmetricKey {
    key: [u8; KEY_LENGTH],
}

impl SymmetricKey {
    /// Generate a new key from the operating system's secure random source.
    ///
    /// # Errors
    ///
    /// Returns `SealError::Entropy` if the OS source is unavailable. There is
    /// no fallback to a weaker generator.
    pub fn generate() -> Result<Self> {
        let mut key = [0u8; KEY_LENGTH];
        getrandom::getrandom(&mut key)?;
        tracing::debug!("generated document key");
        Ok(Self { key })
    }

    /// Parse a key from its hex text form.
    ///
    /// Either letter case is accepted and surrounding whitespace is ignored,
    /// since keys are usually pasted back in by hand.
    ///
    /// # Errors
    ///
    /// Returns `SealError::Decryption` if the text is not exactly
    /// [`KEY_TEXT_LENGTH`] hex digits. Text that is not a key cannot open
    /// anything, so it fails the same way a wrong key does.
    pub fn from_hex(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.len() != KEY_TEXT_LENGTH {
            return Err(SealError::Decryption);
        }
        let mut key = [0u8; KEY_LENGTH];
        hex::decode_to_slice(text, &mut key).map_err(|_| SealError::Decryption)?;
        Ok(Self { key })
    }

    /// Lowercase hex text form of the key, for display to the user.
    pub fn to_hex(&self) -> String {
        hex::encode(self.key)
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl FromStr for SymmetricKey {
    type Err = SealError;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_hex(text)
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Generate a fresh document key.
///
/// Shorthand for [`SymmetricKey::generate`].
pub fn generate_key() -> Result<SymmetricKey> {
    SymmetricKey::generate()
}
