//! Error types for Sealnote core operations.
//!
//! The core reports a deliberately small set of failures. Lower-level
//! decoding, cipher, and storage errors are translated into these variants
//! before they leave the crate; the CLI layer maps them to user-facing
//! messages.

use thiserror::Error;

/// Result type alias for Sealnote operations.
pub type Result<T> = std::result::Result<T, SealError>;

/// Core error type for Sealnote operations.
#[derive(Debug, Error)]
pub enum SealError {
    /// Wrong key, or an envelope that is malformed, truncated, tampered with,
    /// of an unknown version, or does not decrypt to valid UTF-8.
    ///
    /// Carries no detail so callers cannot tell these cases apart.
    #[error("Decryption failed")]
    Decryption,

    /// Nothing has been saved to the slot, or its medium cannot be read.
    #[error("No document has been saved")]
    EmptySlot,

    /// The operating system's secure random source failed.
    ///
    /// This is an environment failure. Callers should abort the operation
    /// rather than retry with a weaker source.
    #[error("Secure random source unavailable: {0}")]
    Entropy(String),

    /// The document is longer than AES-GCM can seal under one nonce (about 64 GiB).
    #[error("Document too large to encrypt")]
    TooLarge,

    /// Storage backend failed while writing or opening the slot.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        SealError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for SealError {
    fn from(err: rusqlite::Error) -> Self {
        SealError::Storage(format!("SQLite error: {}", err))
    }
}

impl From<getrandom::Error> for SealError {
    fn from(err: getrandom::Error) -> Self {
        SealError::Entropy(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decryption_display_has_no_detail() {
        assert_eq!(SealError::Decryption.to_string(), "Decryption failed");
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: SealError = std::io::Error::other("disk full").into();
        assert!(matches!(err, SealError::Storage(ref msg) if msg.contains("disk full")));
    }
}
