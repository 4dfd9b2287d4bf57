//! The text envelope that carries a sealed document.
//!
//! Layout: `<version>:<base64(nonce || ciphertext || tag)>`, for example
//! `v1:3q2+7w...`. The version tag comes first so a reader can tell which
//! layout it is holding before decoding anything. Base64 uses the standard
//! padded alphabet and rejects non-canonical trailing bits, so every text
//! envelope maps to exactly one byte payload.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Result, SealError};

/// Version tag written by this release.
pub const ENVELOPE_VERSION: &str = "v1";

/// AES-GCM nonce length in bytes.
pub const NONCE_LENGTH: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LENGTH: usize = 16;

const SEPARATOR: char = ':';

/// A sealed document in its self-contained text form.
///
/// Everything needed to decrypt except the key lives inside. Only the cipher
/// looks inside an envelope; stores keep and return it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Envelope(String);

/// The binary parts of a `v1` envelope.
pub(crate) struct Sealed {
    pub(crate) nonce: [u8; NONCE_LENGTH],
    /// Ciphertext with the tag appended, as `aes-gcm` produces it.
    pub(crate) ciphertext: Vec<u8>,
}

impl Envelope {
    /// The envelope text, as it should be persisted.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The layout version tag, if the text has one.
    ///
    /// This does not check that the rest of the envelope is well formed.
    pub fn version(&self) -> Option<&str> {
        self.0
            .split_once(SEPARATOR)
            .map(|(version, _)| version)
            .filter(|version| !version.is_empty())
    }

    pub(crate) fn seal(nonce: &[u8; NONCE_LENGTH], ciphertext: &[u8]) -> Self {
        let mut payload = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        payload.extend_from_slice(nonce);
        payload.extend_from_slice(ciphertext);
        Envelope(format!(
            "{}{}{}",
            ENVELOPE_VERSION,
            SEPARATOR,
            STANDARD.encode(payload)
        ))
    }

    pub(crate) fn unseal(&self) -> Result<Sealed> {
        let (version, body) = self
            .0
            .split_once(SEPARATOR)
            .ok_or(SealError::Decryption)?;
        if version != ENVELOPE_VERSION {
            return Err(SealError::Decryption);
        }

        let payload = STANDARD.decode(body).map_err(|_| SealError::Decryption)?;
        if payload.len() < NONCE_LENGTH + TAG_LENGTH {
            return Err(SealError::Decryption);
        }

        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_LENGTH);
        let mut nonce = [0u8; NONCE_LENGTH];
        nonce.copy_from_slice(nonce_bytes);
        Ok(Sealed {
            nonce,
            ciphertext: ciphertext.to_vec(),
        })
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wraps text read back from storage. Nothing is validated until decryption.
impl From<String> for Envelope {
    fn from(text: String) -> Self {
        Envelope(text)
    }
}

impl From<&str> for Envelope {
    fn from(text: &str) -> Self {
        Envelope(text.to_string())
    }
}

impl From<Envelope> for String {
    fn from(envelope: Envelope) -> Self {
        envelope.0
    }
}
