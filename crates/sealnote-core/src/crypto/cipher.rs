//! AES-128-GCM document encryption.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Key, Nonce};
use zeroize::Zeroize;

use super::envelope::{Envelope, ENVELOPE_VERSION, NONCE_LENGTH};
use super::key::SymmetricKey;
use crate::error::{Result, SealError};

/// Seals documents into [`Envelope`]s and opens them again.
///
/// Stateless: every call builds its cipher from the key it is given, so one
/// value can serve any number of keys and threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCipher;

impl DocumentCipher {
    /// Encrypt `plaintext` under `key` with a fresh random nonce.
    ///
    /// Any string is accepted, including the empty one. Two calls with the
    /// same inputs produce different envelopes.
    ///
    /// # Errors
    ///
    /// - `SealError::Entropy` if no nonce could be drawn from the OS
    /// - `SealError::TooLarge` if the document exceeds the AES-GCM length limit
    pub fn encrypt(&self, plaintext: &str, key: &SymmetricKey) -> Result<Envelope> {
        let mut nonce = [0u8; NONCE_LENGTH];
        getrandom::getrandom(&mut nonce)?;

        let payload = Payload {
            msg: plaintext.as_bytes(),
            aad: ENVELOPE_VERSION.as_bytes(),
        };
        let ciphertext = cipher_for(key)
            .encrypt(Nonce::from_slice(&nonce), payload)
            .map_err(|_| SealError::TooLarge)?;

        tracing::debug!(
            plaintext_bytes = plaintext.len(),
            ciphertext_bytes = ciphertext.len(),
            "sealed document"
        );
        Ok(Envelope::seal(&nonce, &ciphertext))
    }

    /// Decrypt `envelope` with `key`.
    ///
    /// # Errors
    ///
    /// Returns `SealError::Decryption` if the key is wrong, the envelope is
    /// malformed, truncated, altered, or of an unknown version, or the
    /// recovered bytes are not UTF-8. Garbage is never returned.
    pub fn decrypt(&self, envelope: &Envelope, key: &SymmetricKey) -> Result<String> {
        let sealed = envelope.unseal()?;
        let payload = Payload {
            msg: &sealed.ciphertext,
            aad: ENVELOPE_VERSION.as_bytes(),
        };
        let plaintext = cipher_for(key)
            .decrypt(Nonce::from_slice(&sealed.nonce), payload)
            .map_err(|_| {
                tracing::debug!("envelope failed authentication");
                SealError::Decryption
            })?;

        let document = String::from_utf8(plaintext).map_err(|err| {
            err.into_bytes().zeroize();
            SealError::Decryption
        })?;
        tracing::debug!(plaintext_bytes = document.len(), "opened document");
        Ok(document)
    }

    /// Decrypt `envelope` with a key typed in by the user.
    ///
    /// Key text that does not parse fails with `SealError::Decryption`, the
    /// same as a well-formed but wrong key.
    pub fn decrypt_with_key_text(&self, envelope: &Envelope, key_text: &str) -> Result<String> {
        let key = SymmetricKey::from_hex(key_text)?;
        self.decrypt(envelope, &key)
    }
}

fn cipher_for(key: &SymmetricKey) -> Aes128Gcm {
    Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(key.as_bytes()))
}

/// Encrypt a document with [`DocumentCipher`].
pub fn encrypt(plaintext: &str, key: &SymmetricKey) -> Result<Envelope> {
    DocumentCipher.encrypt(plaintext, key)
}

/// Decrypt an envelope with [`DocumentCipher`].
pub fn decrypt(envelope: &Envelope, key: &SymmetricKey) -> Result<String> {
    DocumentCipher.decrypt(envelope, key)
}

/// Decrypt an envelope with user-supplied key text.
pub fn decrypt_with_key_text(envelope: &Envelope, key_text: &str) -> Result<String> {
    DocumentCipher.decrypt_with_key_text(envelope, key_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::generate_key;

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let key = generate_key().unwrap();
        let plaintext = "# Notes\n\nSome *secret* markdown. ünïcødé ✓";

        let envelope = encrypt(plaintext, &key).unwrap();
        assert_eq!(decrypt(&envelope, &key).unwrap(), plaintext);
    }

    #[test]
    fn test_empty_document_round_trip() {
        let key = generate_key().unwrap();

        let envelope = encrypt("", &key).unwrap();
        assert_eq!(decrypt(&envelope, &key).unwrap(), "");
    }

    #[test]
    fn test_encryption_is_randomized() {
        let key = generate_key().unwrap();

        let first = encrypt("same text", &key).unwrap();
        let second = encrypt("same text", &key).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_envelope_does_not_contain_plaintext() {
        let key = generate_key().unwrap();
        let envelope = encrypt("PLAINTEXT_MARKER_123", &key).unwrap();
        assert!(!envelope.as_str().contains("PLAINTEXT_MARKER_123"));
    }

    #[test]
    fn test_wrong_key_fails() {
        let key = generate_key().unwrap();
        let other = generate_key().unwrap();

        let envelope = encrypt("secret", &key).unwrap();
        assert!(matches!(
            decrypt(&envelope, &other),
            Err(SealError::Decryption)
        ));
    }

    #[test]
    fn test_version_tag_is_authenticated() {
        let key = generate_key().unwrap();
        let envelope = encrypt("secret", &key).unwrap();
        let body = envelope.as_str().strip_prefix("v1:").unwrap();

        // Same payload under a different tag must not open, even if a later
        // release starts accepting that tag.
        let relabeled = Envelope::from(format!("v2:{}", body));
        assert!(matches!(
            decrypt(&relabeled, &key),
            Err(SealError::Decryption)
        ));
    }

    #[test]
    fn test_non_utf8_plaintext_is_rejected() {
        let key = generate_key().unwrap();
        let nonce = [3u8; NONCE_LENGTH];
        let payload = Payload {
            msg: &[0xff, 0xfe, 0xfd][..],
            aad: ENVELOPE_VERSION.as_bytes(),
        };
        let ciphertext = cipher_for(&key)
            .encrypt(Nonce::from_slice(&nonce), payload)
            .unwrap();
        let envelope = Envelope::seal(&nonce, &ciphertext);

        assert!(matches!(
            decrypt(&envelope, &key),
            Err(SealError::Decryption)
        ));
    }

    #[test]
    fn test_decrypt_with_key_text() {
        let key = generate_key().unwrap();
        let envelope = encrypt("# Hello", &key).unwrap();

        assert_eq!(
            decrypt_with_key_text(&envelope, &key.to_hex()).unwrap(),
            "# Hello"
        );
        assert!(matches!(
            decrypt_with_key_text(&envelope, "wrongkeywrongkeyx"),
            Err(SealError::Decryption)
        ));
    }
}
