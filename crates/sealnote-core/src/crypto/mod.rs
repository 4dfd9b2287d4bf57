//! Cryptographic operations for Sealnote.
//!
//! - **key**: random 128-bit document keys and their hex text form
//! - **envelope**: the versioned text layout that carries a sealed document
//! - **cipher**: AES-128-GCM encryption and decryption
//!
//! ## Security Model
//!
//! - Every save gets a new key from the OS random source; keys are never
//!   stored by this crate
//! - AES-GCM authenticates the ciphertext and the envelope version tag, so a
//!   wrong key or any modification fails decryption instead of yielding
//!   garbage
//! - Key material is zeroized from memory on drop
//!
//! We do NOT defend against:
//! - Loss of the key (the document is unrecoverable)
//! - Compromised OS / access to process memory

pub mod cipher;
pub mod envelope;
pub mod key;

pub use cipher::{decrypt, decrypt_with_key_text, encrypt, DocumentCipher};
pub use envelope::{Envelope, ENVELOPE_VERSION};
pub use key::{generate_key, SymmetricKey, KEY_LENGTH, KEY_TEXT_LENGTH};
