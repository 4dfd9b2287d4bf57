//! # Sealnote Core
//!
//! Core library for Sealnote - write a document, seal it under a freshly
//! generated key, keep only the ciphertext, and open it again later with the
//! key.
//!
//! This crate holds the crypto and persistence logic, independent of any
//! user interface.
//!
//! ## Architecture
//!
//! - **crypto**: key generation, the versioned text envelope, and the
//!   AES-128-GCM document cipher
//! - **storage**: the single-slot store trait and its memory, file, and
//!   SQLite backends
//! - **fs**: atomic file replacement used by the file backend
//!
//! ## Example
//!
//! ```
//! use sealnote_core::crypto::{decrypt, encrypt, generate_key};
//! use sealnote_core::storage::{MemorySlot, SlotStore};
//!
//! let key = generate_key().unwrap();
//! let store = MemorySlot::new();
//! store.put(&encrypt("# Hello", &key).unwrap()).unwrap();
//!
//! let envelope = store.get().unwrap();
//! assert_eq!(decrypt(&envelope, &key).unwrap(), "# Hello");
//! ```

pub mod crypto;
pub mod error;
pub mod fs;
pub mod storage;

pub use crypto::{DocumentCipher, Envelope, SymmetricKey};
pub use error::{Result, SealError};
pub use storage::SlotStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
