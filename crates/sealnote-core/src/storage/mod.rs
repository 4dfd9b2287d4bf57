//! Storage abstraction for Sealnote.
//!
//! This module defines the `SlotStore` trait and its backends. The slot is
//! the only thing Sealnote persists, and it only ever holds ciphertext.
//!
//! ## Backends
//!
//! - `MemorySlot`: process-local, for tests and embedding
//! - `FileSlot`: one file, replaced atomically on every save
//! - `SqliteSlot`: one row in a SQLite database

pub mod file;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use file::FileSlot;
pub use memory::MemorySlot;
pub use sqlite::{SqliteSlot, DEFAULT_SLOT_NAME};
pub use traits::SlotStore;
