// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value storage layer.
//!
//! Progress lives in a string-keyed store of JSON blobs, the same layout the
//! mobile client keeps in browser local storage.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage keys as constants.
pub mod keys {
    /// JSON object with any subset of `UserStats` fields
    pub const PROGRESS: &str = "fotografiarte_progress";
    /// JSON array of saved photos, each with an optional `likes` count
    pub const PHOTOS: &str = "fotografiarte_photos";
}

/// A string-keyed store of string values.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Errors from storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage file is corrupt: {0}")]
    Corrupt(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}
