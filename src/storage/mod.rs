//! Durable key-value storage
//!
//! The favorites repository only ever needs two operations from storage:
//! read one blob by key and overwrite one blob by key. [`KeyValueStore`] is
//! that seam. [`SledStore`] is the on-disk implementation; [`MemoryStore`]
//! keeps everything in process.

pub mod error;
pub mod memory;

pub use error::StorageError;
pub use memory::MemoryStore;

use sled::Db;
use std::path::Path;

/// Opaque blob storage addressed by string keys
pub trait KeyValueStore {
    /// Read the blob stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the blob stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn set(&self, key: &str, blob: &[u8]) -> Result<(), StorageError>;

    /// Force pending writes to durable media
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if flushing fails.
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        (**self).set(key, blob)
    }

    fn flush(&self) -> Result<(), StorageError> {
        (**self).flush()
    }
}

/// Sled-backed store
///
/// Writes go to sled's page cache and are made durable by its background
/// flusher, so `set` returns without waiting on the disk. Call
/// [`KeyValueStore::flush`] before shutdown to force them out.
pub struct SledStore {
    db: Db,
}

impl SledStore {
    /// Opens or creates a store at the specified path
    ///
    /// # Examples
    /// ```no_run
    /// use metcat::storage::{KeyValueStore, SledStore};
    ///
    /// let store = SledStore::open("favorites.sled").unwrap();
    /// store.set("@favorites", b"[]").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Remove every key
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the database cannot be cleared.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.db.clear()?;
        Ok(())
    }
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(key.as_bytes())?.map(|value| value.to_vec()))
    }

    fn set(&self, key: &str, blob: &[u8]) -> Result<(), StorageError> {
        self.db.insert(key.as_bytes(), blob)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}
