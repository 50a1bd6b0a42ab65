//! Testing utilities for metcat
//!
//! Record fixtures and a `TestStore` wrapper for temporary sled databases.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::Record;
use crate::storage::SledStore;
use tempfile::TempDir;

/// A record with the given id and name
pub fn record(id: &str, name: &str) -> Record {
    Record::new(id, name)
}

/// One record per id, named `Meteorite <id>`, in the given order
pub fn records(ids: &[&str]) -> Vec<Record> {
    ids.iter()
        .map(|id| record(id, &format!("Meteorite {id}")))
        .collect()
}

/// `count` records with ids `0..count`
pub fn numbered_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| record(&i.to_string(), &format!("Meteorite {i}")))
        .collect()
}

/// Sled store in a temporary directory that is removed on drop
///
/// # Examples
/// ```ignore
/// let test_store = TestStore::new();
/// test_store.store().set("@favorites", b"[]").unwrap();
/// // Directory removed when test_store is dropped
/// ```
pub struct TestStore {
    // Field order matters: the store must close before the directory goes.
    store: SledStore,
    _dir: TempDir,
}

impl TestStore {
    /// # Panics
    /// Panics if the temporary directory or the database cannot be created.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = SledStore::open(dir.path().join("test.sled")).expect("Failed to open test store");
        Self { store, _dir: dir }
    }

    #[must_use]
    pub const fn store(&self) -> &SledStore {
        &self.store
    }
}
