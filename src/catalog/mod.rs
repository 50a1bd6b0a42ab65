//! Catalog store
//!
//! Holds the full fetched record list for the session. The catalog starts
//! empty, is populated exactly once, and is read-only afterwards. Every view is
//! derived from [`CatalogStore::all`].
//!
//! # Examples
//!
//! ```
//! use metcat::catalog::{CatalogStore, Record};
//!
//! let mut store = CatalogStore::new();
//! store.load(vec![Record::new("1", "Aachen"), Record::new("2", "Aarhus")]).unwrap();
//!
//! assert_eq!(store.len(), 2);
//! assert!(store.load(vec![]).is_err());
//! ```

pub mod error;
pub mod record;
pub mod source;

pub use error::{CatalogError, FetchFailure};
pub use record::{Fall, Geolocation, Record, RecordId};
pub use source::{CatalogSource, JsonBytesSource, JsonFileSource, decode_records};

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{error, info, warn};

/// In-memory, load-once record list
#[derive(Debug, Default)]
pub struct CatalogStore {
    records: Vec<Record>,
    index: HashMap<RecordId, usize>,
    loaded: bool,
    /// Set once a load has been attempted, successful or not
    spent: bool,
}

impl CatalogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the catalog
    ///
    /// Server order is preserved. If the payload repeats an id, the first
    /// occurrence is kept and the rest are dropped.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateLoad` if the catalog was already loaded
    /// this session, or a fetch already failed. The existing records are left
    /// untouched.
    pub fn load(&mut self, records: Vec<Record>) -> Result<usize, CatalogError> {
        if self.spent {
            error!(
                existing = self.records.len(),
                "catalog load attempted twice"
            );
            return Err(CatalogError::DuplicateLoad {
                existing: self.records.len(),
            });
        }

        let mut kept = Vec::with_capacity(records.len());
        let mut index = HashMap::with_capacity(records.len());

        for record in records {
            match index.entry(record.id.clone()) {
                Entry::Occupied(_) => {
                    warn!(id = %record.id, "dropping record with duplicate id");
                }
                Entry::Vacant(slot) => {
                    slot.insert(kept.len());
                    kept.push(record);
                }
            }
        }

        self.records = kept;
        self.index = index;
        self.loaded = true;
        self.spent = true;

        info!(records = self.records.len(), "catalog loaded");
        Ok(self.records.len())
    }

    /// Fetch from a collaborator and load the result
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Fetch` if the source fails, or
    /// `CatalogError::DuplicateLoad` if a load was already attempted. A failed
    /// fetch leaves the catalog empty for the rest of the session.
    pub fn load_from(&mut self, source: &dyn CatalogSource) -> Result<usize, CatalogError> {
        if self.spent {
            return self.load(Vec::new());
        }

        match source.fetch() {
            Ok(records) => self.load(records),
            Err(failure) => {
                warn!(source = %source.describe(), error = %failure, "catalog fetch failed");
                self.spent = true;
                Err(failure.into())
            }
        }
    }

    /// The whole catalog in server order
    #[must_use]
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Look a record up by id
    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the catalog holds fetched data
    ///
    /// Stays `false` after a failed fetch, even though no further load is
    /// accepted.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::records;

    #[test]
    fn test_new_store_is_empty() {
        let store = CatalogStore::new();
        assert!(store.is_empty());
        assert!(!store.is_loaded());
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_load_preserves_order() {
        let mut store = CatalogStore::new();
        let loaded = store.load(records(&["3", "1", "2"])).unwrap();

        assert_eq!(loaded, 3);
        let ids: Vec<&str> = store.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
        assert!(store.is_loaded());
    }

    #[test]
    fn test_second_load_is_rejected() {
        let mut store = CatalogStore::new();
        store.load(records(&["A", "B"])).unwrap();

        let result = store.load(records(&["C"]));
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateLoad { existing: 2 })
        ));
        assert_eq!(store.len(), 2);
        assert!(store.get(&RecordId::from("C")).is_none());
    }

    #[test]
    fn test_loading_empty_payload_still_counts_as_loaded() {
        let mut store = CatalogStore::new();
        store.load(Vec::new()).unwrap();
        assert!(store.is_loaded());
        assert!(store.load(records(&["A"])).is_err());
    }

    #[test]
    fn test_duplicate_ids_keep_first_occurrence() {
        let mut store = CatalogStore::new();
        let payload = vec![
            Record::new("1", "First"),
            Record::new("2", "Other"),
            Record::new("1", "Second"),
        ];

        assert_eq!(store.load(payload).unwrap(), 2);
        assert_eq!(store.get(&RecordId::from("1")).unwrap().name, "First");
    }

    #[test]
    fn test_get_and_contains() {
        let mut store = CatalogStore::new();
        store.load(records(&["A", "B", "C"])).unwrap();

        assert_eq!(store.get(&RecordId::from("B")).unwrap().id.as_str(), "B");
        assert!(store.contains(&RecordId::from("C")));
        assert!(!store.contains(&RecordId::from("Z")));
    }

    #[test]
    fn test_load_from_failed_source_leaves_catalog_empty() {
        let mut store = CatalogStore::new();
        let source = JsonBytesSource::new("not json");

        let result = store.load_from(&source);
        assert!(matches!(result, Err(CatalogError::Fetch(_))));
        assert!(store.is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_failed_fetch_blocks_later_loads() {
        let mut store = CatalogStore::new();
        assert!(store.load_from(&JsonBytesSource::new("not json")).is_err());

        assert!(matches!(
            store.load(records(&["1"])),
            Err(CatalogError::DuplicateLoad { existing: 0 })
        ));
        assert!(matches!(
            store.load_from(&JsonBytesSource::new(r#"[{"id":"1","name":"Aachen"}]"#)),
            Err(CatalogError::DuplicateLoad { .. })
        ));
        assert!(store.all().is_empty());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_load_from_source() {
        let mut store = CatalogStore::new();
        let source = JsonBytesSource::new(r#"[{"id":"1","name":"Aachen"}]"#);

        assert_eq!(store.load_from(&source).unwrap(), 1);
        assert!(matches!(
            store.load_from(&source),
            Err(CatalogError::DuplicateLoad { .. })
        ));
    }
}
