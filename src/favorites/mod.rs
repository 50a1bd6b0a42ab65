//! Favorites repository
//!
//! Owns the set of favorited record ids and keeps it in sync with durable
//! storage. The set is hydrated once at startup and overwritten in full after
//! every toggle.
//!
//! The in-memory effect of [`FavoritesRepository::toggle`] is immediate. The
//! write that follows never reports back to the caller: a failure is logged,
//! kept in [`FavoritesRepository::last_write_error`], and repaired by the next
//! successful write.
//!
//! # Examples
//!
//! ```
//! use metcat::catalog::RecordId;
//! use metcat::favorites::FavoritesRepository;
//! use metcat::storage::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let mut favorites = FavoritesRepository::new(store.clone());
//! favorites.load();
//!
//! let id = RecordId::from("26");
//! assert!(favorites.toggle(&id));
//! assert!(favorites.is_favorite(&id));
//! assert_eq!(store.get("@favorites").unwrap(), Some(br#"["26"]"#.to_vec()));
//! ```

pub mod codec;
pub mod error;

pub use error::{CorruptedStateWarning, PersistenceWriteFailure};

use crate::catalog::{Record, RecordId};
use crate::storage::KeyValueStore;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Storage key the favorites blob lives under unless configured otherwise
pub const DEFAULT_FAVORITES_KEY: &str = "@favorites";

/// Set of favorited record ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: BTreeSet<RecordId>,
}

impl FavoriteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Catalog records that are favorites, in catalog order
    pub fn select<'a>(&'a self, catalog: &'a [Record]) -> impl Iterator<Item = &'a Record> + 'a {
        catalog.iter().filter(move |record| self.contains(&record.id))
    }

    fn insert(&mut self, id: RecordId) -> bool {
        self.ids.insert(id)
    }

    fn remove(&mut self, id: &RecordId) -> bool {
        self.ids.remove(id)
    }
}

impl FromIterator<RecordId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Result of hydrating the repository from storage
#[derive(Debug)]
pub struct LoadOutcome {
    pub favorites: FavoriteSet,
    /// Set when the stored payload had to be discarded
    pub warning: Option<CorruptedStateWarning>,
}

/// Favorites backed by a [`KeyValueStore`]
pub struct FavoritesRepository<S: KeyValueStore> {
    store: S,
    key: String,
    favorites: FavoriteSet,
    last_write_error: Option<PersistenceWriteFailure>,
}

impl<S: KeyValueStore> FavoritesRepository<S> {
    /// Create a repository using [`DEFAULT_FAVORITES_KEY`]
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_FAVORITES_KEY)
    }

    /// Create a repository storing its blob under `key`
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            favorites: FavoriteSet::new(),
            last_write_error: None,
        }
    }

    /// Hydrate the set from storage
    ///
    /// Missing state yields an empty set. Unreadable state also yields an
    /// empty set, with a warning attached to the outcome.
    pub fn load(&mut self) -> LoadOutcome {
        let (favorites, warning) = match self.store.get(&self.key) {
            Ok(None) => {
                debug!(key = %self.key, "no stored favorites");
                (FavoriteSet::new(), None)
            }
            Ok(Some(blob)) => match codec::decode(&blob) {
                Ok(ids) => (FavoriteSet { ids }, None),
                Err(reason) => (
                    FavoriteSet::new(),
                    Some(CorruptedStateWarning::Malformed {
                        key: self.key.clone(),
                        reason,
                    }),
                ),
            },
            Err(source) => (
                FavoriteSet::new(),
                Some(CorruptedStateWarning::Unreadable {
                    key: self.key.clone(),
                    source,
                }),
            ),
        };

        if let Some(warning) = &warning {
            warn!("{warning}; starting with no favorites");
        } else {
            info!(count = favorites.len(), "favorites loaded");
        }

        self.favorites = favorites.clone();
        LoadOutcome { favorites, warning }
    }

    #[must_use]
    pub fn is_favorite(&self, id: &RecordId) -> bool {
        self.favorites.contains(id)
    }

    /// Flip membership of `id` and persist the whole set
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        let now_favorite = if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.clone())
        };

        debug!(%id, now_favorite, "favorite toggled");
        self.persist();
        now_favorite
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The most recent write failure, cleared by the next successful write
    #[must_use]
    pub const fn last_write_error(&self) -> Option<&PersistenceWriteFailure> {
        self.last_write_error.as_ref()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let blob = codec::encode(&self.favorites.ids);

        match self.store.set(&self.key, &blob) {
            Ok(()) => {
                self.last_write_error = None;
            }
            Err(source) => {
                let failure = PersistenceWriteFailure {
                    key: self.key.clone(),
                    count: self.favorites.len(),
                    source,
                };
                warn!("{failure}; keeping in-memory favorites");
                self.last_write_error = Some(failure);
            }
        }
    }
}
