//! Dataset view controller
//!
//! [`CatalogBrowser`] wires the catalog store, the favorites repository and
//! the view selector together. Each public method is one external event
//! (catalog loaded, text changed, page changed, favorite toggled); each runs
//! to completion and leaves the three components consistent.
//!
//! [`CatalogBrowser::visible`] recomputes the active view from scratch. Rows
//! read their favorite flag from the repository at that moment; nothing
//! caches favorite status between renders.
//!
//! # Examples
//!
//! ```
//! use metcat::browser::CatalogBrowser;
//! use metcat::catalog::{Record, RecordId};
//! use metcat::storage::MemoryStore;
//! use metcat::view::{ActiveView, ViewConfig};
//!
//! let mut browser = CatalogBrowser::new(MemoryStore::new(), ViewConfig::default());
//! browser.load_favorites();
//! browser
//!     .load_catalog(vec![Record::new("1", "Aachen"), Record::new("2", "Aarhus")])
//!     .unwrap();
//!
//! browser.toggle_favorite(&RecordId::from("2"));
//! browser.toggle_favorites_view();
//!
//! let view = browser.visible();
//! assert_eq!(view.active, ActiveView::Favorites);
//! assert_eq!(view.rows.len(), 1);
//! assert!(view.rows[0].is_favorite);
//! ```

use crate::catalog::{CatalogError, CatalogSource, CatalogStore, Record, RecordId};
use crate::favorites::{FavoritesRepository, LoadOutcome, DEFAULT_FAVORITES_KEY};
use crate::pagination::{self, PageInfo};
use crate::query::{self, Query};
use crate::storage::KeyValueStore;
use crate::view::{ActiveView, HexColor, ViewConfig, ViewError, ViewSelector, ViewState};
use std::num::NonZeroUsize;
use tracing::debug;

/// One rendered row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    pub record: &'a Record,
    pub is_favorite: bool,
}

/// Everything the rendering side needs for the current view
#[derive(Debug, Clone)]
pub struct VisibleView<'a> {
    pub active: ActiveView,
    /// Present only in the search view
    pub query: Option<&'a Query>,
    pub rows: Vec<Row<'a>>,
    /// Present only in the home view
    pub pagination: Option<PageInfo>,
}

impl VisibleView<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ids of the visible rows, in display order
    #[must_use]
    pub fn ids(&self) -> Vec<&RecordId> {
        self.rows.iter().map(|row| &row.record.id).collect()
    }
}

/// Controller over catalog, favorites and view state
pub struct CatalogBrowser<S: KeyValueStore> {
    catalog: CatalogStore,
    favorites: FavoritesRepository<S>,
    selector: ViewSelector,
}

impl<S: KeyValueStore> CatalogBrowser<S> {
    /// Create a browser storing favorites under the default key
    pub fn new(store: S, config: ViewConfig) -> Self {
        Self::with_favorites_key(store, DEFAULT_FAVORITES_KEY, config)
    }

    pub fn with_favorites_key(store: S, key: impl Into<String>, config: ViewConfig) -> Self {
        Self {
            catalog: CatalogStore::new(),
            favorites: FavoritesRepository::with_key(store, key),
            selector: ViewSelector::new(config),
        }
    }

    /// Hydrate favorites from storage
    pub fn load_favorites(&mut self) -> LoadOutcome {
        self.favorites.load()
    }

    /// Populate the catalog and enter `home` at page 0
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateLoad` if the catalog was already
    /// loaded; view state is left untouched in that case.
    pub fn load_catalog(&mut self, records: Vec<Record>) -> Result<usize, CatalogError> {
        let count = self.catalog.load(records)?;
        self.selector.reset();
        Ok(count)
    }

    /// Fetch from `source`, then behave like [`Self::load_catalog`]
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Fetch` if the source fails. The catalog stays
    /// empty and the browser remains usable.
    pub fn load_catalog_from(&mut self, source: &dyn CatalogSource) -> Result<usize, CatalogError> {
        let count = self.catalog.load_from(source)?;
        self.selector.reset();
        Ok(count)
    }

    /// Search text changed
    pub fn set_query(&mut self, text: &str) -> ActiveView {
        self.selector.set_query(text)
    }

    /// The favorites view toggle was pressed
    pub fn toggle_favorites_view(&mut self) -> ActiveView {
        self.selector.toggle_favorites()
    }

    /// Home view page changed
    pub fn set_page(&mut self, page: usize) -> usize {
        self.selector.set_page(page, self.catalog.len())
    }

    pub fn next_page(&mut self) -> usize {
        self.selector.next_page(self.catalog.len())
    }

    pub fn previous_page(&mut self) -> usize {
        self.selector.previous_page(self.catalog.len())
    }

    /// Rows-per-page changed
    ///
    /// # Errors
    ///
    /// Returns `ViewError` if `size` is not an offered page size.
    pub fn set_page_size(&mut self, size: usize) -> Result<NonZeroUsize, ViewError> {
        self.selector.set_page_size(size)
    }

    /// A row's star was pressed; returns the new favorite status
    pub fn toggle_favorite(&mut self, id: &RecordId) -> bool {
        if !self.catalog.contains(id) {
            debug!(%id, "toggling favorite for id outside the catalog");
        }
        self.favorites.toggle(id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &RecordId) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Colour for a row's favorite toggle
    #[must_use]
    pub const fn star_color(&self, is_favorite: bool) -> HexColor {
        self.selector.config().colors.for_state(is_favorite)
    }

    /// Derive the current view
    #[must_use]
    pub fn visible(&self) -> VisibleView<'_> {
        let all = self.catalog.all();

        let (records, pagination): (Vec<&Record>, Option<PageInfo>) = match self.selector.state() {
            ViewState::Home => {
                let page = pagination::paginate(all, self.selector.page(), self.selector.page_size());
                (page.items.iter().collect(), Some(page.info))
            }
            ViewState::Search(search) => (query::filter(all, search), None),
            ViewState::Favorites => (self.favorites.favorites().select(all).collect(), None),
        };

        let rows = records
            .into_iter()
            .map(|record| Row {
                record,
                is_favorite: self.favorites.is_favorite(&record.id),
            })
            .collect();

        VisibleView {
            active: self.selector.active(),
            query: self.selector.query(),
            rows,
            pagination,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesRepository<S> {
        &self.favorites
    }

    #[must_use]
    pub const fn selector(&self) -> &ViewSelector {
        &self.selector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::testing::{numbered_records, record, records};

    fn browser_with(records: Vec<Record>) -> CatalogBrowser<MemoryStore> {
        let mut browser = CatalogBrowser::new(MemoryStore::new(), ViewConfig::default());
        browser.load_favorites();
        browser.load_catalog(records).unwrap();
        browser
    }

    fn ids(view: &VisibleView<'_>) -> Vec<String> {
        view.ids().into_iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_initial_view_is_first_home_page() {
        let browser = browser_with(numbered_records(20));
        let view = browser.visible();

        assert_eq!(view.active, ActiveView::Home);
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.rows[0].record.id.as_str(), "0");
        let info = view.pagination.unwrap();
        assert_eq!(info.page_index, 0);
        assert_eq!(info.page_count, 2);
    }

    #[test]
    fn test_second_load_is_rejected_and_view_kept() {
        let mut browser = browser_with(numbered_records(20));
        browser.set_page(1);

        assert!(browser.load_catalog(numbered_records(5)).is_err());
        assert_eq!(browser.selector().page(), 1);
        assert_eq!(browser.catalog().len(), 20);
    }

    #[test]
    fn test_search_is_unpaginated() {
        let browser_records: Vec<Record> = (0..30u64)
            .map(|i| record(&i.to_string(), "Aachen"))
            .collect();
        let mut browser = browser_with(browser_records);

        browser.set_query("aachen");
        let view = browser.visible();
        assert_eq!(view.active, ActiveView::Search);
        assert_eq!(view.rows.len(), 30);
        assert!(view.pagination.is_none());
        assert_eq!(view.query.unwrap().as_str(), "aachen");
    }

    #[test]
    fn test_clearing_query_restores_page() {
        let mut browser = browser_with(numbered_records(30));
        browser.set_page(2);

        browser.set_query("1");
        browser.set_query("");

        let view = browser.visible();
        assert_eq!(view.active, ActiveView::Home);
        assert_eq!(view.pagination.unwrap().page_index, 2);
        assert_eq!(view.rows[0].record.id.as_str(), "20");
    }

    #[test]
    fn test_favorites_view_in_catalog_order() {
        let mut browser = browser_with(records(&["A", "B", "C", "D"]));
        browser.toggle_favorite(&RecordId::from("D"));
        browser.toggle_favorite(&RecordId::from("B"));

        browser.toggle_favorites_view();
        let view = browser.visible();
        assert_eq!(ids(&view), vec!["B", "D"]);
        assert!(view.rows.iter().all(|row| row.is_favorite));
        assert!(view.pagination.is_none());
    }

    #[test]
    fn test_rows_reflect_toggle_immediately() {
        let mut browser = browser_with(records(&["A", "B", "C"]));

        assert!(!browser.visible().rows[1].is_favorite);
        browser.toggle_favorite(&RecordId::from("B"));
        assert!(browser.visible().rows[1].is_favorite);

        browser.set_query("b");
        let view = browser.visible();
        assert_eq!(ids(&view), vec!["B"]);
        assert!(view.rows[0].is_favorite);
    }

    #[test]
    fn test_unfavoriting_in_favorites_view_removes_row() {
        let mut browser = browser_with(records(&["A", "B", "C"]));
        let b = RecordId::from("B");

        browser.toggle_favorite(&b);
        browser.toggle_favorites_view();
        assert_eq!(ids(&browser.visible()), vec!["B"]);

        browser.toggle_favorite(&b);
        assert!(browser.visible().is_empty());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut browser = browser_with(numbered_records(100));
        browser.set_page(3);

        browser.set_page_size(25).unwrap();
        let info = browser.visible().pagination.unwrap();
        assert_eq!(info.page_index, 0);
        assert_eq!(info.page_count, 4);
    }

    #[test]
    fn test_empty_catalog_is_renderable() {
        let mut browser = browser_with(Vec::new());

        let home = browser.visible();
        assert!(home.is_empty());
        assert_eq!(home.pagination.unwrap().page_count, 1);

        browser.set_query("aachen");
        assert!(browser.visible().is_empty());

        browser.toggle_favorites_view();
        assert!(browser.visible().is_empty());
    }

    #[test]
    fn test_star_color_follows_configuration() {
        let browser = browser_with(Vec::new());
        assert_eq!(browser.star_color(true).to_string(), "#388415");
        assert_eq!(browser.star_color(false).to_string(), "#8DBD77");
    }

    #[test]
    fn test_favorites_loaded_before_catalog() {
        let store = MemoryStore::new();
        store.set(DEFAULT_FAVORITES_KEY, br#"["C"]"#).unwrap();

        let mut browser = CatalogBrowser::new(store, ViewConfig::default());
        assert!(browser.load_favorites().warning.is_none());
        browser.load_catalog(records(&["A", "B", "C"])).unwrap();

        browser.toggle_favorites_view();
        assert_eq!(ids(&browser.visible()), vec!["C"]);
    }
}
