//! View selector
//!
//! Tracks which view is active and the home view's pagination position. The
//! selector holds no records; it is pure state, and the browser derives the
//! visible list from it.
//!
//! The home page survives trips through `search` and `favorites`, so
//! clearing a query returns to the page that was showing before.

pub mod config;
pub mod error;
pub mod state;

pub use self::config::{FavoriteColors, HexColor, ViewConfig};
pub use error::ViewError;
pub use state::{ActiveView, ViewState};

use crate::pagination;
use crate::query::Query;
use std::num::NonZeroUsize;
use tracing::debug;

/// Home/search/favorites state machine
#[derive(Debug, Clone)]
pub struct ViewSelector {
    state: ViewState,
    page: usize,
    page_size: NonZeroUsize,
    config: ViewConfig,
}

impl ViewSelector {
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            state: ViewState::Home,
            page: 0,
            page_size: config.page_size,
            config,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub const fn active(&self) -> ActiveView {
        self.state.active()
    }

    #[must_use]
    pub const fn query(&self) -> Option<&Query> {
        self.state.query()
    }

    /// Home view page index
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    #[must_use]
    pub const fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Enter `home` at page 0; used when the catalog finishes loading
    pub fn reset(&mut self) {
        self.state = ViewState::Home;
        self.page = 0;
    }

    /// React to the search text changing
    ///
    /// Non-empty text enters `search` from any view. Empty text returns to
    /// `home` at the page that was showing before.
    pub fn set_query(&mut self, text: &str) -> ActiveView {
        self.state = match Query::new(text) {
            Some(query) => ViewState::Search(query),
            None => ViewState::Home,
        };
        debug!(view = %self.active(), page = self.page, "query changed");
        self.active()
    }

    /// Flip between `home` and `favorites`
    ///
    /// From `search` this goes to `favorites` and discards the query.
    pub fn toggle_favorites(&mut self) -> ActiveView {
        self.state = match self.state {
            ViewState::Favorites => ViewState::Home,
            ViewState::Home | ViewState::Search(_) => ViewState::Favorites,
        };
        debug!(view = %self.active(), "favorites view toggled");
        self.active()
    }

    /// Move the home view to `page`, clamped to the last valid page
    pub fn set_page(&mut self, page: usize, catalog_len: usize) -> usize {
        self.page = pagination::clamp_page(page, catalog_len, self.page_size);
        debug!(page = self.page, "page changed");
        self.page
    }

    pub fn next_page(&mut self, catalog_len: usize) -> usize {
        self.set_page(self.page.saturating_add(1), catalog_len)
    }

    pub fn previous_page(&mut self, catalog_len: usize) -> usize {
        self.set_page(self.page.saturating_sub(1), catalog_len)
    }

    /// Change the page size; always returns to page 0
    ///
    /// # Errors
    ///
    /// Returns `ViewError` if `size` is zero or not an offered size. The
    /// current page and size are kept in that case.
    pub fn set_page_size(&mut self, size: usize) -> Result<NonZeroUsize, ViewError> {
        let size = self.config.validate_page_size(size)?;
        self.page_size = size;
        self.page = 0;
        debug!(page_size = size.get(), "page size changed");
        Ok(size)
    }
}

impl Default for ViewSelector {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}
