//! View state machine types
//!
//! ```text
//!            query non-empty                 favorites toggle
//!   ┌──────┐ ───────────────▶ ┌────────┐ ──────────────────▶ ┌───────────┐
//!   │ home │                  │ search │                     │ favorites │
//!   └──────┘ ◀─────────────── └────────┘                     └───────────┘
//!      ▲  │     query empty                                     │  ▲
//!      │  └────────────────── favorites toggle ─────────────────┘  │
//!      └─────────────────────────── favorites toggle ──────────────┘
//! ```
//!
//! A non-empty query from any state enters `search`; an empty query from any
//! state returns to `home`.

use crate::query::Query;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three views is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    Home,
    Search,
    Favorites,
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("home"),
            Self::Search => f.write_str("search"),
            Self::Favorites => f.write_str("favorites"),
        }
    }
}

/// Current view, carrying the data only that view needs
///
/// `Search` always holds a non-empty [`Query`], so "searching with an empty
/// query" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Search(Query),
    Favorites,
}

impl ViewState {
    #[must_use]
    pub const fn active(&self) -> ActiveView {
        match self {
            Self::Home => ActiveView::Home,
            Self::Search(_) => ActiveView::Search,
            Self::Favorites => ActiveView::Favorites,
        }
    }

    #[must_use]
    pub const fn query(&self) -> Option<&Query> {
        match self {
            Self::Search(query) => Some(query),
            Self::Home | Self::Favorites => None,
        }
    }
}
