//! Free-text catalog search
//!
//! A record matches a query when the lowercased concatenation of its name and
//! its id contains the lowercased query. Matching is a plain substring test,
//! evaluated from scratch on every call, and results keep catalog order.
//!
//! ```
//! use metcat::catalog::Record;
//! use metcat::query::{Query, filter};
//!
//! let catalog = vec![Record::new("1", "Aachen"), Record::new("2", "Aarhus")];
//! let query = Query::new("AAR").unwrap();
//!
//! let hits = filter(&catalog, &query);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "Aarhus");
//!
//! assert!(Query::new("").is_none());
//! ```

use crate::catalog::Record;
use std::fmt;

/// A non-empty search query
///
/// An empty string means "no active filter" and cannot be turned into a
/// `Query`; callers route to the home view instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    needle: String,
}

impl Query {
    /// Returns `None` for the empty string
    #[must_use]
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            return None;
        }
        let needle = text.to_lowercase();
        Some(Self { text, needle })
    }

    /// The query as typed
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        matches(record, self)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Whether `record` satisfies `query`
#[must_use]
pub fn matches(record: &Record, query: &Query) -> bool {
    format!("{}{}", record.name, record.id)
        .to_lowercase()
        .contains(&query.needle)
}

/// Every record matching `query`, in catalog order
#[must_use]
pub fn filter<'a>(catalog: &'a [Record], query: &Query) -> Vec<&'a Record> {
    catalog.iter().filter(|record| matches(record, query)).collect()
}
