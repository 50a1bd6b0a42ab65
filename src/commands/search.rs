//! Search command - show records matching a query

use crate::{
    browser::CatalogBrowser,
    storage::KeyValueStore,
    MetcatError,
};
use std::io::Write;

type Result<T> = std::result::Result<T, MetcatError>;

/// Execute the search command
///
/// An empty query shows the home view.
///
/// # Errors
///
/// Returns `MetcatError::IoError` if writing fails.
pub fn execute<S: KeyValueStore, W: Write>(
    browser: &mut CatalogBrowser<S>,
    query: &str,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    browser.set_query(query);
    super::render(browser, out, quiet)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Record;
    use crate::storage::MemoryStore;
    use crate::testing::record;
    use crate::view::ViewConfig;

    fn catalog() -> Vec<Record> {
        vec![
            record("1", "Aachen"),
            record("2", "Aarhus"),
            record("6", "Abee"),
            record("10", "Acapulco"),
        ]
    }

    fn run(query: &str) -> Vec<String> {
        let mut browser = CatalogBrowser::new(MemoryStore::new(), ViewConfig::default());
        browser.load_catalog(catalog()).unwrap();
        let mut out = Vec::new();
        execute(&mut browser, query, &mut out, true).unwrap();
        String::from_utf8(out).unwrap().lines().map(String::from).collect()
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        assert_eq!(run("AA"), vec!["1\tAachen", "2\tAarhus"]);
    }

    #[test]
    fn test_search_by_id() {
        assert_eq!(run("10"), vec!["10\tAcapulco"]);
    }

    #[test]
    fn test_search_without_matches() {
        assert!(run("zzz").is_empty());
    }

    #[test]
    fn test_empty_search_shows_home() {
        assert_eq!(run("").len(), 4);
    }
}
