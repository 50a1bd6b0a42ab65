//! Favorites command - show favorited records

use crate::{
    browser::CatalogBrowser,
    storage::KeyValueStore,
    view::ActiveView,
    MetcatError,
};
use std::io::Write;

type Result<T> = std::result::Result<T, MetcatError>;

/// Execute the favorites command
///
/// # Errors
///
/// Returns `MetcatError::IoError` if writing fails.
pub fn execute<S: KeyValueStore, W: Write>(
    browser: &mut CatalogBrowser<S>,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    if browser.selector().active() != ActiveView::Favorites {
        browser.toggle_favorites_view();
    }
    super::render(browser, out, quiet)?;
    Ok(())
}
