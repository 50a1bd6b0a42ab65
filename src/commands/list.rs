//! List command - show one page of the catalog

use crate::{
    browser::CatalogBrowser,
    storage::KeyValueStore,
    MetcatError,
};
use std::io::Write;

type Result<T> = std::result::Result<T, MetcatError>;

/// Execute the list command
///
/// `page` is 1-based; pages past the end show the last page.
///
/// # Errors
///
/// Returns `MetcatError::ViewError` if `page_size` is not an offered size,
/// or `MetcatError::IoError` if writing fails.
pub fn execute<S: KeyValueStore, W: Write>(
    browser: &mut CatalogBrowser<S>,
    page: usize,
    page_size: Option<usize>,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    if let Some(size) = page_size {
        browser.set_page_size(size)?;
    }
    browser.set_page(page.saturating_sub(1));

    super::render(browser, out, quiet)?;
    Ok(())
}
