//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args, drives the catalog browser, and writes the resulting view.

pub mod config;
pub mod favorites;
pub mod list;
pub mod search;
pub mod shell;
pub mod star;

// Re-export execute functions for convenience
pub use self::config::execute as config;
pub use favorites::execute as favorites;
pub use list::execute as list;
pub use search::execute as search;
pub use shell::execute as shell;
pub use star::execute as star;

use crate::browser::CatalogBrowser;
use crate::output;
use crate::storage::KeyValueStore;
use std::io::{self, Write};

/// Write the browser's current view to `out`
///
/// # Errors
///
/// Returns `io::Error` if writing fails.
pub fn render<S: KeyValueStore, W: Write>(
    browser: &CatalogBrowser<S>,
    out: &mut W,
    quiet: bool,
) -> io::Result<()> {
    let view = browser.visible();
    for line in output::view_lines(&view, |is_favorite| browser.star_color(is_favorite), quiet) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
