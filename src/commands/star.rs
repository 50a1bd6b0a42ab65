//! Star command - toggle favorite status of records

use crate::{
    browser::CatalogBrowser,
    catalog::RecordId,
    output,
    storage::KeyValueStore,
    MetcatError,
};
use std::io::Write;

type Result<T> = std::result::Result<T, MetcatError>;

/// Execute the star command
///
/// Each id is toggled independently, so passing the same id twice leaves it
/// unchanged. Ids missing from the loaded catalog are still toggled.
///
/// # Errors
///
/// Returns `MetcatError::InvalidInput` for an empty id, or
/// `MetcatError::IoError` if writing fails. A failed favorites write is
/// reported on the output, not as an error.
pub fn execute<S: KeyValueStore, W: Write>(
    browser: &mut CatalogBrowser<S>,
    ids: &[String],
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    if let Some(blank) = ids.iter().find(|id| id.trim().is_empty()) {
        return Err(MetcatError::InvalidInput(format!("Record id cannot be empty: {blank:?}")));
    }

    for raw in ids {
        let id = RecordId::from(raw.trim());
        let is_favorite = browser.toggle_favorite(&id);

        if quiet {
            continue;
        }

        let star = output::star(is_favorite, browser.star_color(is_favorite));
        let action = if is_favorite { "Starred" } else { "Unstarred" };
        match browser.catalog().get(&id) {
            Some(record) => writeln!(out, "{star} {action} {} ({id})", record.name)?,
            None if browser.catalog().is_loaded() => {
                writeln!(out, "{star} {action} {id} (not in the loaded catalog)")?;
            }
            None => writeln!(out, "{star} {action} {id}")?,
        }
    }

    if let Some(failure) = browser.favorites().last_write_error() {
        writeln!(out, "❌ {failure}")?;
    }

    Ok(())
}
