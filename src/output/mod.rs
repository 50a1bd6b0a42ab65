//! Output formatting for CLI display
//!
//! This module turns a [`VisibleView`] into terminal lines: a header, one
//! line per row with its favorite star, and the page label for the home view.

use crate::browser::{Row, VisibleView};
use crate::catalog::Record;
use crate::view::{ActiveView, HexColor};
use colored::Colorize;

const STAR_SELECTED: &str = "★";
const STAR_UNSELECTED: &str = "☆";

/// Favorite toggle glyph painted in the configured colour
#[must_use]
pub fn star(is_favorite: bool, color: HexColor) -> String {
    let glyph = if is_favorite { STAR_SELECTED } else { STAR_UNSELECTED };
    glyph.truecolor(color.r, color.g, color.b).to_string()
}

/// Format a mass in grams, empty when unknown
#[must_use]
pub fn format_mass(mass: Option<f64>) -> String {
    mass.map_or_else(String::new, |grams| format!("{grams} g"))
}

/// Format one record's columns
///
/// In quiet mode only the id and name are printed, tab separated, so the
/// output can be piped.
#[must_use]
pub fn record_line(record: &Record, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", record.id, record.name);
    }

    let mut columns = vec![
        format!("{} ({})", record.name.bold(), record.id),
        record.recclass.clone(),
        format_mass(record.mass),
    ];
    if let Some(fall) = &record.fall {
        columns.push(fall.to_string());
    }
    if let Some(year) = record.year_number() {
        columns.push(year.to_string());
    }
    if let Some(geo) = &record.geolocation {
        columns.push(geo.to_string());
    }

    columns.retain(|column| !column.is_empty());
    columns.join("  ")
}

/// Format a row with its favorite star
#[must_use]
pub fn row_line(row: &Row<'_>, color: HexColor, quiet: bool) -> String {
    if quiet {
        record_line(row.record, true)
    } else {
        format!("  {} {}", star(row.is_favorite, color), record_line(row.record, false))
    }
}

/// Heading printed above the rows
#[must_use]
pub fn view_header(view: &VisibleView<'_>) -> String {
    match (view.active, view.query) {
        (ActiveView::Search, Some(query)) => {
            format!("Search \"{}\" ({} match(es))", query, view.rows.len())
                .cyan()
                .to_string()
        }
        (ActiveView::Favorites, _) => format!("Favorites ({})", view.rows.len()).cyan().to_string(),
        _ => "Catalog".cyan().to_string(),
    }
}

/// Line shown when a view has no rows
#[must_use]
pub const fn empty_message(active: ActiveView) -> &'static str {
    match active {
        ActiveView::Home => "Catalog is empty.",
        ActiveView::Search => "No records match the query.",
        ActiveView::Favorites => "No favorites yet.",
    }
}

/// Render a whole view as lines, header and page label included
pub fn view_lines<F>(view: &VisibleView<'_>, color_for: F, quiet: bool) -> Vec<String>
where
    F: Fn(bool) -> HexColor,
{
    let mut lines = Vec::with_capacity(view.rows.len() + 2);

    if !quiet {
        lines.push(view_header(view));
        if view.is_empty() {
            lines.push(format!("  {}", empty_message(view.active)));
        }
    }

    lines.extend(
        view.rows
            .iter()
            .map(|row| row_line(row, color_for(row.is_favorite), quiet)),
    );

    if !quiet && let Some(info) = &view.pagination {
        let range = if info.total == 0 {
            String::new()
        } else {
            format!(" ({}-{} of {})", info.first_item(), info.last_item(), info.total)
        };
        lines.push(format!("{}{}", info.label(), range).dimmed().to_string());
    }

    lines
}
