//! Shell command - line-driven browsing session
//!
//! Every input line is one event for the browser. Plain text replaces the
//! search query and an empty line clears it; lines starting with `:` are
//! commands. The view is printed again after every event.

use crate::{
    browser::CatalogBrowser,
    catalog::RecordId,
    output,
    storage::KeyValueStore,
    MetcatError,
};
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, MetcatError>;

const PROMPT: &str = "metcat> ";

const HELP: &str = "\
Type text to search by name or id, or an empty line to clear the search.
  :fav        toggle the favorites view
  :star ID    toggle favorite status of a record
  :page N     go to page N of the catalog
  :next       next page
  :prev       previous page
  :size N     rows per page
  :help       show this help
  :quit       leave the shell";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Replace the search query; empty clears it
    Query(String),
    ToggleFavorites,
    Star(String),
    /// 1-based page number
    Page(usize),
    Next,
    Prev,
    Size(usize),
    Help,
    Quit,
}

/// Parse one input line
///
/// # Errors
///
/// Returns a message describing the problem for unknown commands and
/// missing or malformed arguments.
pub fn parse_line(line: &str) -> std::result::Result<ShellCommand, String> {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some(command) = line.trim_start().strip_prefix(':') else {
        return Ok(ShellCommand::Query(line.to_string()));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    let number = |arg: Option<&str>| -> std::result::Result<usize, String> {
        let raw = arg.ok_or_else(|| format!(":{name} needs a number"))?;
        raw.parse()
            .map_err(|_| format!(":{name} expects a number, got '{raw}'"))
    };

    match name {
        "fav" | "favorites" | "f" => Ok(ShellCommand::ToggleFavorites),
        "star" | "s" => arg
            .map(|id| ShellCommand::Star(id.to_string()))
            .ok_or_else(|| ":star needs a record id".to_string()),
        "page" | "p" => number(arg).map(ShellCommand::Page),
        "next" | "n" => Ok(ShellCommand::Next),
        "prev" | "previous" => Ok(ShellCommand::Prev),
        "size" => number(arg).map(ShellCommand::Size),
        "help" | "h" | "?" => Ok(ShellCommand::Help),
        "quit" | "q" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("Unknown command ':{other}' (try :help)")),
    }
}

/// Execute the shell command until `:quit` or end of input
///
/// # Errors
///
/// Returns `MetcatError::IoError` if reading input or writing output fails.
/// Bad commands and rejected page sizes are reported and the session goes on.
pub fn execute<S, R, W>(
    browser: &mut CatalogBrowser<S>,
    mut input: R,
    out: &mut W,
    quiet: bool,
) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    if !quiet {
        writeln!(out, "{HELP}")?;
    }
    super::render(browser, out, quiet)?;

    let mut line = String::new();
    loop {
        if !quiet {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "❌ {message}")?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            ShellCommand::Query(text) => {
                browser.set_query(&text);
            }
            ShellCommand::ToggleFavorites => {
                browser.toggle_favorites_view();
            }
            ShellCommand::Star(raw) => {
                let id = RecordId::from(raw);
                let is_favorite = browser.toggle_favorite(&id);
                if !quiet {
                    let star = output::star(is_favorite, browser.star_color(is_favorite));
                    writeln!(out, "{star} {id}")?;
                }
                if let Some(failure) = browser.favorites().last_write_error() {
                    writeln!(out, "❌ {failure}")?;
                }
            }
            ShellCommand::Page(page) => {
                browser.set_page(page.saturating_sub(1));
            }
            ShellCommand::Next => {
                browser.next_page();
            }
            ShellCommand::Prev => {
                browser.previous_page();
            }
            ShellCommand::Size(size) => {
                if let Err(e) = browser.set_page_size(size) {
                    writeln!(out, "❌ {e}")?;
                    continue;
                }
            }
        }

        super::render(browser, out, quiet)?;
    }

    Ok(())
}
