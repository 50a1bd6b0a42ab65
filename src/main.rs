//! Metcat CLI application entry point
//!
//! This is the main executable for the metcat meteorite catalog browser. It
//! loads the catalog from a JSON dataset, restores favorites from the
//! embedded store, and prints the requested view.
//!
//! # Usage
//!
//! ```bash
//! # First page of the catalog (default command)
//! metcat --data meteorites.json
//! metcat --data meteorites.json list --page 2 --page-size 25
//!
//! # Records whose name or id contains a query
//! metcat search aachen
//!
//! # Toggle favorites, then show them
//! metcat star 1 26
//! metcat favorites
//!
//! # Line-driven session (text searches, :fav, :star ID, :next, :quit)
//! metcat shell
//!
//! # Favorites for this session only
//! metcat --ephemeral shell
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/metcat/config.toml` on Linux) and `METCAT_*` environment
//! variables. `metcat config init` writes a file with the defaults.

use metcat::{
    browser::CatalogBrowser,
    catalog::JsonFileSource,
    cli::{Cli, Commands},
    commands,
    config::MetcatConfig,
    logging::{self, Verbosity},
    storage::{KeyValueStore, MemoryStore, SledStore},
    MetcatError,
};
use std::io::{self, Write};
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, MetcatError>;

type Browser = CatalogBrowser<Box<dyn KeyValueStore>>;

/// Open the favorites store selected by flags and configuration
///
/// # Errors
/// Returns `MetcatError` if the data directory cannot be determined or the
/// sled database cannot be opened.
fn open_store(cli: &Cli, config: &MetcatConfig) -> Result<Box<dyn KeyValueStore>> {
    if cli.ephemeral {
        debug!("using in-memory favorites store");
        return Ok(Box::new(MemoryStore::new()));
    }

    let path = match &cli.db {
        Some(path) => path.clone(),
        None => config.resolved_storage_path()?,
    };
    debug!(path = %path.display(), "opening favorites store");
    Ok(Box::new(SledStore::open(path)?))
}

/// Populate the catalog, degrading to an empty catalog on fetch failure
fn load_catalog(browser: &mut Browser, cli: &Cli, config: &MetcatConfig, quiet: bool) {
    let Some(path) = cli.data.as_ref().or(config.dataset_path.as_ref()) else {
        if !quiet {
            eprintln!("No dataset configured. Use --data <FILE> or set dataset_path in the config file.");
        }
        return;
    };

    if let Err(e) = browser.load_catalog_from(&JsonFileSource::new(path)) {
        if !quiet {
            eprintln!("❌ {e}");
        }
        warn!("continuing with an empty catalog");
    }
}

fn run_browser_command(browser: &mut Browser, command: &Commands, quiet: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::List { page, page_size } => {
            commands::list(browser, *page, *page_size, &mut out, quiet)?;
        }
        Commands::Search { query } => {
            commands::search(browser, query, &mut out, quiet)?;
        }
        Commands::Favorites => {
            commands::favorites(browser, &mut out, quiet)?;
        }
        Commands::Star { ids } => {
            commands::star(browser, ids, &mut out, quiet)?;
        }
        Commands::Shell => {
            commands::shell(browser, io::stdin().lock(), &mut out, quiet)?;
        }
        Commands::Config { .. } => unreachable!(),
    }

    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let config = MetcatConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        let path = MetcatConfig::config_path()?;
        return commands::config(&config, command, &path, &mut io::stdout().lock(), quiet);
    }

    let store = open_store(&cli, &config)?;
    let mut browser = CatalogBrowser::with_favorites_key(store, config.favorites_key.clone(), config.view.clone());
    browser.load_favorites();

    // Starring by id works without a catalog
    let has_dataset = cli.data.is_some() || config.dataset_path.is_some();
    if has_dataset || !matches!(command, Commands::Star { .. }) {
        load_catalog(&mut browser, &cli, &config, quiet);
    }

    let result = run_browser_command(&mut browser, &command, quiet);

    if let Err(e) = browser.favorites().store().flush() {
        warn!(error = %e, "failed to flush favorites store");
    }

    result
}
