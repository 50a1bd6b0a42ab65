//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for metcat using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: Home view, one page of the catalog (default)
//! - **search**: Records whose name or id contains a query
//! - **favorites**: Favorited records in catalog order
//! - **star**: Toggle favorite status of records
//! - **shell**: Line-driven session over a single loaded catalog
//! - **config**: Show or initialize the configuration file
//!
//! # Examples
//!
//! ```
//! use metcat::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["metcat", "search", "aachen"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "metcat")]
#[command(about = "Browse the meteorite landings catalog and keep favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON dataset to load the catalog from (overrides config)
    #[arg(long = "data", value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Favorites database directory (overrides config)
    #[arg(long = "db", value_name = "DIR", global = true, conflicts_with = "ephemeral")]
    pub db: Option<PathBuf>,

    /// Keep favorites in memory only for this session
    #[arg(long = "ephemeral", global = true)]
    pub ephemeral: bool,

    /// Log debug events to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show one page of the catalog (default)
    #[command(visible_alias = "l")]
    List {
        /// Page number, starting at 1
        #[arg(short = 'p', long = "page", value_name = "N", default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(short = 's', long = "page-size", value_name = "N")]
        page_size: Option<usize>,
    },

    /// Show records whose name or id contains QUERY
    #[command(visible_alias = "s")]
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Show favorited records
    #[command(visible_alias = "f")]
    Favorites,

    /// Toggle favorite status of one or more records
    Star {
        #[arg(value_name = "ID", required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Interactive line-driven session
    Shell,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to the first catalog page
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            page: 1,
            page_size: None,
        })
    }
}
