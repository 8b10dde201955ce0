//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browser shell core with word-based page filtering
#[derive(Parser)]
#[command(
    name = "website-filter",
    version,
    about = "Browser shell core with word-based page filtering",
    long_about = "Resolves address bar input into URLs or search queries, \
                  blocks navigations whose URL contains a filter word, \
                  and remembers the last opened page."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the URL address bar input resolves to
    Resolve {
        /// Address bar text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,
    },
    /// Resolve input and navigate to it unless a filter blocks it (alias: go)
    #[command(alias = "go")]
    Visit {
        /// Address bar text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        input: Vec<String>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or edit filter words
    Filters {
        #[command(subcommand)]
        action: FilterAction,
    },
    /// Print the last opened page if it may be reopened
    Resume,
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}

/// Filter list editing actions
#[derive(Subcommand)]
pub enum FilterAction {
    /// List filter phrases with their row numbers (alias: ls)
    #[command(alias = "ls")]
    List,
    /// Add a filter phrase; every word in it is blocked
    Add {
        /// Phrase to add (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,
    },
    /// Remove the phrase at a row number (alias: rm)
    #[command(alias = "rm")]
    Remove {
        /// Row number as shown by `filters list`
        row: usize,
    },
}
