//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cursor-based pagination over an ordered document collection
#[derive(Parser, Debug)]
#[command(name = "scroll-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Seed an in-memory collection and page through it
    Browse {
        #[command(flatten)]
        query: QueryArgs,

        /// Number of users to seed
        #[arg(long, default_value = "100")]
        count: usize,

        /// Fetch users from a randomuser.me compatible API instead of generating them
        #[arg(long)]
        remote: bool,

        /// Base URL of the random user API
        #[arg(long, default_value = "https://randomuser.me")]
        base_url: String,

        /// Maximum number of bottom-of-scroll events to simulate after the first page
        #[arg(long, default_value = "10")]
        pages: usize,
    },

    /// Validate a query file and print the normalized configuration
    CheckConfig {
        /// Query definition file (YAML)
        file: PathBuf,
    },
}

/// Query selection; flags override values from `--query`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Query definition file (YAML)
    #[arg(short, long)]
    pub query: Option<PathBuf>,

    /// Collection path
    #[arg(long)]
    pub path: Option<String>,

    /// Field to order by (dotted paths allowed)
    #[arg(long)]
    pub field: Option<String>,

    /// Records per page
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Order descending
    #[arg(long)]
    pub reverse: bool,

    /// Splice new pages in front of the accumulated records
    #[arg(long)]
    pub prepend: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one page per line)
    Json,
    /// Human-readable output
    Pretty,
}
