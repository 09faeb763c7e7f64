//! CLI module
//!
//! Command-line interface for browsing collections page by page.
//!
//! # Commands
//!
//! - `browse` - Seed an in-memory collection and page through it
//! - `check-config` - Validate a query file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, QueryArgs};
pub use runner::Runner;
