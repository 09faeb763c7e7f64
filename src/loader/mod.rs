//! YAML Loader module
//!
//! Parse query configurations from YAML files.

mod parser;

pub use parser::{load_query_config, load_query_config_from_str, load_query_overrides_from_str};

#[cfg(test)]
mod tests;
