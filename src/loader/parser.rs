//! YAML parser for query configurations
//!
//! Parses and validates query YAML files:
//!
//! ```yaml
//! path: users
//! field: name.first
//! limit: 30
//! reverse: false   # optional
//! prepend: false   # optional
//! ```

use crate::error::{Error, Result};
use crate::query::{QueryConfig, QueryOverrides};
use std::fs;
use std::path::Path;

/// Load a query configuration from a YAML file
pub fn load_query_config(path: impl AsRef<Path>) -> Result<QueryConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!("Query file '{}' not found", path.display()))
        } else {
            Error::config(format!(
                "Failed to read query file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_query_config_from_str(&content)
}

/// Load a query configuration from a YAML string
pub fn load_query_config_from_str(yaml: &str) -> Result<QueryConfig> {
    let config: QueryConfig = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse query YAML: {e}")))?;

    config.validate()?;
    Ok(config)
}

/// Load reset overrides from a YAML string.
///
/// Overrides are validated when applied, not here.
pub fn load_query_overrides_from_str(yaml: &str) -> Result<QueryOverrides> {
    if yaml.trim().is_empty() {
        return Ok(QueryOverrides::default());
    }
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse query overrides YAML: {e}")))
}
