//! Tests for YAML loader module

use super::*;
use crate::query::{QueryConfig, QueryOverrides};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// QueryConfig Loading Tests
// ============================================================================

#[test]
fn test_load_minimal_query() {
    let yaml = r"
path: users
field: name
limit: 30
";

    let config = load_query_config_from_str(yaml).unwrap();
    assert_eq!(config, QueryConfig::new("users", "name", 30));
}

#[test]
fn test_load_full_query() {
    let yaml = r"
path: messages
field: sent_at
limit: 50
reverse: true
prepend: true
";

    let config = load_query_config_from_str(yaml).unwrap();
    assert_eq!(
        config,
        QueryConfig::new("messages", "sent_at", 50)
            .reverse(true)
            .prepend(true)
    );
}

#[test]
fn test_load_query_rejects_zero_limit() {
    let err = load_query_config_from_str("path: users\nfield: name\nlimit: 0\n").unwrap_err();
    assert!(err.to_string().contains("limit"));
}

#[test]
fn test_load_query_rejects_negative_limit() {
    let err = load_query_config_from_str("path: users\nfield: name\nlimit: -5\n").unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_load_query_rejects_unknown_field() {
    let err = load_query_config_from_str("path: users\nfield: name\nlimt: 10\n").unwrap_err();
    assert!(err.to_string().contains("limt"));
}

#[test]
fn test_load_query_missing_field() {
    let err = load_query_config_from_str("path: users\nlimit: 10\n").unwrap_err();
    assert!(err.is_config());
}

// ============================================================================
// File Loading Tests
// ============================================================================

#[test]
fn test_load_query_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "path: users\nfield: name.first\nlimit: 10").unwrap();

    let config = load_query_config(file.path()).unwrap();
    assert_eq!(config.field, "name.first");
    assert_eq!(config.limit, 10);
}

#[test]
fn test_load_query_file_not_found() {
    let err = load_query_config("/nonexistent/query.yaml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}

// ============================================================================
// Overrides Loading Tests
// ============================================================================

#[test]
fn test_load_overrides() {
    let overrides = load_query_overrides_from_str("limit: 10\nreverse: true\n").unwrap();
    assert_eq!(overrides, QueryOverrides::new().limit(10).reverse(true));
}

#[test]
fn test_load_empty_overrides() {
    assert!(load_query_overrides_from_str("  \n").unwrap().is_empty());
}
