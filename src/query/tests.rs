//! Tests for query module

use super::*;
use crate::types::{Cursor, Direction};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn users() -> QueryConfig {
    QueryConfig::new("users", "name", 30)
}

// ============================================================================
// QueryConfig Tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = users();
    assert!(!config.reverse);
    assert!(!config.prepend);
    assert_eq!(config.direction(), Direction::Asc);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_deserialize_defaults() {
    let config: QueryConfig =
        serde_json::from_str(r#"{"path": "users", "field": "name", "limit": 30}"#).unwrap();
    assert_eq!(config, users());
}

#[test_case(QueryConfig::new("users", "name", 0), "limit" ; "zero limit")]
#[test_case(QueryConfig::new("", "name", 10), "path" ; "empty path")]
#[test_case(QueryConfig::new("users", "  ", 10), "field" ; "blank field")]
fn test_config_validate_rejects(config: QueryConfig, expected_field: &str) {
    match config.validate() {
        Err(crate::Error::InvalidConfigValue { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("Expected InvalidConfigValue, got {other:?}"),
    }
}

// ============================================================================
// QueryOverrides Tests
// ============================================================================

#[test]
fn test_overrides_empty_keeps_config() {
    let overrides = QueryOverrides::new();
    assert!(overrides.is_empty());
    assert_eq!(overrides.apply(&users()).unwrap(), users());
}

#[test]
fn test_overrides_replace_subset() {
    let base = users().prepend(true);
    let merged = base
        .merged(&QueryOverrides::new().limit(10).reverse(true))
        .unwrap();

    assert_eq!(merged.path, "users");
    assert_eq!(merged.field, "name");
    assert_eq!(merged.limit, 10);
    assert!(merged.reverse);
    assert!(merged.prepend);
}

#[test]
fn test_overrides_validated_on_merge() {
    let err = users().merged(&QueryOverrides::new().limit(0)).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_overrides_from_yaml() {
    let overrides: QueryOverrides = serde_yaml::from_str("limit: 5\nprepend: true\n").unwrap();
    assert_eq!(overrides, QueryOverrides::new().limit(5).prepend(true));
}

// ============================================================================
// PagedQuery Tests
// ============================================================================

#[test]
fn test_build_first_page_request() {
    let request = PagedQuery::build_request(&users(), None);
    assert_eq!(
        request,
        PageRequest {
            path: "users".to_string(),
            field: "name".to_string(),
            direction: Direction::Asc,
            limit: 30,
            start_after: None,
        }
    );
    assert!(request.is_first_page());
}

#[test]
fn test_build_request_after_cursor() {
    let config = users().reverse(true);
    let request = PagedQuery::build_request(&config, Some(Cursor::new("abc")));
    assert_eq!(request.direction, Direction::Desc);
    assert_eq!(request.start_after, Some(Cursor::new("abc")));
    assert!(!request.is_first_page());
}

#[test]
fn test_prepend_does_not_change_request() {
    let plain = PagedQuery::new(&users()).first_page();
    let prepend = PagedQuery::new(&users().prepend(true)).first_page();
    assert_eq!(plain, prepend);
}
