//! Tests for seed module

use super::*;
use crate::query::{PagedQuery, QueryConfig};
use crate::store::{DocumentStore, MemoryStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RandomUserClient {
    RandomUserClient::with_config(RandomUserConfig::default().base_url(server.uri())).unwrap()
}

fn users_body(names: &[&str]) -> serde_json::Value {
    let results: Vec<_> = names
        .iter()
        .map(|n| json!({"name": {"first": n, "last": "Test"}}))
        .collect();
    json!({ "results": results, "info": { "seed": "abc", "results": names.len() } })
}

// ============================================================================
// RandomUserClient Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_users() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body(&["a", "b", "c"])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client_for(&server).fetch(3).await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[1]["name"]["first"], "b");
}

#[tokio::test]
async fn test_fetch_zero_skips_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    assert!(client_for(&server).fetch(0).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch(5).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503: maintenance");
    assert!(err.is_retryable());
}

// ============================================================================
// Store Seeding Tests
// ============================================================================

#[tokio::test]
async fn test_add_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body(&["solo"])))
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    add_one(&client_for(&server), &store, "users").await.unwrap();
    assert_eq!(store.len("users").await, 1);
}

#[tokio::test]
async fn test_add_one_empty_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    assert!(add_one(&client_for(&server), &store, "users").await.is_err());
    assert!(store.is_empty("users").await);
}

#[tokio::test]
async fn test_add_many_commits_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/"))
        .and(query_param("results", "4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(users_body(&["d", "b", "a", "c"])),
        )
        .mount(&server)
        .await;

    let store = MemoryStore::new();
    let ids = add_many(&client_for(&server), &store, "users", 4).await.unwrap();
    assert_eq!(ids.len(), 4);

    let request = PagedQuery::build_request(&QueryConfig::new("users", "name.first", 10), None);
    let page = store.query(&request).await.unwrap();
    let firsts: Vec<_> = page
        .iter()
        .map(|s| s.data["name"]["first"].as_str().unwrap())
        .collect();
    assert_eq!(firsts, vec!["a", "b", "c", "d"]);
}

// ============================================================================
// Synthetic Users Tests
// ============================================================================

#[test]
fn test_synthetic_users_deterministic() {
    let users = synthetic_users(25);
    assert_eq!(users.len(), 25);
    assert_eq!(users, synthetic_users(25));
    assert_eq!(users[0]["name"]["first"], "Ada");
    assert_eq!(users[20]["name"]["last"], "Turing");
    assert_eq!(users[24]["seq"], 24);
}

#[tokio::test]
async fn test_seed_synthetic() {
    let store = MemoryStore::new();
    let ids = seed_synthetic(&store, "users", 65).await.unwrap();
    assert_eq!(ids.len(), 65);
    assert_eq!(store.len("users").await, 65);
}
