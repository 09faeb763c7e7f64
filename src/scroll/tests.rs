//! Tests for scroll module

use super::*;
use crate::engine::{LoadOutcome, PaginationEngine, SkipReason};
use crate::query::QueryConfig;
use crate::store::MemoryStore;
use futures::{stream, StreamExt};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use test_case::test_case;

async fn engine(count: usize, limit: usize) -> Arc<PaginationEngine<Value, MemoryStore>> {
    let store = MemoryStore::new();
    for i in 0..count {
        store
            .set("posts", format!("p{i:03}"), json!({"seq": i}))
            .await
            .unwrap();
    }
    Arc::new(
        PaginationEngine::new(Arc::new(store), QueryConfig::new("posts", "seq", limit))
            .await
            .unwrap(),
    )
}

// ============================================================================
// ScrollMetrics Tests
// ============================================================================

#[test_case(0.0, 1000.0, 400.0, &[ScrollPosition::Top] ; "at top")]
#[test_case(300.0, 1000.0, 400.0, &[] ; "middle")]
#[test_case(599.5, 1000.0, 400.0, &[ScrollPosition::Bottom] ; "within a pixel of bottom")]
#[test_case(600.0, 1000.0, 400.0, &[ScrollPosition::Bottom] ; "at bottom")]
#[test_case(0.0, 300.0, 400.0, &[ScrollPosition::Bottom, ScrollPosition::Top] ; "content shorter than view")]
fn test_scroll_positions(top: f64, height: f64, offset: f64, expected: &[ScrollPosition]) {
    let metrics = ScrollMetrics::new(top, height, offset);
    assert_eq!(metrics.positions(), expected.to_vec());
}

#[test]
fn test_scroll_position_serde() {
    let position: ScrollPosition = serde_json::from_str("\"bottom\"").unwrap();
    assert_eq!(position, ScrollPosition::Bottom);
    assert_eq!(serde_json::to_string(&ScrollPosition::Top).unwrap(), "\"top\"");
}

// ============================================================================
// ScrollDriver Tests
// ============================================================================

#[tokio::test]
async fn test_handle_bottom_loads_more() {
    let driver = ScrollDriver::new(engine(25, 10).await);

    let outcome = driver.handle(ScrollPosition::Bottom).await.unwrap();
    assert_eq!(outcome.map(|o| o.fetched()), Some(10));
    assert_eq!(driver.engine().len(), 20);
}

#[tokio::test]
async fn test_handle_top_is_ignored() {
    let driver = ScrollDriver::new(engine(25, 10).await);

    assert_eq!(driver.handle(ScrollPosition::Top).await.unwrap(), None);
    assert_eq!(driver.engine().len(), 10);
}

#[tokio::test]
async fn test_run_until_exhausted() {
    let driver = ScrollDriver::new(engine(25, 10).await);
    let events = stream::iter(vec![
        ScrollPosition::Top,
        ScrollPosition::Bottom,
        ScrollPosition::Bottom,
        ScrollPosition::Bottom,
        ScrollPosition::Top,
    ]);

    let summary = driver.run(events).await;
    assert_eq!(
        summary,
        DriveSummary {
            top_events: 2,
            bottom_events: 3,
            pages_loaded: 2,
            skipped: 1,
            failures: 0,
        }
    );
    assert_eq!(driver.engine().len(), 25);
    assert!(driver.engine().is_done());
    assert_eq!(
        driver.engine().load_more().await.unwrap(),
        LoadOutcome::Skipped(SkipReason::Done)
    );
}

#[tokio::test]
async fn test_run_from_metrics() {
    let driver = ScrollDriver::new(engine(30, 10).await);
    let scrolls = vec![
        ScrollMetrics::new(100.0, 1000.0, 400.0),
        ScrollMetrics::new(600.0, 1000.0, 400.0),
        ScrollMetrics::new(1600.0, 2000.0, 400.0),
    ];
    let events = stream::iter(scrolls).flat_map(|m| stream::iter(m.positions()));

    let summary = driver.run(events).await;
    assert_eq!(summary.bottom_events, 2);
    assert_eq!(summary.pages_loaded, 2);
    assert_eq!(driver.engine().len(), 30);
}
