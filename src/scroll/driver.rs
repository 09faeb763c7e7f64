//! Scroll driver

use super::types::ScrollPosition;
use crate::engine::{LoadOutcome, PaginationEngine};
use crate::error::Result;
use crate::store::DocumentStore;
use futures::{Stream, StreamExt};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Counters collected while driving an engine from scroll events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveSummary {
    /// `Top` events seen
    pub top_events: usize,
    /// `Bottom` events seen
    pub bottom_events: usize,
    /// Pages fetched and merged
    pub pages_loaded: usize,
    /// `Bottom` events ignored because a fetch was outstanding or the data was exhausted
    pub skipped: usize,
    /// Fetches that failed
    pub failures: usize,
}

/// Delegates scroll events to a shared `PaginationEngine`
pub struct ScrollDriver<T, S: ?Sized = dyn DocumentStore> {
    engine: Arc<PaginationEngine<T, S>>,
}

impl<T, S> ScrollDriver<T, S>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    S: DocumentStore + ?Sized,
{
    /// Create a driver around `engine`
    pub fn new(engine: Arc<PaginationEngine<T, S>>) -> Self {
        Self { engine }
    }

    /// The driven engine
    pub fn engine(&self) -> &Arc<PaginationEngine<T, S>> {
        &self.engine
    }

    /// Handle one event.
    ///
    /// `Bottom` loads the next page; `Top` is left to the application and
    /// returns `None`.
    pub async fn handle(&self, position: ScrollPosition) -> Result<Option<LoadOutcome>> {
        match position {
            ScrollPosition::Bottom => self.engine.load_more().await.map(Some),
            ScrollPosition::Top => Ok(None),
        }
    }

    /// Handle events until the stream ends.
    ///
    /// Failed fetches are logged and counted; the next `Bottom` retries.
    pub async fn run<E>(&self, events: E) -> DriveSummary
    where
        E: Stream<Item = ScrollPosition>,
    {
        let mut summary = DriveSummary::default();
        let mut events = std::pin::pin!(events);

        while let Some(position) = events.next().await {
            match position {
                ScrollPosition::Top => summary.top_events += 1,
                ScrollPosition::Bottom => summary.bottom_events += 1,
            }

            match self.handle(position).await {
                Ok(Some(LoadOutcome::Loaded { fetched, total, .. })) => {
                    summary.pages_loaded += 1;
                    debug!("Scroll loaded {fetched} records ({total} total)");
                }
                Ok(Some(LoadOutcome::Skipped(_) | LoadOutcome::Stale)) => summary.skipped += 1,
                Ok(None) => {}
                Err(e) => {
                    summary.failures += 1;
                    warn!("Loading next page failed: {e}");
                }
            }
        }

        summary
    }
}
