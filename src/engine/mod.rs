//! Pagination engine module
//!
//! Streams pages of ordered documents into a growing in-memory sequence.
//!
//! # Overview
//!
//! The engine module provides:
//! - `PaginationEngine` - Holds the `data`, `loading` and `done` signals and
//!   the load/reset logic
//! - `LoadOutcome` / `SkipReason` - What a load request did
//! - `PaginationPhase` - Loading, ready or done
//!
//! Signals are `tokio::sync::watch` channels: every subscriber sees the
//! latest value, and any number of subscribers can observe without affecting
//! the engine.
//!
//! At most one fetch is outstanding per engine. The check-and-set of
//! `loading` happens under the cycle lock, which is released before the store
//! is awaited. Each reset bumps a generation counter; a response tagged with
//! an older generation is dropped without touching state. A fetch whose
//! caller goes away before it completes clears `loading` for its generation.

mod types;

pub use types::{LoadOutcome, PaginationPhase, SkipReason};

use crate::error::Result;
use crate::query::{PageRequest, PagedQuery, QueryConfig, QueryOverrides};
use crate::store::DocumentStore;
use crate::types::{Cursor, Record, Snapshot};
use futures::Stream;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

/// Mutable per-cycle state guarded by the engine lock
#[derive(Debug)]
struct Cycle {
    query: QueryConfig,
}

/// A dispatched fetch
#[derive(Debug)]
struct Ticket {
    generation: u64,
    request: PageRequest,
    prepend: bool,
}

/// Clears `loading` when a dispatched fetch is dropped before it completes
struct InFlight<'a> {
    loading: &'a watch::Sender<bool>,
    generation: &'a AtomicU64,
    ticket: u64,
    armed: bool,
}

impl InFlight<'_> {
    fn finish(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let (generation, ticket) = (self.generation, self.ticket);
        // Resets bump the generation before writing `loading`
        let cleared = self.loading.send_if_modified(|loading| {
            let current = generation.load(Ordering::SeqCst) == ticket;
            let clear = current && *loading;
            if clear {
                *loading = false;
            }
            clear
        });
        if cleared {
            warn!("Fetch abandoned before completion (generation {ticket})");
        }
    }
}

/// Cursor-based incremental pagination over one collection
pub struct PaginationEngine<T, S: ?Sized = dyn DocumentStore> {
    store: Arc<S>,
    cycle: Mutex<Cycle>,
    /// Bumped on every reset; only written while `cycle` is locked
    generation: AtomicU64,
    data: watch::Sender<Vec<Record<T>>>,
    loading: watch::Sender<bool>,
    done: watch::Sender<bool>,
}

impl<T, S> PaginationEngine<T, S>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    S: DocumentStore + ?Sized,
{
    /// Create an engine and fetch the first page.
    ///
    /// Fails with a configuration error if `config` is invalid, or with the
    /// store error if the first page cannot be fetched.
    pub async fn new(store: Arc<S>, config: QueryConfig) -> Result<Self> {
        config.validate()?;
        info!(
            "Paginating '{}' by {} {} ({} per page)",
            config.path,
            config.field,
            config.direction(),
            config.limit
        );

        let engine = Self {
            store,
            cycle: Mutex::new(Cycle { query: config }),
            generation: AtomicU64::new(0),
            data: watch::Sender::new(Vec::new()),
            loading: watch::Sender::new(false),
            done: watch::Sender::new(false),
        };

        engine.load_more().await?;
        Ok(engine)
    }

    /// Fetch and merge the next page.
    ///
    /// A no-op returning `Skipped` while a fetch is outstanding or once the
    /// collection is exhausted.
    pub async fn load_more(&self) -> Result<LoadOutcome> {
        let ticket = {
            let cycle = self.cycle.lock().await;
            match self.dispatch(&cycle) {
                Ok(ticket) => ticket,
                Err(reason) => {
                    debug!("load_more ignored: {reason:?}");
                    return Ok(LoadOutcome::Skipped(reason));
                }
            }
        };
        self.complete(ticket).await
    }

    /// Discard accumulated state and fetch the first page again.
    ///
    /// `overrides` replace any subset of the current configuration. Invalid
    /// overrides fail before any state is touched.
    pub async fn reset_pagination(
        &self,
        overrides: Option<QueryOverrides>,
    ) -> Result<LoadOutcome> {
        let ticket = {
            let mut cycle = self.cycle.lock().await;
            if let Some(overrides) = overrides {
                cycle.query = cycle.query.merged(&overrides)?;
            }
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            info!(
                "Resetting pagination of '{}' (generation {generation})",
                cycle.query.path
            );

            self.done.send_replace(false);
            self.loading.send_replace(false);
            self.data.send_replace(Vec::new());

            match self.dispatch(&cycle) {
                Ok(ticket) => ticket,
                Err(reason) => return Ok(LoadOutcome::Skipped(reason)),
            }
        };
        self.complete(ticket).await
    }

    /// Current accumulated records
    pub fn data(&self) -> Vec<Record<T>> {
        self.data.borrow().clone()
    }

    /// Number of accumulated records
    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    /// Check if no records are accumulated
    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }

    /// Check if a fetch is outstanding
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Check if the collection is exhausted for this cycle
    pub fn is_done(&self) -> bool {
        *self.done.borrow()
    }

    /// Current phase of the cycle
    pub fn phase(&self) -> PaginationPhase {
        if self.is_loading() {
            PaginationPhase::Loading
        } else if self.is_done() {
            PaginationPhase::Done
        } else {
            PaginationPhase::Ready
        }
    }

    /// Current query configuration
    pub async fn query(&self) -> QueryConfig {
        self.cycle.lock().await.query.clone()
    }

    /// Subscribe to the accumulated records
    pub fn subscribe_data(&self) -> watch::Receiver<Vec<Record<T>>> {
        self.data.subscribe()
    }

    /// Subscribe to the loading flag
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Subscribe to the done flag
    pub fn subscribe_done(&self) -> watch::Receiver<bool> {
        self.done.subscribe()
    }

    /// Stream of data snapshots, starting with the current one.
    ///
    /// Intermediate values may be skipped if the consumer is slower than the
    /// engine. The stream ends when the engine is dropped.
    pub fn data_stream(&self) -> impl Stream<Item = Vec<Record<T>>> + Send + 'static {
        futures::stream::unfold((self.data.subscribe(), true), |(mut rx, first)| async move {
            if !first && rx.changed().await.is_err() {
                return None;
            }
            let value = rx.borrow_and_update().clone();
            Some((value, (rx, false)))
        })
    }

    /// Check the guard and mark a fetch as outstanding. Caller holds the cycle lock.
    fn dispatch(&self, cycle: &Cycle) -> std::result::Result<Ticket, SkipReason> {
        if self.is_done() {
            return Err(SkipReason::Done);
        }
        if self.is_loading() {
            return Err(SkipReason::Loading);
        }

        let cursor = self.cursor(cycle.query.prepend);
        let request = PagedQuery::build_request(&cycle.query, cursor);
        let generation = self.generation.load(Ordering::SeqCst);
        self.loading.send_replace(true);

        debug!(
            "Dispatching page of '{}' (generation {generation}, after {:?})",
            request.path,
            request.start_after.as_ref().map(Cursor::as_str)
        );
        Ok(Ticket {
            generation,
            request,
            prepend: cycle.query.prepend,
        })
    }

    /// Position for the next page.
    ///
    /// Prepended pages are reversed before splicing, so the record fetched
    /// last sits at the front in prepend mode and at the back otherwise.
    fn cursor(&self, prepend: bool) -> Option<Cursor> {
        let data = self.data.borrow();
        let edge = if prepend { data.first() } else { data.last() };
        edge.map(|record| record.cursor.clone())
    }

    /// Await the store and merge the page if it still belongs to the current cycle
    async fn complete(&self, ticket: Ticket) -> Result<LoadOutcome> {
        let in_flight = InFlight {
            loading: &self.loading,
            generation: &self.generation,
            ticket: ticket.generation,
            armed: true,
        };

        let fetched = self
            .store
            .query(&ticket.request)
            .await
            .and_then(|snapshots| decode_page(snapshots, ticket.request.limit));

        let _cycle = self.cycle.lock().await;
        let current = self.generation.load(Ordering::SeqCst);
        if current != ticket.generation {
            match &fetched {
                Ok(page) => warn!(
                    "Dropping stale page of {} records (generation {}, current {current})",
                    page.len(),
                    ticket.generation
                ),
                Err(e) => warn!(
                    "Dropping stale fetch failure (generation {}, current {current}): {e}",
                    ticket.generation
                ),
            }
            in_flight.finish();
            return Ok(LoadOutcome::Stale);
        }

        let mut page = match fetched {
            Ok(page) => page,
            Err(e) => {
                warn!("Fetching page of '{}' failed: {e}", ticket.request.path);
                self.loading.send_replace(false);
                in_flight.finish();
                return Err(e);
            }
        };

        let count = page.len();
        let exhausted = count < ticket.request.limit;
        if ticket.prepend {
            page.reverse();
        }

        self.data.send_modify(|data| {
            if ticket.prepend {
                page.append(data);
                *data = page;
            } else {
                data.append(&mut page);
            }
        });
        let total = self.len();

        if exhausted {
            self.done.send_replace(true);
            info!(
                "Reached end of '{}' after {total} records",
                ticket.request.path
            );
        }
        self.loading.send_replace(false);
        in_flight.finish();

        debug!("Merged {count} records ({total} total)");
        Ok(LoadOutcome::Loaded {
            fetched: count,
            total,
            done: exhausted,
        })
    }
}

/// Decode store snapshots, trimming anything past the page limit
fn decode_page<T: DeserializeOwned>(
    snapshots: Vec<Snapshot>,
    limit: usize,
) -> Result<Vec<Record<T>>> {
    if snapshots.len() > limit {
        warn!(
            "Store returned {} documents for a page of {limit}, truncating",
            snapshots.len()
        );
    }
    snapshots
        .into_iter()
        .take(limit)
        .map(Record::try_from)
        .collect()
}
