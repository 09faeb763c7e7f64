//! In-memory document store
//!
//! Keeps collections in a `HashMap` behind an async `RwLock`. Queries sort on
//! every call, which is fine for demos and tests but not for large data sets.

use super::types::{compare_values, field_value, DocumentStore, DocumentWriter, WriteBatch};
use crate::error::{Error, Result};
use crate::query::PageRequest;
use crate::types::{Cursor, Direction, JsonValue, Snapshot};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A stored document
#[derive(Debug, Clone)]
struct StoredDocument {
    id: String,
    data: JsonValue,
}

/// Decoded form of the cursors this store hands out
#[derive(Debug, Serialize, Deserialize)]
struct CursorKey {
    value: JsonValue,
    id: String,
}

impl CursorKey {
    fn encode(&self) -> Result<Cursor> {
        Ok(Cursor::new(serde_json::to_string(self)?))
    }

    fn decode(cursor: &Cursor) -> Result<Self> {
        serde_json::from_str(cursor.as_str()).map_err(|e| {
            Error::invalid_cursor(format!("'{cursor}' was not issued by this store: {e}"))
        })
    }

    fn cmp_in(&self, value: &JsonValue, id: &str, direction: Direction) -> Ordering {
        let ord = compare_values(&self.value, value).then_with(|| self.id.as_str().cmp(id));
        match direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    }
}

/// In-process document store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<StoredDocument>>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document under an explicit id
    pub async fn set(&self, path: &str, id: impl Into<String>, data: JsonValue) -> Result<()> {
        ensure_object(&data)?;
        let mut collections = self.collections.write().await;
        upsert(collections.entry(path.to_string()).or_default(), id.into(), data);
        Ok(())
    }

    /// Number of documents in a collection
    pub async fn len(&self, path: &str) -> usize {
        self.collections
            .read()
            .await
            .get(path)
            .map_or(0, Vec::len)
    }

    /// Check if a collection has no documents
    pub async fn is_empty(&self, path: &str) -> bool {
        self.len(path).await == 0
    }

    fn generate_id(&self) -> String {
        let n = self.next_id.fetch_add(1, AtomicOrdering::Relaxed);
        format!("{n:020}")
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn query(&self, request: &PageRequest) -> Result<Vec<Snapshot>> {
        let after = request
            .start_after
            .as_ref()
            .map(CursorKey::decode)
            .transpose()?;

        let collections = self.collections.read().await;
        let Some(documents) = collections.get(&request.path) else {
            debug!("Collection '{}' is empty", request.path);
            return Ok(Vec::new());
        };

        // Documents without the order field never match an ordered query
        let mut matching: Vec<(&JsonValue, &StoredDocument)> = documents
            .iter()
            .filter_map(|doc| field_value(&doc.data, &request.field).map(|v| (v, doc)))
            .collect();

        matching.sort_by(|(va, a), (vb, b)| {
            let ord = compare_values(va, vb).then_with(|| a.id.cmp(&b.id));
            match request.direction {
                Direction::Asc => ord,
                Direction::Desc => ord.reverse(),
            }
        });

        let page = matching
            .into_iter()
            .filter(|(value, doc)| {
                after.as_ref().map_or(true, |key| {
                    key.cmp_in(value, &doc.id, request.direction) == Ordering::Less
                })
            })
            .take(request.limit)
            .map(|(value, doc)| {
                let cursor = CursorKey {
                    value: value.clone(),
                    id: doc.id.clone(),
                }
                .encode()?;
                Ok(Snapshot::new(doc.id.clone(), cursor, doc.data.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Queried '{}' by {} {}: {} documents",
            request.path,
            request.field,
            request.direction,
            page.len()
        );
        Ok(page)
    }
}

#[async_trait]
impl DocumentWriter for MemoryStore {
    async fn add(&self, path: &str, data: JsonValue) -> Result<String> {
        let id = self.generate_id();
        self.set(path, id.clone(), data).await?;
        Ok(id)
    }

    async fn commit(&self, batch: WriteBatch) -> Result<Vec<String>> {
        let writes = batch.into_writes();
        for write in &writes {
            ensure_object(&write.data)?;
        }

        let mut collections = self.collections.write().await;
        let mut ids = Vec::with_capacity(writes.len());
        for write in writes {
            let id = write.id.unwrap_or_else(|| self.generate_id());
            upsert(
                collections.entry(write.path).or_default(),
                id.clone(),
                write.data,
            );
            ids.push(id);
        }

        debug!("Committed batch of {} writes", ids.len());
        Ok(ids)
    }
}

fn upsert(documents: &mut Vec<StoredDocument>, id: String, data: JsonValue) {
    if let Some(existing) = documents.iter_mut().find(|doc| doc.id == id) {
        existing.data = data;
    } else {
        documents.push(StoredDocument { id, data });
    }
}

fn ensure_object(data: &JsonValue) -> Result<()> {
    if data.is_object() {
        Ok(())
    } else {
        Err(Error::store("documents must be JSON objects"))
    }
}
