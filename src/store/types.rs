//! Store traits and shared helpers

use crate::error::Result;
use crate::query::PageRequest;
use crate::types::{JsonValue, Snapshot};
use async_trait::async_trait;
use serde_json::Number;
use std::cmp::Ordering;

/// Read side of a document store
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Run one page query.
    ///
    /// Returns at most `request.limit` documents ordered by `request.field`
    /// in `request.direction`, strictly after `request.start_after` if set.
    async fn query(&self, request: &PageRequest) -> Result<Vec<Snapshot>>;
}

/// Write side of a document store
#[async_trait]
pub trait DocumentWriter: Send + Sync {
    /// Add a document with a generated id, returning the id
    async fn add(&self, path: &str, data: JsonValue) -> Result<String>;

    /// Apply every write in `batch` or none of them, returning the ids written
    async fn commit(&self, batch: WriteBatch) -> Result<Vec<String>>;
}

/// A write waiting in a batch
#[derive(Debug, Clone, PartialEq)]
pub struct PendingWrite {
    /// Collection path
    pub path: String,
    /// Explicit id, or `None` to generate one on commit
    pub id: Option<String>,
    /// Document payload
    pub data: JsonValue,
}

/// Collects writes that are committed together
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    writes: Vec<PendingWrite>,
}

impl WriteBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a document with a generated id
    pub fn set(&mut self, path: impl Into<String>, data: JsonValue) -> &mut Self {
        self.writes.push(PendingWrite {
            path: path.into(),
            id: None,
            data,
        });
        self
    }

    /// Queue a document with an explicit id, replacing any existing one
    pub fn set_with_id(
        &mut self,
        path: impl Into<String>,
        id: impl Into<String>,
        data: JsonValue,
    ) -> &mut Self {
        self.writes.push(PendingWrite {
            path: path.into(),
            id: Some(id.into()),
            data,
        });
        self
    }

    /// Number of queued writes
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Check if the batch is empty
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Consume the batch
    pub fn into_writes(self) -> Vec<PendingWrite> {
        self.writes
    }
}

/// Resolve a dotted field path (e.g. `name.first`) inside a document
pub fn field_value<'a>(data: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    path.split('.').try_fold(data, |current, part| match current {
        JsonValue::Object(map) => map.get(part),
        _ => None,
    })
}

/// Total order over JSON values used for sorting documents.
///
/// Values of different types order by type: null, booleans, numbers,
/// strings, arrays, objects.
pub fn compare_values(a: &JsonValue, b: &JsonValue) -> Ordering {
    match (a, b) {
        (JsonValue::Bool(x), JsonValue::Bool(y)) => x.cmp(y),
        (JsonValue::Number(x), JsonValue::Number(y)) => compare_numbers(x, y),
        (JsonValue::String(x), JsonValue::String(y)) => x.cmp(y),
        (JsonValue::Array(x), JsonValue::Array(y)) => {
            for (left, right) in x.iter().zip(y) {
                let ord = compare_values(left, right);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        (JsonValue::Object(_), JsonValue::Object(_)) => a.to_string().cmp(&b.to_string()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Integers compare exactly; anything involving a float goes through `f64`
fn compare_numbers(x: &Number, y: &Number) -> Ordering {
    match (x.as_i64(), y.as_i64(), x.as_u64(), y.as_u64()) {
        (Some(a), Some(b), _, _) => a.cmp(&b),
        (_, _, Some(a), Some(b)) => a.cmp(&b),
        // One side is negative, the other above i64::MAX
        (Some(_), None, _, Some(_)) => Ordering::Less,
        (None, Some(_), Some(_), _) => Ordering::Greater,
        _ => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.total_cmp(&y)
        }
    }
}

fn type_rank(value: &JsonValue) -> u8 {
    match value {
        JsonValue::Null => 0,
        JsonValue::Bool(_) => 1,
        JsonValue::Number(_) => 2,
        JsonValue::String(_) => 3,
        JsonValue::Array(_) => 4,
        JsonValue::Object(_) => 5,
    }
}
