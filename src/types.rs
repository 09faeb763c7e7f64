//! Common types used throughout scroll-pager
//!
//! This module contains shared type definitions used by the query builder,
//! the stores and the pagination engine.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Ordering
// ============================================================================

/// Sort direction on the order field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order
    #[default]
    Asc,
    /// Descending order
    Desc,
}

impl Direction {
    /// Direction implied by the `reverse` flag of a query
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Desc
        } else {
            Self::Asc
        }
    }

    /// Get the direction as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Opaque position marker assigned by a store to each returned document.
///
/// Only meaningful to the store that produced it, and only for the
/// `(field, direction)` pair it was produced under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a store-encoded token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Store Output
// ============================================================================

/// One document as returned by a store query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Document id, unique within its collection
    pub id: String,
    /// Position of this document in the query order
    pub cursor: Cursor,
    /// Raw document payload
    pub data: JsonValue,
}

impl Snapshot {
    /// Create a new snapshot
    pub fn new(id: impl Into<String>, cursor: Cursor, data: JsonValue) -> Self {
        Self {
            id: id.into(),
            cursor,
            data,
        }
    }
}

/// A decoded document held in the accumulated sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    /// Document id
    pub id: String,
    /// Store cursor, used only to position the next query
    pub cursor: Cursor,
    /// Application payload
    pub data: T,
}

impl<T> Record<T> {
    /// Create a new record
    pub fn new(id: impl Into<String>, cursor: Cursor, data: T) -> Self {
        Self {
            id: id.into(),
            cursor,
            data,
        }
    }
}

impl<T: serde::de::DeserializeOwned> TryFrom<Snapshot> for Record<T> {
    type Error = crate::error::Error;

    fn try_from(snapshot: Snapshot) -> crate::error::Result<Self> {
        let Snapshot { id, cursor, data } = snapshot;
        let data = serde_json::from_value(data)
            .map_err(|e| crate::error::Error::decode(id.clone(), e.to_string()))?;
        Ok(Self { id, cursor, data })
    }
}
