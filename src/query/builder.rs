//! Page request construction

use super::types::QueryConfig;
use crate::types::{Cursor, Direction};
use serde::{Deserialize, Serialize};

/// A single page query against a store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Collection path
    pub path: String,
    /// Field to order by
    pub field: String,
    /// Sort direction on `field`
    pub direction: Direction,
    /// Maximum number of documents to return
    pub limit: usize,
    /// Only return documents strictly after this position
    pub start_after: Option<Cursor>,
}

impl PageRequest {
    /// Check if this request fetches the first page
    pub fn is_first_page(&self) -> bool {
        self.start_after.is_none()
    }
}

/// Stateless description of how to query one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedQuery {
    path: String,
    field: String,
    direction: Direction,
    limit: usize,
}

impl PagedQuery {
    /// Create a query description from a configuration
    pub fn new(config: &QueryConfig) -> Self {
        Self {
            path: config.path.clone(),
            field: config.field.clone(),
            direction: config.direction(),
            limit: config.limit,
        }
    }

    /// Build the request for `config`, positioned after `cursor` if given
    pub fn build_request(config: &QueryConfig, cursor: Option<Cursor>) -> PageRequest {
        Self::new(config).request(cursor)
    }

    /// Build the request positioned after `cursor` if given
    pub fn request(&self, cursor: Option<Cursor>) -> PageRequest {
        PageRequest {
            path: self.path.clone(),
            field: self.field.clone(),
            direction: self.direction,
            limit: self.limit,
            start_after: cursor,
        }
    }

    /// Request for the first page
    pub fn first_page(&self) -> PageRequest {
        self.request(None)
    }
}
