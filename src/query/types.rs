//! Query configuration types

use crate::error::{Error, Result};
use crate::types::Direction;
use serde::{Deserialize, Serialize};

/// Configuration for one pagination cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    /// Path to the collection
    pub path: String,

    /// Field to order by
    pub field: String,

    /// Records per page
    pub limit: usize,

    /// Order descending instead of ascending
    #[serde(default)]
    pub reverse: bool,

    /// Splice new pages in front of the accumulated sequence
    #[serde(default)]
    pub prepend: bool,
}

impl QueryConfig {
    /// Create a config with default ordering flags (`reverse = false`, `prepend = false`)
    pub fn new(path: impl Into<String>, field: impl Into<String>, limit: usize) -> Self {
        Self {
            path: path.into(),
            field: field.into(),
            limit,
            reverse: false,
            prepend: false,
        }
    }

    /// Set descending order
    #[must_use]
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Set prepend mode
    #[must_use]
    pub fn prepend(mut self, prepend: bool) -> Self {
        self.prepend = prepend;
        self
    }

    /// Sort direction implied by `reverse`
    pub fn direction(&self) -> Direction {
        Direction::from_reverse(self.reverse)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            return Err(Error::invalid_value("path", "collection path cannot be empty"));
        }
        if self.field.trim().is_empty() {
            return Err(Error::invalid_value("field", "order field cannot be empty"));
        }
        if self.limit == 0 {
            return Err(Error::invalid_value("limit", "must be at least 1"));
        }
        Ok(())
    }

    /// Return a validated copy with `overrides` applied on top
    pub fn merged(&self, overrides: &QueryOverrides) -> Result<Self> {
        overrides.apply(self)
    }
}

/// Field-level overrides for a `QueryConfig`
///
/// Every field is optional; unset fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryOverrides {
    /// Replacement collection path
    pub path: Option<String>,

    /// Replacement order field
    pub field: Option<String>,

    /// Replacement page size
    pub limit: Option<usize>,

    /// Replacement sort direction flag
    pub reverse: Option<bool>,

    /// Replacement prepend flag
    pub prepend: Option<bool>,
}

impl QueryOverrides {
    /// Create empty overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the collection path
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Override the order field
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Override the page size
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Override the sort direction
    #[must_use]
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = Some(reverse);
        self
    }

    /// Override prepend mode
    #[must_use]
    pub fn prepend(mut self, prepend: bool) -> Self {
        self.prepend = Some(prepend);
        self
    }

    /// Check if no field is overridden
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply onto `base`, validating the result
    pub fn apply(&self, base: &QueryConfig) -> Result<QueryConfig> {
        let merged = QueryConfig {
            path: self.path.clone().unwrap_or_else(|| base.path.clone()),
            field: self.field.clone().unwrap_or_else(|| base.field.clone()),
            limit: self.limit.unwrap_or(base.limit),
            reverse: self.reverse.unwrap_or(base.reverse),
            prepend: self.prepend.unwrap_or(base.prepend),
        };
        merged.validate()?;
        Ok(merged)
    }
}
