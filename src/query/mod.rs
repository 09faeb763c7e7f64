//! Query module
//!
//! Describes how one page is fetched from a collection.
//!
//! # Overview
//!
//! The query module provides:
//! - `QueryConfig` - Collection path, order field, page size and ordering flags
//! - `QueryOverrides` - Typed partial configuration applied on reset
//! - `PagedQuery` - Pure translation from a config and a cursor to a `PageRequest`

mod builder;
mod types;

pub use builder::{PageRequest, PagedQuery};
pub use types::{QueryConfig, QueryOverrides};

#[cfg(test)]
mod tests;
