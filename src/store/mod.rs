//! Document store module
//!
//! The pagination engine only reads through `DocumentStore`. Writes go through
//! `DocumentWriter`, which seeding and demos use to fill a collection.
//!
//! # Overview
//!
//! The store module provides:
//! - `DocumentStore` - Ordered, limited, cursor-positioned page queries
//! - `DocumentWriter` / `WriteBatch` - Single and batched document writes
//! - `MemoryStore` - In-process implementation of both

mod memory;
mod types;

pub use memory::MemoryStore;
pub use types::{
    compare_values, field_value, DocumentStore, DocumentWriter, PendingWrite, WriteBatch,
};
