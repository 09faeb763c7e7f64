// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # scroll-pager
//!
//! Cursor-based incremental pagination for ordered document collections.
//! Pages are streamed into a growing in-memory sequence, with `data`,
//! `loading` and `done` exposed as watch signals for an infinite-scroll UI
//! or any other consumer.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Each page starts strictly after the last record fetched
//! - **Append or Prepend**: Splice new pages after or before the accumulated records
//! - **Single Flight**: At most one outstanding fetch; extra requests are no-ops
//! - **Reset**: Restart from page one, optionally with a new path, field, order or limit
//! - **Stale Response Protection**: Pages from before a reset are discarded
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scroll_pager::{MemoryStore, PaginationEngine, QueryConfig, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = Arc::new(MemoryStore::new());
//!     let config = QueryConfig::new("users", "name", 30);
//!
//!     // Fetches the first page
//!     let engine: PaginationEngine<serde_json::Value, _> =
//!         PaginationEngine::new(store, config).await?;
//!
//!     // Call on every bottom-of-scroll event
//!     while !engine.is_done() {
//!         engine.load_more().await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  Bottom   ┌──────────────────┐  PageRequest  ┌───────────────┐
//! │ ScrollDriver │ ────────▶ │ PaginationEngine │ ────────────▶ │ DocumentStore │
//! └──────────────┘           │  data / loading  │ ◀──────────── └───────────────┘
//!                            │  / done signals  │   Snapshots
//!                            └──────────────────┘
//!                                     │ PagedQuery::build_request
//!                                     ▼
//!                               QueryConfig + Cursor
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document the CLI argument structs before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Query configuration and page request construction
pub mod query;

/// Document store traits and the in-memory store
pub mod store;

/// Pagination engine
pub mod engine;

/// Scroll events and the scroll driver
pub mod scroll;

/// YAML loader for query configurations
pub mod loader;

/// Collection seeding
pub mod seed;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use engine::{LoadOutcome, PaginationEngine, PaginationPhase, SkipReason};
pub use query::{PageRequest, PagedQuery, QueryConfig, QueryOverrides};
pub use store::{DocumentStore, DocumentWriter, MemoryStore, WriteBatch};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
