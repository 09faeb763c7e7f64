//! Scroll driving module
//!
//! Turns scroll positions into `load_more` calls.
//!
//! # Overview
//!
//! The scroll module provides:
//! - `ScrollPosition` - Discrete `Top` / `Bottom` events
//! - `ScrollMetrics` - Detects those events from a scroll container's geometry
//! - `ScrollDriver` - Holds a `PaginationEngine` and loads a page per `Bottom`

mod driver;
mod types;

pub use driver::{DriveSummary, ScrollDriver};
pub use types::{ScrollMetrics, ScrollPosition};

#[cfg(test)]
mod tests;
