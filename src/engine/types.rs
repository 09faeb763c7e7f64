//! Engine types
//!
//! Outcomes and phases reported by the pagination engine.

use std::fmt;

/// Why a `load_more` call did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A fetch is already outstanding
    Loading,
    /// The collection is exhausted for this cycle
    Done,
}

/// Result of a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and merged
    Loaded {
        /// Records in the fetched page
        fetched: usize,
        /// Records accumulated after the merge
        total: usize,
        /// Whether this page exhausted the collection
        done: bool,
    },
    /// No fetch was dispatched
    Skipped(SkipReason),
    /// The response belonged to a cycle that was reset while it was in flight
    Stale,
}

impl LoadOutcome {
    /// Check if a page was merged
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Check if the call was a no-op
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }

    /// Number of records merged by this call
    pub fn fetched(&self) -> usize {
        match self {
            Self::Loaded { fetched, .. } => *fetched,
            _ => 0,
        }
    }
}

/// Observable phase of the current pagination cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationPhase {
    /// A fetch is outstanding
    Loading,
    /// Idle with more pages available
    Ready,
    /// Exhausted until the next reset
    Done,
}

impl fmt::Display for PaginationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}
