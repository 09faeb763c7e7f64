//! Scroll position types

use serde::{Deserialize, Serialize};

/// Edge of a scroll container that was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollPosition {
    /// Scrolled to the very top
    Top,
    /// Scrolled to within a pixel of the bottom
    Bottom,
}

/// Geometry of a scroll container at one scroll event
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top
    pub scroll_top: f64,
    /// Full height of the scrollable content
    pub scroll_height: f64,
    /// Visible height of the container
    pub offset_height: f64,
}

impl ScrollMetrics {
    /// Create metrics for one scroll event
    pub fn new(scroll_top: f64, scroll_height: f64, offset_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            offset_height,
        }
    }

    /// Check if the container is scrolled to (within a pixel of) the bottom
    pub fn at_bottom(&self) -> bool {
        self.scroll_top > self.scroll_height - self.offset_height - 1.0
    }

    /// Check if the container is scrolled to the very top
    #[allow(clippy::float_cmp)]
    pub fn at_top(&self) -> bool {
        self.scroll_top == 0.0
    }

    /// Edges reached by this event, `Bottom` first.
    ///
    /// Content shorter than the container is at both edges at once.
    pub fn positions(&self) -> Vec<ScrollPosition> {
        let mut positions = Vec::with_capacity(2);
        if self.at_bottom() {
            positions.push(ScrollPosition::Bottom);
        }
        if self.at_top() {
            positions.push(ScrollPosition::Top);
        }
        positions
    }
}
