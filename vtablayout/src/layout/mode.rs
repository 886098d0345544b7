//! Per-tab sizing policy for the two layout modes.

use crate::types::{Edges, TabMode};

/// How a tab's main-axis (vertical) size is resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MainSize {
    /// Share of the strip's remaining extent, proportional to the weight.
    Weighted(f32),
    /// Exact number of rows.
    Fixed(u16),
    /// As tall as the tab's content.
    Wrap,
}

/// Layout parameters of one tab slot. The cross axis always fills the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabLayoutParams {
    pub main: MainSize,
    pub margin: Edges,
}

impl TabLayoutParams {
    /// Gap before the tab along the scroll axis.
    pub fn leading_margin(&self) -> u16 {
        self.margin.top
    }
}

/// Computes [`TabLayoutParams`] for a tab from the strip's mode settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutModeStrategy {
    pub mode: TabMode,
    /// Configured tab height; `None` wraps content. Scrollable only.
    pub tab_height: Option<u16>,
    /// Configured gap between tabs. Scrollable only.
    pub tab_margin: u16,
}

impl LayoutModeStrategy {
    pub fn new(mode: TabMode, tab_height: Option<u16>, tab_margin: u16) -> Self {
        Self {
            mode,
            tab_height,
            tab_margin,
        }
    }

    pub fn params_for(&self, index: usize) -> TabLayoutParams {
        match self.mode {
            TabMode::Fixed => TabLayoutParams {
                main: MainSize::Weighted(1.0),
                margin: Edges::NONE,
            },
            TabMode::Scrollable => TabLayoutParams {
                main: self.tab_height.map_or(MainSize::Wrap, MainSize::Fixed),
                margin: if index == 0 {
                    Edges::NONE
                } else {
                    Edges::top(self.tab_margin)
                },
            },
        }
    }

    /// Distance between the leading edges of two consecutive tabs of the given extent.
    pub fn step(&self, tab_extent: u16) -> f32 {
        match self.mode {
            TabMode::Fixed => tab_extent as f32,
            TabMode::Scrollable => tab_extent as f32 + self.tab_margin as f32,
        }
    }
}
