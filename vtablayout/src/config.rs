//! Tab layout configuration.

use serde::{Deserialize, Serialize};

use crate::transitions::TransitionConfig;
use crate::types::{Color, IndicatorGravity, IndicatorMotion, TabMode};

/// Every recognized style option of the tab layout.
///
/// Sizes are in terminal cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabLayoutConfig {
    pub indicator_color: Color,
    /// Cross-axis size of the indicator.
    pub indicator_thickness: u16,
    /// 0 draws square ends.
    pub indicator_corner_radius: u16,
    pub indicator_gravity: IndicatorGravity,
    /// Gap between tabs. Only applied in [`TabMode::Scrollable`].
    pub tab_margin: u16,
    pub tab_mode: TabMode,
    /// Fixed tab height, `None` wraps content. Only applied in [`TabMode::Scrollable`].
    pub tab_height: Option<u16>,
    /// Indicator movement when no pager drives it.
    pub indicator_motion: IndicatorMotion,
    /// Timing of indicator and scroll transitions.
    pub transition: TransitionConfig,
}

impl Default for TabLayoutConfig {
    fn default() -> Self {
        Self {
            indicator_color: Color::accent(),
            indicator_thickness: 1,
            indicator_corner_radius: 0,
            indicator_gravity: IndicatorGravity::Leading,
            tab_margin: 0,
            tab_mode: TabMode::Fixed,
            tab_height: None,
            indicator_motion: IndicatorMotion::Animated,
            transition: TransitionConfig::default(),
        }
    }
}

impl TabLayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = color;
        self
    }

    pub fn with_indicator_thickness(mut self, thickness: u16) -> Self {
        self.indicator_thickness = thickness;
        self
    }

    pub fn with_indicator_corner_radius(mut self, radius: u16) -> Self {
        self.indicator_corner_radius = radius;
        self
    }

    pub fn with_indicator_gravity(mut self, gravity: IndicatorGravity) -> Self {
        self.indicator_gravity = gravity;
        self
    }

    pub fn with_tab_margin(mut self, margin: u16) -> Self {
        self.tab_margin = margin;
        self
    }

    pub fn with_tab_mode(mut self, mode: TabMode) -> Self {
        self.tab_mode = mode;
        self
    }

    pub fn with_tab_height(mut self, height: u16) -> Self {
        self.tab_height = Some(height);
        self
    }

    pub fn with_indicator_motion(mut self, motion: IndicatorMotion) -> Self {
        self.indicator_motion = motion;
        self
    }

    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    /// Shorthand for a scrollable strip with fixed-height tabs.
    pub fn scrollable(height: u16, margin: u16) -> Self {
        Self::default()
            .with_tab_mode(TabMode::Scrollable)
            .with_tab_height(height)
            .with_tab_margin(margin)
    }
}
