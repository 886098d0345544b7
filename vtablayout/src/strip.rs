//! Tab strip
//!
//! Owns the tab items, the container that lays them out and the indicator.
//! Every mutation that changes geometry requests a layout; the next
//! [`TabStrip::layout`] pass resolves slot rectangles, then the indicator's
//! cross-axis placement and main-axis step.

use std::time::Instant;

use crate::animation::Frame;
use crate::config::TabLayoutConfig;
use crate::error::TabError;
use crate::indicator::IndicatorEngine;
use crate::layout::{LayoutModeStrategy, Rect, StripContainer};
use crate::tab::{TabDisplay, TabItem};
use crate::transitions::TransitionConfig;
use crate::types::TabMode;
use crate::Result;

#[derive(Debug, Clone)]
pub struct TabStrip {
    items: Vec<TabItem>,
    container: StripContainer,
    indicator: IndicatorEngine,
    strategy: LayoutModeStrategy,
    dirty: bool,
}

impl TabStrip {
    pub fn new(config: &TabLayoutConfig) -> Self {
        Self {
            items: Vec::new(),
            container: StripContainer::new(config.transition),
            indicator: IndicatorEngine::new(config),
            strategy: LayoutModeStrategy::new(
                config.tab_mode,
                config.tab_height,
                config.tab_margin,
            ),
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn tab_at(&self, index: usize) -> Option<&TabItem> {
        self.items.get(index)
    }

    pub fn mode(&self) -> TabMode {
        self.strategy.mode
    }

    pub fn tab_margin(&self) -> u16 {
        self.strategy.tab_margin
    }

    pub fn tab_height(&self) -> Option<u16> {
        self.strategy.tab_height
    }

    pub fn container(&self) -> &StripContainer {
        &self.container
    }

    pub fn indicator(&self) -> &IndicatorEngine {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut IndicatorEngine {
        &mut self.indicator
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if self.items.is_empty() {
            return Err(TabError::empty_strip());
        }
        if index >= self.items.len() {
            return Err(TabError::IndexOutOfRange {
                index,
                count: self.items.len(),
            });
        }
        Ok(())
    }

    /// Append a tab and return its index.
    pub(crate) fn push(&mut self, display: TabDisplay) -> usize {
        let index = self.items.len();
        let intrinsic = display.content_height();
        self.items.push(TabItem::new(index, display));
        self.dirty = true;
        self.container.push(self.strategy.params_for(index), intrinsic);
        index
    }

    /// Remove a tab, reindexing the ones after it.
    pub(crate) fn remove(&mut self, index: usize) -> TabItem {
        let removed = self.items.remove(index);
        self.dirty = true;
        self.container.remove(index);
        for (i, item) in self.items.iter_mut().enumerate().skip(index) {
            item.set_index(i);
        }
        // The new first tab must lose its leading margin
        self.reapply_params();
        removed
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.container.clear();
        self.dirty = true;
    }

    pub(crate) fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(item) = self.items.get_mut(index) {
            item.set_selected(selected);
            self.dirty = true;
        }
    }

    fn reapply_params(&mut self) {
        for index in 0..self.items.len() {
            self.container
                .set_params(index, self.strategy.params_for(index));
        }
    }

    /// Switch layout mode, re-applying sizing to every tab.
    ///
    /// Leaving `Scrollable` drops the configured margin; it has to be set again
    /// after switching back.
    pub fn set_mode(&mut self, mode: TabMode) {
        if mode == self.strategy.mode {
            return;
        }
        log::debug!("[strip] mode {} -> {}", self.strategy.mode, mode);
        if mode == TabMode::Fixed {
            self.strategy.tab_margin = 0;
        }
        self.strategy.mode = mode;
        self.reapply_params();
    }

    /// Gap between tabs. Ignored in `Fixed` mode.
    pub fn set_tab_margin(&mut self, margin: u16) {
        if self.strategy.mode == TabMode::Fixed {
            log::debug!("[strip] tab margin ignored in fixed mode");
            return;
        }
        if margin == self.strategy.tab_margin {
            return;
        }
        self.strategy.tab_margin = margin;
        self.reapply_params();
    }

    /// Tab height. Ignored in `Fixed` mode.
    pub fn set_tab_height(&mut self, height: u16) {
        if self.strategy.mode == TabMode::Fixed {
            log::debug!("[strip] tab height ignored in fixed mode");
            return;
        }
        if Some(height) == self.strategy.tab_height {
            return;
        }
        self.strategy.tab_height = Some(height);
        self.reapply_params();
    }

    pub fn set_badge(&mut self, index: usize, badge: i32) -> Result<()> {
        self.check_index(index)?;
        self.items[index].set_badge(badge);
        let intrinsic = self.items[index].display().content_height();
        self.container.set_intrinsic(index, intrinsic);
        self.dirty = true;
        Ok(())
    }

    pub fn set_indicator_gravity(&mut self, gravity: crate::types::IndicatorGravity) {
        self.indicator.set_gravity(gravity);
        self.container.request_layout();
    }

    pub fn set_indicator_thickness(&mut self, thickness: u16) {
        self.indicator.set_thickness(thickness);
        self.container.request_layout();
    }

    /// Timing of indicator moves and scrolling. Running transitions keep their old timing.
    pub fn set_transition(&mut self, transition: TransitionConfig) {
        self.indicator.set_transition(transition);
        self.container.set_transition(transition);
    }

    pub fn needs_layout(&self) -> bool {
        self.container.needs_layout() || self.indicator.is_pending_layout()
    }

    /// Measure and place every tab, then resolve indicator geometry.
    pub fn layout(&mut self, viewport: Rect) {
        self.container.set_padding(self.indicator.reserved_padding());
        self.container.layout(viewport);
        self.indicator.on_layout_resolved(viewport.width);

        let first_extent = self.container.slot(0).map_or(0, |slot| slot.rect.height);
        self.indicator
            .recompute_main_axis_length(first_extent, &self.strategy);
        self.dirty = true;
    }

    /// Re-run layout against the last viewport if anything is stale.
    pub fn ensure_layout(&mut self) {
        if self.needs_layout() && self.container.is_laid_out() {
            let viewport = self.container.viewport();
            self.layout(viewport);
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        self.container.hit_test(x, y)
    }

    pub(crate) fn scroll_into_view(&mut self, index: usize, now: Instant) -> bool {
        self.container.scroll_into_view(index, now)
    }

    /// Advance indicator and scroll animations. Returns true when a redraw is due.
    pub fn tick(&mut self, now: Instant) -> bool {
        let indicator = self.indicator.tick(now);
        let scroll = self.container.tick(now);
        if let Frame::Settled(offset) = indicator {
            log::trace!("[strip] indicator settled at {offset}");
        }
        let dirty = std::mem::take(&mut self.dirty) | self.indicator.take_dirty();
        indicator.needs_redraw() || scroll.needs_redraw() || dirty
    }
}
