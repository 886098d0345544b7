//! Vertical, scrollable linear container.
//!
//! The container knows nothing about tabs: it holds one slot per child with
//! its [`TabLayoutParams`] and intrinsic height, resolves slot rectangles on
//! each layout pass, hit-tests points, and owns the smoothly animated scroll
//! offset. Slot rectangles use absolute x but content-relative y (0 is the
//! top of the scrolled content), so they stay valid while scrolling.

use std::time::Instant;

use super::mode::{MainSize, TabLayoutParams};
use super::Rect;
use crate::animation::{AnimatedValue, Frame};
use crate::transitions::TransitionConfig;
use crate::types::Edges;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub params: TabLayoutParams,
    /// Height of the child's content, used by [`MainSize::Wrap`].
    pub intrinsic: u16,
    /// Resolved rectangle in content coordinates.
    pub rect: Rect,
}

#[derive(Debug, Clone)]
pub struct StripContainer {
    slots: Vec<Slot>,
    padding: Edges,
    viewport: Rect,
    content_height: u16,
    scroll: AnimatedValue,
    needs_layout: bool,
    laid_out: bool,
}

impl StripContainer {
    pub fn new(transition: TransitionConfig) -> Self {
        Self {
            slots: Vec::new(),
            padding: Edges::NONE,
            viewport: Rect::default(),
            content_height: 0,
            scroll: AnimatedValue::new(0.0, transition),
            needs_layout: true,
            laid_out: false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn push(&mut self, params: TabLayoutParams, intrinsic: u16) {
        self.slots.push(Slot {
            params,
            intrinsic,
            rect: Rect::default(),
        });
        self.request_layout();
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.slots.len() {
            self.slots.remove(index);
            self.request_layout();
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.scroll.snap(0.0);
        self.request_layout();
    }

    pub fn set_params(&mut self, index: usize, params: TabLayoutParams) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.params = params;
            self.request_layout();
        }
    }

    pub fn set_intrinsic(&mut self, index: usize, intrinsic: u16) {
        if let Some(slot) = self.slots.get_mut(index) {
            if slot.intrinsic != intrinsic {
                slot.intrinsic = intrinsic;
                self.request_layout();
            }
        }
    }

    pub fn padding(&self) -> Edges {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Edges) {
        if self.padding != padding {
            self.padding = padding;
            self.request_layout();
        }
    }

    pub fn set_transition(&mut self, transition: TransitionConfig) {
        self.scroll.set_config(transition);
    }

    /// Mark geometry stale; resolved by the next [`layout`](Self::layout).
    pub fn request_layout(&mut self) {
        self.needs_layout = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// True once a layout pass has run against a real viewport.
    pub fn is_laid_out(&self) -> bool {
        self.laid_out
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn max_scroll(&self) -> f32 {
        self.content_height.saturating_sub(self.viewport.height) as f32
    }

    pub fn scroll(&self) -> f32 {
        self.scroll.value()
    }

    /// Resolve every slot rectangle for `viewport`.
    pub fn layout(&mut self, viewport: Rect) {
        self.viewport = viewport;
        let inner = viewport.inset(self.padding);
        let main_size = inner.height as u32;

        // First pass: fixed sizes, margins and total flex weight
        let mut fixed_total = 0u32;
        let mut total_weight = 0.0f32;
        for slot in &self.slots {
            let fixed = match slot.params.main {
                MainSize::Fixed(n) => n,
                MainSize::Wrap => slot.intrinsic,
                MainSize::Weighted(w) => {
                    total_weight += w.max(0.0);
                    0
                }
            };
            fixed_total = fixed_total
                .saturating_add(slot.params.leading_margin() as u32)
                .saturating_add(fixed as u32);
        }

        let remaining = main_size.saturating_sub(fixed_total) as f32;

        // Second pass: assign rects top to bottom
        let mut offset = self.padding.top as u32;
        for slot in &mut self.slots {
            offset = offset.saturating_add(slot.params.leading_margin() as u32);
            let main = match slot.params.main {
                MainSize::Fixed(n) => n,
                MainSize::Wrap => slot.intrinsic,
                MainSize::Weighted(w) if total_weight > 0.0 => {
                    (remaining * w.max(0.0) / total_weight) as u16
                }
                MainSize::Weighted(_) => 0,
            };
            // Slots past the end of the u16 range collapse at its edge
            let y = clamp_u16(offset);
            slot.rect = Rect::new(inner.x, y, inner.width, main.min(u16::MAX - y));
            offset = offset.saturating_add(main as u32);
        }

        // Fill the viewport even when the content is shorter
        let content = offset.saturating_add(self.padding.bottom as u32);
        self.content_height = clamp_u16(content).max(viewport.height);

        let max_scroll = self.max_scroll();
        if self.scroll.value() > max_scroll || self.scroll.target() > max_scroll {
            self.scroll.snap(max_scroll);
        }

        self.needs_layout = false;
        self.laid_out = !viewport.is_empty();

        log::trace!(
            "[container] layout {} slots in {:?}, content height {}",
            self.slots.len(),
            viewport,
            self.content_height
        );
    }

    /// Convert a content-relative y into a screen y.
    pub fn to_screen_y(&self, content_y: f32) -> f32 {
        self.viewport.y as f32 + content_y - self.scroll.value()
    }

    /// Slot index at screen coordinates, honouring the scroll offset.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        if !self.viewport.contains(x, y) {
            return None;
        }

        let content_y = (y - self.viewport.y) as f32 + self.scroll.value();
        let content_y = clamp_u16(content_y.max(0.0) as u32);

        self.slots
            .iter()
            .position(|slot| slot.rect.contains(x, content_y))
    }

    /// Smoothly scroll so the slot's centre sits at the viewport centre.
    ///
    /// Returns false when the slot is unknown or already in place.
    pub fn scroll_into_view(&mut self, index: usize, now: Instant) -> bool {
        let Some(slot) = self.slots.get(index) else {
            return false;
        };

        let target = slot.rect.center_y() as f32 - (self.viewport.height / 2) as f32;
        let target = target.clamp(0.0, self.max_scroll());
        self.scroll.animate_to(target, now)
    }

    pub fn tick(&mut self, now: Instant) -> Frame {
        self.scroll.tick(now)
    }
}

fn clamp_u16(value: u32) -> u16 {
    value.min(u16::MAX as u32) as u16
}
