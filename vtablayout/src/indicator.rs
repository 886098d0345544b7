//! Indicator geometry and motion.
//!
//! The main axis runs along the strip (vertical), the cross axis across it.
//! Main-axis position is tracked as an [`AnimatedValue`]; a live drag jumps it,
//! a discrete selection animates it, and either one cancels the other.
//!
//! Cross-axis placement depends on the strip width, which is only known after
//! layout. Gravity changes therefore apply what they can immediately and
//! finish in [`IndicatorEngine::on_layout_resolved`].

use std::time::Instant;

use crate::animation::{AnimatedValue, Frame};
use crate::config::TabLayoutConfig;
use crate::layout::LayoutModeStrategy;
use crate::transitions::TransitionConfig;
use crate::types::{Color, Edges, IndicatorGravity};

/// Everything needed to draw the indicator, in strip coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorGeometry {
    pub cross_offset: u16,
    pub thickness: u16,
    /// Leading edge along the scroll axis, content-relative.
    pub main_offset: f32,
    /// Drawn length along the scroll axis (one tab's extent).
    pub main_extent: u16,
    pub corner_radius: u16,
    pub color: Color,
}

#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    gravity: IndicatorGravity,
    thickness: u16,
    /// Thickness to restore when leaving `Fill`.
    cached_thickness: Option<u16>,
    cross_offset: u16,
    cross_extent: u16,
    pending_resolve: bool,
    offset: AnimatedValue,
    main_axis_length: f32,
    tab_extent: u16,
    /// Index the indicator rests on (or is animating to); `None` while tracking a drag.
    resting_index: Option<usize>,
    corner_radius: u16,
    color: Color,
    dirty: bool,
}

impl IndicatorEngine {
    pub fn new(config: &TabLayoutConfig) -> Self {
        let mut engine = Self {
            gravity: IndicatorGravity::Leading,
            thickness: config.indicator_thickness,
            cached_thickness: None,
            cross_offset: 0,
            cross_extent: 0,
            pending_resolve: false,
            offset: AnimatedValue::new(0.0, config.transition),
            main_axis_length: 0.0,
            tab_extent: 0,
            resting_index: None,
            corner_radius: config.indicator_corner_radius,
            color: config.indicator_color,
            dirty: true,
        };
        engine.set_gravity(config.indicator_gravity);
        engine
    }

    pub fn gravity(&self) -> IndicatorGravity {
        self.gravity
    }

    pub fn thickness(&self) -> u16 {
        self.thickness
    }

    pub fn cross_offset(&self) -> u16 {
        self.cross_offset
    }

    pub fn main_axis_offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn main_axis_length(&self) -> f32 {
        self.main_axis_length
    }

    pub fn resting_index(&self) -> Option<usize> {
        self.resting_index
    }

    pub fn is_animating(&self) -> bool {
        self.offset.is_animating()
    }

    /// Gravity/thickness changes still waiting for a layout pass.
    pub fn is_pending_layout(&self) -> bool {
        self.pending_resolve
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn corner_radius(&self) -> u16 {
        self.corner_radius
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.dirty = true;
    }

    pub fn set_corner_radius(&mut self, radius: u16) {
        self.corner_radius = radius;
        self.dirty = true;
    }

    pub fn set_transition(&mut self, transition: TransitionConfig) {
        self.offset.set_config(transition);
    }

    /// Change cross-axis placement.
    ///
    /// `Trailing` offset and `Fill` thickness depend on the strip width and are
    /// resolved by the next [`on_layout_resolved`](Self::on_layout_resolved).
    pub fn set_gravity(&mut self, gravity: IndicatorGravity) {
        if gravity != IndicatorGravity::Fill {
            if let Some(cached) = self.cached_thickness.take() {
                self.thickness = cached;
            }
        }
        if gravity != IndicatorGravity::Trailing {
            self.cross_offset = 0;
        }

        log::debug!("[indicator] gravity {} -> {}", self.gravity, gravity);
        self.gravity = gravity;
        self.pending_resolve = true;
        self.dirty = true;
    }

    /// Set the configured thickness. Under `Fill` it is kept for when gravity changes back.
    pub fn set_thickness(&mut self, thickness: u16) {
        if self.gravity == IndicatorGravity::Fill {
            self.cached_thickness = Some(thickness);
        } else {
            self.thickness = thickness;
        }
        self.pending_resolve = true;
        self.dirty = true;
    }

    /// Space the strip must reserve beside the tabs for the indicator.
    pub fn reserved_padding(&self) -> Edges {
        match self.gravity {
            IndicatorGravity::Leading => Edges::left(self.thickness),
            IndicatorGravity::Trailing => Edges::right(self.thickness),
            IndicatorGravity::Fill => Edges::NONE,
        }
    }

    /// Second phase of the layout protocol: the strip's cross extent is known.
    pub fn on_layout_resolved(&mut self, cross_extent: u16) {
        self.cross_extent = cross_extent;
        match self.gravity {
            IndicatorGravity::Leading => self.cross_offset = 0,
            IndicatorGravity::Trailing => {
                self.cross_offset = cross_extent.saturating_sub(self.thickness);
            }
            IndicatorGravity::Fill => {
                if self.cached_thickness.is_none() {
                    self.cached_thickness = Some(self.thickness);
                }
                self.thickness = cross_extent;
                self.cross_offset = 0;
            }
        }
        if self.pending_resolve {
            log::debug!(
                "[indicator] resolved {} gravity: offset {}, thickness {}",
                self.gravity,
                self.cross_offset,
                self.thickness
            );
        }
        self.pending_resolve = false;
        self.dirty = true;
    }

    /// Recompute the per-tab step after a layout pass changed the first tab's extent.
    ///
    /// An indicator at rest snaps to the new resting position of its index.
    pub fn recompute_main_axis_length(&mut self, tab_extent: u16, strategy: &LayoutModeStrategy) {
        let length = strategy.step(tab_extent);
        let changed = length != self.main_axis_length || tab_extent != self.tab_extent;
        self.tab_extent = tab_extent;
        self.main_axis_length = length;

        if !self.offset.is_animating() {
            if let Some(index) = self.resting_index {
                let target = self.resting_offset(index);
                if self.offset.value() != target {
                    self.offset.snap(target);
                    self.dirty = true;
                }
            }
        }

        if changed {
            log::debug!("[indicator] main axis length {}", length);
            self.dirty = true;
        }
    }

    /// Offset of the indicator's leading edge when resting on `index`.
    pub fn resting_offset(&self, index: usize) -> f32 {
        index as f32 * self.main_axis_length
    }

    /// Track a live drag. Fractional and out-of-range positions are kept as-is.
    pub fn jump_to(&mut self, position: f32) {
        self.offset.snap(position * self.main_axis_length);
        self.resting_index = None;
        self.dirty = true;
        log::trace!("[indicator] jump to {position} -> {}", self.offset.value());
    }

    /// Place the indicator on `index` immediately.
    pub fn snap_to(&mut self, index: usize) {
        self.offset.snap(self.resting_offset(index));
        self.resting_index = Some(index);
        self.dirty = true;
    }

    /// Animate from the current (possibly mid-flight) position to `index`.
    ///
    /// Returns false when the indicator already rests there.
    pub fn animate_to(&mut self, index: usize, now: Instant) -> bool {
        self.resting_index = Some(index);
        let started = self.offset.animate_to(self.resting_offset(index), now);
        if started {
            log::trace!("[indicator] animate to {index}");
            self.dirty = true;
        }
        started
    }

    /// Advance a running animation.
    pub fn tick(&mut self, now: Instant) -> Frame {
        let frame = self.offset.tick(now);
        if let Frame::Settled(_) = frame {
            // Length may have changed while animating
            if let Some(index) = self.resting_index {
                self.offset.snap(self.resting_offset(index));
            }
            return Frame::Settled(self.offset.value());
        }
        frame
    }

    /// Take the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn geometry(&self) -> IndicatorGeometry {
        IndicatorGeometry {
            cross_offset: self.cross_offset,
            thickness: self.thickness,
            main_offset: self.offset.value(),
            main_extent: self.tab_extent,
            corner_radius: self.corner_radius,
            color: self.color,
        }
    }
}
