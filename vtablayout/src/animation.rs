//! Time-based interpolation of a single scalar.
//!
//! A [`Tween`] is one transition between two values. An [`AnimatedValue`] owns
//! the current value and at most one tween: retargeting replaces the running
//! tween and starts from the interpolated value, so motion stays continuous
//! while the last requested target wins.

use std::time::{Duration, Instant};

use crate::transitions::{Easing, TransitionConfig};

/// A single active transition.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Instant, config: TransitionConfig) -> Self {
        Self {
            from,
            to,
            start,
            duration: config.duration,
            easing: config.easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated value at `now`. Exactly the target once complete.
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        lerp(self.from, self.to, self.easing.apply(progress))
    }
}

/// Result of advancing an [`AnimatedValue`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Nothing in flight.
    Idle,
    /// Value moved; more frames follow.
    Moved(f32),
    /// Final frame of a tween; the value is at its target.
    Settled(f32),
}

impl Frame {
    /// True when the frame changed the value and a redraw is due.
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Frame::Idle)
    }
}

/// A scalar that can jump or animate towards a target.
#[derive(Debug, Clone, Default)]
pub struct AnimatedValue {
    value: f32,
    tween: Option<Tween>,
    config: TransitionConfig,
}

impl AnimatedValue {
    pub fn new(value: f32, config: TransitionConfig) -> Self {
        Self {
            value,
            tween: None,
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Where the value is heading (the current value when idle).
    pub fn target(&self) -> f32 {
        self.tween.map_or(self.value, |t| t.target())
    }

    pub fn set_config(&mut self, config: TransitionConfig) {
        self.config = config;
    }

    /// Cancel any tween and set the value immediately.
    pub fn snap(&mut self, value: f32) {
        self.tween = None;
        self.value = value;
    }

    /// Start animating towards `target`.
    ///
    /// Returns false when nothing needs to move: the value already rests at
    /// `target`, or the running tween is already heading there.
    pub fn animate_to(&mut self, target: f32, now: Instant) -> bool {
        if let Some(tween) = self.tween {
            if tween.target() == target {
                return false;
            }
            // Continue from where the running tween currently is
            self.value = tween.value_at(now);
        } else if self.value == target {
            return false;
        }

        if self.config.duration.is_zero() {
            self.snap(target);
            return true;
        }

        self.tween = Some(Tween::new(self.value, target, now, self.config));
        true
    }

    /// Advance to `now`.
    pub fn tick(&mut self, now: Instant) -> Frame {
        let Some(tween) = self.tween else {
            return Frame::Idle;
        };

        self.value = tween.value_at(now);
        if tween.is_complete(now) {
            self.tween = None;
            Frame::Settled(self.value)
        } else {
            Frame::Moved(self.value)
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
