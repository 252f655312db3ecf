/// Smooth scrolling: a damped scroll position chasing a wheel-driven target.
///
/// Driven externally by `raf(dt)` once per frame. Every recomputation that
/// moves the position queues a `ScrollEvent` for the frame loop to drain.

use crate::core::config;
use crate::core::error::{GalleryError, Result};
use crate::gallery::animation::smooth_towards;

#[derive(Debug, Clone, Copy)]
pub struct SmoothScrollOptions {
    /// Fraction of the remaining distance covered per 60 Hz frame, in (0, 1].
    pub lerp: f64,
    pub wheel_multiplier: f64,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            lerp: config::SMOOTH_LERP,
            wheel_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub scroll: f64,
    pub limit: f64,
    /// Pixels moved in this recomputation.
    pub velocity: f64,
}

#[derive(Debug)]
pub struct SmoothScroll {
    options: SmoothScrollOptions,
    animated: f64,
    target: f64,
    limit: f64,
    pending: Vec<ScrollEvent>,
}

impl SmoothScroll {
    pub fn new(options: SmoothScrollOptions) -> Result<Self> {
        if !(options.lerp > 0.0 && options.lerp <= 1.0) {
            return Err(GalleryError::SmoothScrollUnavailable(format!(
                "lerp must be in (0, 1], got {}",
                options.lerp
            )));
        }
        if !options.wheel_multiplier.is_finite() || options.wheel_multiplier <= 0.0 {
            return Err(GalleryError::SmoothScrollUnavailable(format!(
                "wheel multiplier must be positive, got {}",
                options.wheel_multiplier
            )));
        }
        Ok(Self {
            options,
            animated: 0.0,
            target: 0.0,
            limit: 0.0,
            pending: Vec::new(),
        })
    }

    pub fn scroll(&self) -> f64 {
        self.animated
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Set the maximum scroll position, clamping both position and target.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.animated = self.animated.clamp(0.0, self.limit);
    }

    /// Wheel or keyboard input: move the target by `delta` pixels.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.target + delta * self.options.wheel_multiplier);
    }

    pub fn scroll_to(&mut self, position: f64) {
        self.target = position.clamp(0.0, self.limit);
    }

    pub fn is_scrolling(&self) -> bool {
        self.animated != self.target
    }

    /// Per-frame update on the shared clock.
    pub fn raf(&mut self, dt_ms: f64) {
        if !self.is_scrolling() {
            return;
        }

        let previous = self.animated;
        let speed = self.options.lerp * 60.0;
        let next = smooth_towards(self.animated, self.target, dt_ms, speed);
        self.animated = if (self.target - next).abs() < config::SMOOTH_SNAP_PX {
            self.target
        } else {
            next
        };

        if self.animated != previous {
            self.pending.push(ScrollEvent {
                scroll: self.animated,
                limit: self.limit,
                velocity: self.animated - previous,
            });
        }
    }

    /// Drain queued scroll events.
    pub fn take_events(&mut self) -> Vec<ScrollEvent> {
        std::mem::take(&mut self.pending)
    }
}
