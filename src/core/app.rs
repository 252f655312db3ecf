/// Composition root: wires input, smooth scrolling, the pinned scroll trigger
/// and the orchestrator into one per-frame step.

use super::config::{self, GalleryConfig};
use super::orchestrator::Orchestrator;
use super::types::{KeyEvent, MouseEvent};
use crate::scroll::scroll_trigger::ScrollTrigger;
use crate::scroll::smooth_scroll::SmoothScroll;
use rand::Rng;

// X11 keycodes
pub const KEY_ESCAPE: u32 = 9;
pub const KEY_Q: u32 = 24;
pub const KEY_SPACE: u32 = 65;
pub const KEY_HOME: u32 = 110;
pub const KEY_UP: u32 = 111;
pub const KEY_PAGE_UP: u32 = 112;
pub const KEY_END: u32 = 115;
pub const KEY_DOWN: u32 = 116;
pub const KEY_PAGE_DOWN: u32 = 117;

pub struct GalleryApp<R: Rng> {
    orchestrator: Orchestrator<R>,
    smooth: SmoothScroll,
    trigger: ScrollTrigger,
    viewport_height: f64,
}

impl<R: Rng> GalleryApp<R> {
    pub fn new(
        config: GalleryConfig,
        width: f64,
        height: f64,
        mut smooth: SmoothScroll,
        rng: R,
    ) -> Self {
        let trigger = ScrollTrigger::new(height);
        smooth.set_limit(trigger.distance());
        Self {
            orchestrator: Orchestrator::new(config, width, height, rng),
            smooth,
            trigger,
            viewport_height: height,
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator<R> {
        &self.orchestrator
    }

    pub fn smooth_scroll(&self) -> &SmoothScroll {
        &self.smooth
    }

    pub fn trigger(&self) -> &ScrollTrigger {
        &self.trigger
    }

    /// Scroll progress at the current (smoothed) scroll position.
    pub fn progress(&self) -> f64 {
        self.trigger.progress_at(self.smooth.scroll())
    }

    pub fn handle_mouse(&mut self, e: &MouseEvent) {
        // Wheel up reports +1; scrolling up moves toward the start.
        if e.scroll_y.abs() > 0.01 {
            log::trace!("wheel {:+} at ({:.0}, {:.0})", e.scroll_y, e.x, e.y);
            self.smooth.scroll_by(-e.scroll_y * config::WHEEL_STEP_PX);
        }
    }

    /// Returns true if the key asks to quit.
    pub fn handle_key(&mut self, e: &KeyEvent) -> bool {
        if !e.pressed {
            return false;
        }

        match e.keycode {
            KEY_ESCAPE => return true,
            KEY_Q if e.ctrl => return true,
            KEY_DOWN => self.smooth.scroll_by(config::ARROW_STEP_PX),
            KEY_UP => self.smooth.scroll_by(-config::ARROW_STEP_PX),
            KEY_PAGE_DOWN => self.smooth.scroll_by(self.viewport_height),
            KEY_SPACE if e.shift => self.smooth.scroll_by(-self.viewport_height),
            KEY_SPACE => self.smooth.scroll_by(self.viewport_height),
            KEY_PAGE_UP => self.smooth.scroll_by(-self.viewport_height),
            KEY_HOME => self.smooth.scroll_to(0.0),
            KEY_END => self.smooth.scroll_to(self.smooth.limit()),
            _ => {}
        }
        false
    }

    /// Viewport changed size: reset the cards, re-pin, and re-map progress.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.viewport_height = height;
        self.orchestrator.resize(width, height);

        self.trigger.refresh(height);
        self.smooth.set_limit(self.trigger.distance());
        if let Some(progress) = self.trigger.update(self.smooth.scroll()) {
            self.orchestrator.on_progress(progress);
        }
    }

    /// One frame on the shared clock.
    pub fn frame(&mut self, dt_ms: f64) {
        self.smooth.raf(dt_ms);
        for event in self.smooth.take_events() {
            if let Some(progress) = self.trigger.update(event.scroll) {
                self.orchestrator.on_progress(progress);
            }
        }
        self.orchestrator.tick(dt_ms);
    }
}
