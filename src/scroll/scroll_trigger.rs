/// Pinned-section scroll tracking: normalized progress through the pin distance.

use crate::core::config;

#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    pin_multiplier: f64,
    distance: f64,
    last_progress: Option<f64>,
}

impl ScrollTrigger {
    /// Pin for `PIN_MULTIPLIER` viewport heights of scrolling.
    pub fn new(viewport_height: f64) -> Self {
        Self::with_multiplier(viewport_height, config::PIN_MULTIPLIER)
    }

    pub fn with_multiplier(viewport_height: f64, pin_multiplier: f64) -> Self {
        Self {
            pin_multiplier,
            distance: pin_multiplier * viewport_height.max(0.0),
            last_progress: None,
        }
    }

    /// Scroll distance the section stays pinned for.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn progress_at(&self, scroll: f64) -> f64 {
        if self.distance <= 0.0 {
            return 0.0;
        }
        (scroll / self.distance).clamp(0.0, 1.0)
    }

    /// Progress notification: `Some` only when progress differs from the last one reported.
    pub fn update(&mut self, scroll: f64) -> Option<f64> {
        let progress = self.progress_at(scroll);
        if self.last_progress == Some(progress) {
            return None;
        }
        self.last_progress = Some(progress);
        Some(progress)
    }

    /// Recompute the pin distance for a new viewport height. The next
    /// `update` always notifies.
    pub fn refresh(&mut self, viewport_height: f64) {
        self.distance = self.pin_multiplier * viewport_height.max(0.0);
        self.last_progress = None;
        log::debug!("scroll trigger refreshed: distance {:.0}", self.distance);
    }
}
