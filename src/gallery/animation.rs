/// Animation clock and easing curves for card and heading motion.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    /// Accelerating cubic: t^3
    In,
    /// Decelerating cubic: 1 - (1 - t)^3
    Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::In => t * t * t,
            Ease::Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Animation {
    elapsed: f64,
    duration: f64,
    active: bool,
    ease: Ease,
}

impl Animation {
    pub fn new(ease: Ease) -> Self {
        Self {
            elapsed: 0.0,
            duration: 0.0,
            active: false,
            ease,
        }
    }

    pub fn start(&mut self, duration_ms: f64) {
        self.elapsed = 0.0;
        self.duration = duration_ms;
        self.active = true;
    }

    /// Advance by `dt_ms`. Returns the time left over past the end, if it finished.
    pub fn update(&mut self, dt_ms: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        self.elapsed += dt_ms;
        if self.elapsed >= self.duration {
            let overflow = self.elapsed - self.duration;
            self.elapsed = self.duration;
            self.active = false;
            return Some(overflow);
        }
        None
    }

    /// Returns eased progress (0.0..=1.0).
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease.apply(self.elapsed / self.duration)
    }

    pub fn is_complete(&self) -> bool {
        !self.active && self.elapsed >= self.duration
    }
}

/// Linear interpolation between two values.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Frame-rate independent approach toward `target`.
pub fn smooth_towards(current: f64, target: f64, dt_ms: f64, speed: f64) -> f64 {
    let factor = 1.0 - (-speed * dt_ms / 1000.0).exp();
    current + (target - current) * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::In, Ease::Out] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_lags_and_ease_out_leads() {
        assert!(Ease::In.apply(0.5) < 0.5);
        assert!(Ease::Out.apply(0.5) > 0.5);
    }

    #[test]
    fn test_animation_reports_overflow_on_finish() {
        let mut anim = Animation::new(Ease::Linear);
        anim.start(100.0);
        assert_eq!(anim.update(60.0), None);
        assert!((anim.progress() - 0.6).abs() < 1e-9);
        assert_eq!(anim.update(60.0), Some(20.0));
        assert!(anim.is_complete());
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut anim = Animation::new(Ease::Out);
        anim.start(0.0);
        assert_eq!(anim.update(0.0), Some(0.0));
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_smooth_towards_converges() {
        let mut v = 0.0;
        for _ in 0..200 {
            v = smooth_towards(v, 100.0, 16.0, 6.0);
        }
        assert!((v - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
    }
}
