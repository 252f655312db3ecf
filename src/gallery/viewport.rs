/// Viewport tracker: placement geometry from the current window size.

use crate::core::config;
use crate::core::types::Geometry;

/// Derive center point and placement radii for a `width` x `height` window.
///
/// Pure; call again on every resize rather than caching across sizes.
pub fn compute_geometry(width: f64, height: f64) -> Geometry {
    let short_side = width.min(height);
    Geometry {
        width,
        height,
        center_x: width / 2.0,
        center_y: height / 2.0,
        range_min: config::RANGE_MIN_FACTOR * short_side,
        range_max: config::RANGE_MAX_FACTOR * short_side,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_half_of_window() {
        let g = compute_geometry(1280.0, 720.0);
        assert_eq!(g.center_x, 640.0);
        assert_eq!(g.center_y, 360.0);
    }

    #[test]
    fn test_range_uses_short_side() {
        let g = compute_geometry(1280.0, 720.0);
        assert!((g.range_min - 252.0).abs() < 1e-9);
        assert!((g.range_max - 504.0).abs() < 1e-9);

        let portrait = compute_geometry(400.0, 900.0);
        assert!((portrait.range_min - 140.0).abs() < 1e-9);
        assert!((portrait.range_max - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_range_is_positive_and_ordered() {
        for &(w, h) in &[(1.0, 1.0), (320.0, 568.0), (1920.0, 1080.0), (3840.0, 400.0)] {
            let g = compute_geometry(w, h);
            assert!(g.range_min > 0.0);
            assert!(g.range_min < g.range_max);
        }
    }
}
