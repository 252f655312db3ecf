/// Edge placement: off-screen points beyond the viewport edge nearest a card.

use crate::core::config;
use crate::core::types::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Nearest viewport edge to `(x, y)`. Ties resolve left, right, top, bottom.
pub fn nearest_edge(x: f64, y: f64, width: f64, height: f64) -> Edge {
    let distances = [
        (Edge::Left, x),
        (Edge::Right, width - x),
        (Edge::Top, y),
        (Edge::Bottom, height - y),
    ];
    let min = distances
        .iter()
        .map(|&(_, d)| d)
        .fold(f64::INFINITY, f64::min);

    distances
        .iter()
        .find(|&&(_, d)| d == min)
        .map(|&(edge, _)| edge)
        .unwrap_or(Edge::Left)
}

/// Point `EDGE_OFFSET` beyond the edge nearest `(x, y)`, jittered by up to
/// `EDGE_JITTER` along that edge.
pub fn resolve_edge<R: Rng>(x: f64, y: f64, width: f64, height: f64, rng: &mut R) -> Vec2 {
    let jitter = rng.gen_range(-config::EDGE_JITTER..config::EDGE_JITTER);
    match nearest_edge(x, y, width, height) {
        Edge::Left => Vec2::new(-config::EDGE_OFFSET, y + jitter),
        Edge::Right => Vec2::new(width + config::EDGE_OFFSET, y + jitter),
        Edge::Top => Vec2::new(x + jitter, -config::EDGE_OFFSET),
        Edge::Bottom => Vec2::new(x + jitter, height + config::EDGE_OFFSET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_nearest_edge_each_side() {
        assert_eq!(nearest_edge(10.0, 300.0, 1000.0, 600.0), Edge::Left);
        assert_eq!(nearest_edge(990.0, 300.0, 1000.0, 600.0), Edge::Right);
        assert_eq!(nearest_edge(500.0, 5.0, 1000.0, 600.0), Edge::Top);
        assert_eq!(nearest_edge(500.0, 590.0, 1000.0, 600.0), Edge::Bottom);
    }

    #[test]
    fn test_ties_prefer_earlier_edge() {
        // Dead center of a square: all four distances are equal.
        assert_eq!(nearest_edge(50.0, 50.0, 100.0, 100.0), Edge::Left);
        // Right and top tie.
        assert_eq!(nearest_edge(90.0, 10.0, 100.0, 100.0), Edge::Right);
        // Top and bottom tie, left/right farther.
        assert_eq!(nearest_edge(100.0, 50.0, 200.0, 100.0), Edge::Top);
    }

    #[test]
    fn test_resolved_point_is_off_screen_on_edge_axis() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let left = resolve_edge(10.0, 300.0, 1000.0, 600.0, &mut rng);
            assert_eq!(left.x, -300.0);
            assert!((left.y - 300.0).abs() <= 200.0);

            let right = resolve_edge(990.0, 300.0, 1000.0, 600.0, &mut rng);
            assert_eq!(right.x, 1300.0);

            let top = resolve_edge(500.0, 5.0, 1000.0, 600.0, &mut rng);
            assert_eq!(top.y, -300.0);
            assert!((top.x - 500.0).abs() <= 200.0);

            let bottom = resolve_edge(500.0, 590.0, 1000.0, 600.0, &mut rng);
            assert_eq!(bottom.y, 900.0);
        }
    }

    #[test]
    fn test_points_outside_viewport_still_resolve() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = resolve_edge(-50.0, 300.0, 1000.0, 600.0, &mut rng);
        assert_eq!(p.x, -300.0);
    }
}
