/// Card layout generator: randomized polar placement around the viewport center.

use crate::core::config;
use crate::core::types::{CardDescriptor, Geometry, Vec2};
use crate::platform::surface::{Pose, Surface};
use rand::Rng;
use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

/// Image path for card `index` (zero-based) of asset set `set_number` (one-based).
pub fn asset_path(asset_root: &Path, set_number: usize, index: usize) -> PathBuf {
    asset_root
        .join(format!("set{}", set_number))
        .join(format!("img{}.jpg", index + 1))
}

/// Place `count` cards for asset set `set_number` and attach them to `surface`
/// at their resting positions.
///
/// Asset existence is not checked here; a missing file shows up later as a
/// broken-image card.
pub fn generate_layout<R: Rng>(
    set_number: usize,
    count: usize,
    geometry: &Geometry,
    asset_root: &Path,
    surface: &mut Surface,
    rng: &mut R,
) -> Vec<CardDescriptor> {
    let mut cards = Vec::with_capacity(count);

    for i in 0..count {
        let angle = rng.gen_range(0.0..TAU);
        let radius = if geometry.range_min < geometry.range_max {
            rng.gen_range(geometry.range_min..geometry.range_max)
        } else {
            geometry.range_min
        };
        let center = geometry.center() + Vec2::from_polar(angle, radius);
        let rotation = rng.gen_range(-config::REST_ROTATION_DEG..config::REST_ROTATION_DEG);

        let image_path = asset_path(asset_root, set_number, i);
        let element = surface.create(
            image_path.clone(),
            Pose {
                x: center.x,
                y: center.y,
                rotation,
                opacity: 1.0,
            },
        );

        cards.push(CardDescriptor {
            element,
            center,
            image_path,
        });
    }

    cards
}
