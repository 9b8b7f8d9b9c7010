use std::f64::consts::PI;

use super::StarConfig;
use crate::math::Point2;

/// Vertices of the star described by `config`, in a unit frame centered on
/// the origin.
///
/// Produces `2 × corners` vertices at evenly spaced angles starting at
/// `tilt`, alternating between the outer radius and the inner radius
/// (`outer_radius × inner_radius_ratio`).
#[must_use]
pub fn star_vertices(config: &StarConfig) -> Vec<Point2> {
    let count = config.corners * 2;
    let step = PI / f64::from(config.corners);
    let tilt = config.tilt.to_radians();
    let inner = config.outer_radius * config.inner_radius_ratio;

    (0..count)
        .map(|i| {
            let angle = tilt + f64::from(i) * step;
            let r = if i % 2 == 0 { config.outer_radius } else { inner };
            Point2::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}
