use std::f64::consts::PI;

use crate::error::Result;
use crate::math::vector_2d::angle_between;
use crate::math::Point2;

/// A polygon vertex paired with its interior angle.
///
/// The angle is the unsigned angle between the two edges leaving the vertex,
/// in `[0, π]`. It depends only on the vertex and its immediate neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonPoint {
    pub position: Point2,
    pub angle: f64,
}

/// Interior angle at `p` between the edges towards `prev` and `next`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateVector` if `p` coincides with either
/// neighbour.
pub fn interior_angle(prev: &Point2, p: &Point2, next: &Point2) -> Result<f64> {
    angle_between(prev - p, next - p)
}

/// Computes the interior angle of every vertex of a closed polygon.
///
/// Each angle is computed exactly once, in index order, before any arc is
/// built. A vertex that coincides with a neighbour has no defined angle and
/// is recorded as straight (`π`) so that it is never rounded.
#[must_use]
pub fn build_corners(vertices: &[Point2]) -> Vec<PolygonPoint> {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let prev = &vertices[(i + n - 1) % n];
            let next = &vertices[(i + 1) % n];
            let p = vertices[i];
            let angle = interior_angle(prev, &p, next).unwrap_or_else(|err| {
                tracing::debug!(index = i, %err, "coincident neighbour, corner kept sharp");
                PI
            });
            PolygonPoint { position: p, angle }
        })
        .collect()
}
