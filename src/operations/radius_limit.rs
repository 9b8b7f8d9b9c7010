use crate::geometry::PolygonPoint;
use crate::math::TOLERANCE;

/// Largest radius two adjacent corners can both be rounded by without their
/// arcs overlapping on the shared edge.
///
/// # Derivation
///
/// An arc of radius `r` tangent to both edges of a corner with half-angle `α`
/// touches each edge at distance `r / tan(α)` from the vertex. For corners `a`
/// and `b` on an edge of length `s` the two tangent points must not cross:
///
/// ```text
/// r / tan(α) + r / tan(β) = s
/// r = s · sin(α) · sin(β) / sin(α + β)
/// ```
///
/// `sin(α + β) = sin(π − α − β)`, so this is the same closed form written
/// with the supplementary angle. For `α = β` it reduces to `s · tan(α) / 2`.
///
/// Returns `0.0` for a zero-length edge or a zero half-angle and
/// `f64::INFINITY` when both corners are straight (the edge imposes no limit).
#[must_use]
pub fn max_common_radius(a: &PolygonPoint, b: &PolygonPoint) -> f64 {
    let s = (a.position - b.position).norm();
    if s < TOLERANCE {
        return 0.0;
    }
    let alpha = a.angle * 0.5;
    let beta = b.angle * 0.5;
    if alpha < TOLERANCE || beta < TOLERANCE {
        return 0.0;
    }
    let denom = (alpha + beta).sin();
    if denom < TOLERANCE {
        return f64::INFINITY;
    }
    s * alpha.sin() * beta.sin() / denom
}

/// Radius actually applied at corner `index`: the tighter of the limits
/// imposed by its two edges, scaled by the rounding `ratio`.
///
/// `ratio = 0` always yields `0`, even when both limits are unbounded.
#[must_use]
pub fn usable_radius(points: &[PolygonPoint], index: usize, ratio: f64) -> f64 {
    let n = points.len();
    let p = &points[index];
    let prev = &points[(index + n - 1) % n];
    let next = &points[(index + 1) % n];
    let limit = max_common_radius(p, prev).min(max_common_radius(p, next));
    if ratio <= 0.0 || limit <= 0.0 {
        return 0.0;
    }
    limit * ratio
}
