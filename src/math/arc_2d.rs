/// 2D arc math utilities.
///
/// Bulge convention: `bulge = tan(sweep_angle / 4)`.
/// - `bulge = 0`: straight line
/// - `bulge > 0`: arc in the positive-angle direction (SVG sweep flag 1)
/// - `bulge < 0`: arc in the negative-angle direction (SVG sweep flag 0)
/// - `|bulge| = 1`: semicircle
use std::f64::consts::{PI, TAU};

use super::{Point2, Vector2};

/// Center/radius/angle form of a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    /// Signed sweep in radians, positive in the positive-angle direction.
    pub sweep: f64,
}

/// Converts a bulge-defined arc segment to center-radius-angle form.
///
/// Zero-length chords and zero bulges come back with radius `0` and the
/// center at `p0`.
#[must_use]
pub fn arc_from_bulge(p0: Point2, p1: Point2, bulge: f64) -> ArcGeometry {
    let d = p1 - p0;
    let chord_len = d.norm();

    if chord_len < 1e-12 || bulge.abs() < 1e-12 {
        return ArcGeometry {
            center: p0,
            radius: 0.0,
            start_angle: 0.0,
            sweep: 0.0,
        };
    }

    // Distance from chord midpoint to center, in half-chord units.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = nalgebra::center(&p0, &p1);
    let normal = Vector2::new(-d.y, d.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|) from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);

    ArcGeometry {
        center,
        radius,
        start_angle,
        sweep: 4.0 * bulge.atan(),
    }
}

/// Bulge of an arc with the given signed sweep angle.
#[must_use]
pub fn bulge_from_sweep(sweep: f64) -> f64 {
    (sweep / 4.0).tan()
}

/// Center of an SVG small arc (`large-arc-flag = 0`, no rotation).
///
/// Follows the SVG endpoint-to-center conversion. A radius too small to span
/// the chord is scaled up the way SVG renderers do, which puts the center on
/// the chord midpoint.
#[must_use]
pub fn svg_small_arc_center(p1: Point2, p2: Point2, radius: f64, sweep_flag: bool) -> Point2 {
    let mid = nalgebra::center(&p1, &p2);
    let half = (p1 - p2) * 0.5;
    let half_sq = half.norm_squared();
    if half_sq < 1e-24 {
        return mid;
    }
    let r_sq = radius * radius;
    let factor = ((r_sq - half_sq) / half_sq).max(0.0).sqrt();
    let sign = if sweep_flag { 1.0 } else { -1.0 };
    mid + Vector2::new(half.y, -half.x) * (sign * factor)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(arc: &ArcGeometry, t: f64) -> Point2 {
    let angle = arc.start_angle + arc.sweep * t;
    arc.center + Vector2::new(angle.cos(), angle.sin()) * arc.radius
}

/// Normalizes an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Returns whether the arc passes through the direction `angle`
/// (measured from its center).
#[must_use]
pub fn arc_contains_angle(arc: &ArcGeometry, angle: f64) -> bool {
    if arc.sweep.abs() >= TAU {
        return true;
    }
    let rel = if arc.sweep >= 0.0 {
        normalize_angle(angle - arc.start_angle)
    } else {
        normalize_angle(arc.start_angle - angle)
    };
    rel <= arc.sweep.abs()
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(θ/2)), solved for θ at the tolerance
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}
