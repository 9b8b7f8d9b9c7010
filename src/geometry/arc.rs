use std::f64::consts::PI;

use super::PolygonPoint;
use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{cross, normalize};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Direction an arc is drawn in, encoded as the SVG `sweep-flag`.
///
/// Variants name the sign of the swept angle in the crate's y-up frame, the
/// same frame as [`cross`] and outline bulges. SVG draws in a y-down frame,
/// so a `Positive` arc appears clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Flag `0`, decreasing angle.
    Negative = 0,
    /// Flag `1`, increasing angle.
    Positive = 1,
}

impl Sweep {
    /// The value written into the arc command.
    #[must_use]
    pub fn flag(self) -> u8 {
        self as u8
    }

    /// Sweep that makes the arc from the incoming to the outgoing tangent
    /// point follow the turn of the outline at the corner.
    ///
    /// `to_prev` and `to_next` are the edge vectors from the vertex towards
    /// its neighbours.
    #[must_use]
    pub fn for_corner(to_prev: Vector2, to_next: Vector2) -> Self {
        if cross(to_prev, to_next) > 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// The rounding arc replacing one polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerArc {
    /// Index of the source corner in the polygon.
    pub corner: usize,
    pub radius: f64,
    /// Tangent point on the incoming edge.
    pub p1: Point2,
    /// Tangent point on the outgoing edge.
    pub p2: Point2,
    pub center: Point2,
    pub sweep: Sweep,
    /// Distance along the bisector from the vertex to the arc midpoint.
    pub offset: f64,
}

impl CornerArc {
    /// A zero-radius arc sitting on the vertex (sharp corner).
    #[must_use]
    pub fn degenerate(corner: usize, point: &PolygonPoint) -> Self {
        Self {
            corner,
            radius: 0.0,
            p1: point.position,
            p2: point.position,
            center: point.position,
            sweep: Sweep::Positive,
            offset: 0.0,
        }
    }

    /// Builds the arc of `radius` at corner `index`, falling back to a
    /// sharp corner when the corner has no usable bisector.
    #[must_use]
    pub fn build(points: &[PolygonPoint], index: usize, radius: f64) -> Self {
        match Self::try_build(points, index, radius) {
            Ok(arc) => arc,
            Err(err) => {
                tracing::debug!(index, %err, "corner left sharp");
                Self::degenerate(index, &points[index])
            }
        }
    }

    /// Builds the arc of `radius` at corner `index`.
    ///
    /// A zero radius produces a sharp corner directly.
    ///
    /// # Errors
    ///
    /// - `GeometryError::DegenerateCorner` if the interior angle is `0` or `π`
    ///   or the construction produces non-finite values
    /// - `GeometryError::DegenerateVector` if a neighbour coincides with the
    ///   vertex
    pub fn try_build(points: &[PolygonPoint], index: usize, radius: f64) -> Result<Self> {
        let n = points.len();
        let p = &points[index];
        let prev = &points[(index + n - 1) % n];
        let next = &points[(index + 1) % n];

        let half = p.angle * 0.5;
        if half < TOLERANCE || (PI - p.angle) < TOLERANCE {
            return Err(GeometryError::DegenerateCorner {
                index,
                angle: p.angle,
            }
            .into());
        }
        if radius <= 0.0 {
            return Ok(Self::degenerate(index, p));
        }

        let to_prev = prev.position - p.position;
        let to_next = next.position - p.position;
        let u_prev = normalize(to_prev)?;
        let u_next = normalize(to_next)?;

        let q = radius / half.sin();
        let center_dir = normalize(u_prev + u_next)?;
        let center = center_dir * q;

        let p1 = p.position + u_prev * center.dot(&u_prev);
        let p2 = p.position + u_next * center.dot(&u_next);
        let offset = q - radius;

        let finite = q.is_finite()
            && offset.is_finite()
            && p1.coords.iter().chain(p2.coords.iter()).all(|c| c.is_finite());
        if !finite {
            return Err(GeometryError::DegenerateCorner {
                index,
                angle: p.angle,
            }
            .into());
        }

        Ok(Self {
            corner: index,
            radius,
            p1,
            p2,
            center: p.position + center,
            sweep: Sweep::for_corner(to_prev, to_next),
            offset,
        })
    }

    /// Returns `true` if this arc has collapsed onto its vertex.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }

    /// Unsigned angle swept by the arc, `π − interior angle` for a rounded
    /// corner.
    #[must_use]
    pub fn sweep_angle(&self) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        let a = self.p1 - self.center;
        let b = self.p2 - self.center;
        cross(a, b).abs().atan2(a.dot(&b))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::RoundelError;
    use crate::geometry::build_corners;
    use crate::math::arc_2d::svg_small_arc_center;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    fn diamond() -> Vec<PolygonPoint> {
        build_corners(&[
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, -1.0),
        ])
    }

    #[test]
    fn right_corner_tangent_points() {
        let pts = diamond();
        let arc = CornerArc::try_build(&pts, 1, FRAC_1_SQRT_2).unwrap();
        // q = r / sin(π/4) = 1, so the center lands on the origin.
        assert_relative_eq!(arc.center.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(arc.center.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(arc.p1.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(arc.p1.y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(arc.p2.x, -0.5, epsilon = 1e-12);
        assert_relative_eq!(arc.p2.y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(arc.offset, 1.0 - FRAC_1_SQRT_2, epsilon = 1e-12);
        assert_relative_eq!(arc.sweep_angle(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn tangent_points_are_equidistant_from_center() {
        let pts = build_corners(&[
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(1.0, 3.0),
        ]);
        for i in 0..3 {
            let arc = CornerArc::try_build(&pts, i, 0.3).unwrap();
            assert_relative_eq!((arc.p1 - arc.center).norm(), 0.3, epsilon = 1e-12);
            assert_relative_eq!((arc.p2 - arc.center).norm(), 0.3, epsilon = 1e-12);
        }
    }

    #[test]
    fn sweep_flag_reproduces_center() {
        // Both orientations: the SVG endpoint parameterisation with our flag
        // must land on the center we constructed.
        let ccw = build_corners(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let cw: Vec<_> = ccw.iter().rev().copied().collect();
        for pts in [&ccw, &cw] {
            for i in 0..pts.len() {
                let arc = CornerArc::try_build(pts, i, 0.4).unwrap();
                let c = svg_small_arc_center(arc.p1, arc.p2, arc.radius, arc.sweep == Sweep::Positive);
                assert_relative_eq!(c.x, arc.center.x, epsilon = 1e-9);
                assert_relative_eq!(c.y, arc.center.y, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn reversed_winding_flips_sweep() {
        let pts = diamond();
        let rev: Vec<_> = pts.iter().rev().copied().collect();
        let a = CornerArc::try_build(&pts, 0, 0.2).unwrap();
        let b = CornerArc::try_build(&rev, 3, 0.2).unwrap();
        assert_ne!(a.sweep, b.sweep);
    }

    #[test]
    fn straight_corner_is_degenerate() {
        let pts = build_corners(&[
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        let err = CornerArc::try_build(&pts, 1, 0.5).unwrap_err();
        assert!(matches!(
            err,
            RoundelError::Geometry(GeometryError::DegenerateCorner { index: 1, .. })
        ));

        let arc = CornerArc::build(&pts, 1, 0.5);
        assert!(arc.is_degenerate());
        assert_eq!(arc.p1, Point2::new(1.0, 0.0));
        assert_eq!(arc.p2, Point2::new(1.0, 0.0));
        assert!(arc.offset.abs() < 1e-15);
    }

    #[test]
    fn spike_corner_is_degenerate() {
        // Both neighbours of (2, 0) lie along -x: interior angle 0.
        let pts = build_corners(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, -1.0),
        ]);
        assert!(pts[1].angle.abs() < 1e-12);
        let err = CornerArc::try_build(&pts, 1, 0.5).unwrap_err();
        assert!(matches!(
            err,
            RoundelError::Geometry(GeometryError::DegenerateCorner { index: 1, .. })
        ));

        let arc = CornerArc::build(&pts, 1, 0.5);
        assert!(arc.is_degenerate());
        assert_eq!(arc.p1, Point2::new(2.0, 0.0));
        assert_eq!(arc.p2, Point2::new(2.0, 0.0));
        assert_eq!(arc.center, Point2::new(2.0, 0.0));
    }

    #[test]
    fn positive_winding_gives_positive_sweep() {
        // Counter-clockwise in y-up: every corner turns by a positive angle.
        let pts = diamond();
        for i in 0..pts.len() {
            let arc = CornerArc::try_build(&pts, i, 0.3).unwrap();
            assert_eq!(arc.sweep, Sweep::Positive);
            assert_eq!(arc.sweep.flag(), 1);
            let turn = cross(arc.p1 - arc.center, arc.p2 - arc.center);
            assert!(turn > 0.0);
        }
        let rev: Vec<_> = pts.iter().rev().copied().collect();
        let arc = CornerArc::try_build(&rev, 0, 0.3).unwrap();
        assert_eq!(arc.sweep, Sweep::Negative);
        assert_eq!(arc.sweep.flag(), 0);
    }

    #[test]
    fn zero_radius_is_sharp() {
        let pts = diamond();
        let arc = CornerArc::try_build(&pts, 2, 0.0).unwrap();
        assert!(arc.is_degenerate());
        assert_eq!(arc.p1, pts[2].position);
        assert!(arc.sweep_angle().abs() < 1e-15);
    }
}
