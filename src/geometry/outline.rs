use std::f64::consts::FRAC_PI_2;

use super::{RoundedPolygon, Sweep};
use crate::math::arc_2d::{
    arc_contains_angle, arc_from_bulge, arc_point_at, arc_subdivision_count, bulge_from_sweep,
};
use crate::math::{Point2, Vector2};

/// Bulge-encoded outline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = positive-angle arc to next vertex (SVG sweep flag 1)
/// - `< 0` = negative-angle arc to next vertex (SVG sweep flag 0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl OutlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    fn from_point(p: Point2) -> Self {
        Self { min: p, max: p }
    }

    fn include(&mut self, p: Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Maps the box through `p * scale + translate` (uniform scale).
    #[must_use]
    pub fn scaled(&self, scale: f64, translate: Vector2) -> Self {
        let a = Point2::from(self.min.coords * scale + translate);
        let b = Point2::from(self.max.coords * scale + translate);
        let mut out = Self::from_point(a);
        out.include(b);
        out
    }
}

/// A closed outline of straight lines and circular arcs.
///
/// Each vertex starts a segment that ends at the next vertex; the last vertex
/// connects back to the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub vertices: Vec<OutlineVertex>,
}

impl Outline {
    /// Builds the outline of a rounded polygon: for every corner an arc from
    /// its incoming to its outgoing tangent point, followed by a line to the
    /// next corner. Sharp corners contribute a single line vertex.
    #[must_use]
    pub fn from_rounded(polygon: &RoundedPolygon) -> Self {
        let mut vertices = Vec::with_capacity(polygon.arcs().len() * 2);
        for arc in polygon.arcs() {
            if arc.is_degenerate() {
                vertices.push(OutlineVertex::line(arc.p1.x, arc.p1.y));
                continue;
            }
            let sign = match arc.sweep {
                Sweep::Positive => 1.0,
                Sweep::Negative => -1.0,
            };
            let bulge = bulge_from_sweep(sign * arc.sweep_angle());
            vertices.push(OutlineVertex::new(arc.p1.x, arc.p1.y, bulge));
            vertices.push(OutlineVertex::line(arc.p2.x, arc.p2.y));
        }
        Self { vertices }
    }

    /// Returns the number of segments (equal to the vertex count, as the
    /// outline is closed).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        if self.vertices.len() < 2 {
            0
        } else {
            self.vertices.len()
        }
    }

    /// Flattens the outline into points by tessellating arcs into chords.
    ///
    /// `tolerance` is the maximum deviation between an arc and its chords.
    /// The closing point is not repeated.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        let mut points = Vec::with_capacity(n * 2);
        for i in 0..self.segment_count() {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];
            points.push(v0.position());

            if v0.bulge.abs() < 1e-12 {
                continue;
            }
            let arc = arc_from_bulge(v0.position(), v1.position(), v0.bulge);
            if arc.radius < 1e-12 {
                continue;
            }
            let n_sub = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance);
            for j in 1..n_sub {
                let t = f64::from(j) / f64::from(n_sub);
                points.push(arc_point_at(&arc, t));
            }
        }
        if points.is_empty() {
            points.extend(self.vertices.iter().map(OutlineVertex::position));
        }
        points
    }

    /// Exact axis-aligned bounds, including arc extremes.
    ///
    /// Returns `None` for an empty outline.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Aabb2> {
        let first = self.vertices.first()?;
        let mut aabb = Aabb2::from_point(first.position());
        let n = self.vertices.len();
        for i in 0..n {
            let v0 = &self.vertices[i];
            aabb.include(v0.position());
            if v0.bulge.abs() < 1e-12 {
                continue;
            }
            let v1 = &self.vertices[(i + 1) % n];
            let arc = arc_from_bulge(v0.position(), v1.position(), v0.bulge);
            for k in 0..4 {
                let angle = f64::from(k) * FRAC_PI_2;
                if arc_contains_angle(&arc, angle) {
                    aabb.include(
                        arc.center + Vector2::new(angle.cos(), angle.sin()) * arc.radius,
                    );
                }
            }
        }
        Some(aabb)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    /// Signed enclosed area, positive for positive-angle traversal. Arc
    /// segments add their circular segment on top of the chord polygon.
    fn signed_area(outline: &Outline) -> f64 {
        let v = &outline.vertices;
        let n = v.len();
        let mut sum = 0.0;
        let mut segments = 0.0;
        for i in 0..n {
            let (v0, v1) = (&v[i], &v[(i + 1) % n]);
            sum += v0.x * v1.y - v1.x * v0.y;
            if v0.bulge.abs() >= 1e-12 {
                let arc = arc_from_bulge(v0.position(), v1.position(), v0.bulge);
                let theta = arc.sweep.abs();
                segments += arc.sweep.signum() * 0.5 * arc.radius * arc.radius * (theta - theta.sin());
            }
        }
        sum * 0.5 + segments
    }

    fn diamond() -> Vec<Point2> {
        vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, -1.0),
        ]
    }

    #[test]
    fn sharp_polygon_outline_is_line_only() {
        let poly = RoundedPolygon::process(&diamond(), 0.0).unwrap();
        let outline = poly.outline();
        assert_eq!(outline.vertices.len(), 4);
        assert!(outline.vertices.iter().all(|v| v.bulge.abs() < 1e-12));
        assert_eq!(outline.to_points(0.01).len(), 4);
        assert_relative_eq!(signed_area(&outline), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rounded_diamond_is_a_circle() {
        let poly = RoundedPolygon::process(&diamond(), 1.0).unwrap();
        let outline = poly.outline();
        assert_eq!(outline.vertices.len(), 8);
        for v in outline.vertices.iter().step_by(2) {
            // Quarter arcs in the positive-angle direction.
            assert_relative_eq!(v.bulge, (PI / 8.0).tan(), epsilon = 1e-12);
        }
        assert_relative_eq!(signed_area(&outline), PI * 0.5, epsilon = 1e-9);

        let bbox = outline.bounding_box().unwrap();
        assert_relative_eq!(bbox.min.x, -FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(bbox.max.x, FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(bbox.min.y, -FRAC_1_SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(bbox.max.y, FRAC_1_SQRT_2, epsilon = 1e-9);

        for p in outline.to_points(1e-4) {
            assert_relative_eq!(p.coords.norm(), FRAC_1_SQRT_2, epsilon = 1e-9);
        }
    }

    #[test]
    fn reversed_winding_flips_area_sign() {
        let mut pts = diamond();
        pts.reverse();
        let poly = RoundedPolygon::process(&pts, 0.5).unwrap();
        let forward = RoundedPolygon::process(&diamond(), 0.5).unwrap();
        assert_relative_eq!(
            signed_area(&poly.outline()),
            -signed_area(&forward.outline()),
            epsilon = 1e-12
        );
        assert!(signed_area(&poly.outline()) < 0.0);
    }

    #[test]
    fn rounding_shrinks_area() {
        let sharp = RoundedPolygon::process(&diamond(), 0.0).unwrap();
        let round = RoundedPolygon::process(&diamond(), 0.5).unwrap();
        assert!(signed_area(&round.outline()) < signed_area(&sharp.outline()));
    }

    #[test]
    fn bounding_box_scaled() {
        let poly = RoundedPolygon::process(&diamond(), 0.0).unwrap();
        let bbox = poly
            .outline()
            .bounding_box()
            .unwrap()
            .scaled(2.0, Vector2::new(10.0, 0.0));
        assert_relative_eq!(bbox.min.x, 8.0);
        assert_relative_eq!(bbox.max.x, 12.0);
        assert_relative_eq!(bbox.width(), 4.0);
        assert_relative_eq!(bbox.height(), 4.0);
    }

    #[test]
    fn empty_outline() {
        let outline = Outline::default();
        assert!(outline.bounding_box().is_none());
        assert_eq!(outline.segment_count(), 0);
        assert!(outline.to_points(0.1).is_empty());
    }
}
