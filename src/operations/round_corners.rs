use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{build_corners, CornerArc, RoundedPolygon};
use crate::math::Point2;

use super::radius_limit::usable_radius;

/// Replaces every vertex of a closed polygon with a tangent circular arc.
///
/// # Algorithm
///
/// 1. Compute all interior angles in one pass
/// 2. For each corner, take the tighter of the radius limits imposed by its
///    two edges and scale it by `ratio`
/// 3. Build one arc per corner, in vertex order; corners without a usable
///    bisector stay sharp
#[derive(Debug)]
pub struct RoundCorners<'a> {
    vertices: &'a [Point2],
    ratio: f64,
}

impl<'a> RoundCorners<'a> {
    /// Creates a new corner rounding operation.
    ///
    /// `ratio` is the fraction of the maximal radius applied at each corner:
    /// `0` keeps the polygon sharp, `1` rounds as far as the edges allow.
    #[must_use]
    pub fn new(vertices: &'a [Point2], ratio: f64) -> Self {
        Self { vertices, ratio }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidVertexCount` if fewer than 3 vertices are given
    /// - `GeometryError::NonFinite` if a vertex coordinate is `NaN` or infinite
    /// - `GeometryError::ParameterOutOfRange` if `ratio` is outside `[0, 1]`
    pub fn execute(&self) -> Result<RoundedPolygon> {
        let count = self.vertices.len();
        if count < 3 {
            return Err(OperationError::InvalidVertexCount { count }.into());
        }
        if !(0.0..=1.0).contains(&self.ratio) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "ratio",
                value: self.ratio,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }
        if self
            .vertices
            .iter()
            .any(|v| !v.x.is_finite() || !v.y.is_finite())
        {
            return Err(GeometryError::NonFinite("vertices").into());
        }

        let points = build_corners(self.vertices);
        let arcs: Vec<CornerArc> = (0..count)
            .map(|i| {
                let radius = usable_radius(&points, i, self.ratio);
                tracing::trace!(index = i, angle = points[i].angle, radius, "corner radius");
                CornerArc::build(&points, i, radius)
            })
            .collect();

        Ok(RoundedPolygon::from_parts(points, arcs, self.ratio))
    }
}
