use super::{CornerArc, Outline, PolygonPoint};
use crate::error::Result;
use crate::math::Point2;
use crate::operations::{compensation_scale, RoundCorners, COMPENSATION_MARGIN};
use crate::path::PathWriter;

/// A closed outline made of straight edges and one circular arc per vertex.
///
/// Built in one pass from a vertex list and a rounding ratio; there are no
/// incremental updates. Arcs are stored in vertex order and the sequence is
/// implicitly closed.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedPolygon {
    points: Vec<PolygonPoint>,
    arcs: Vec<CornerArc>,
    ratio: f64,
}

impl RoundedPolygon {
    /// Rounds the corners of the closed polygon `vertices` by `ratio`.
    ///
    /// # Errors
    ///
    /// See [`RoundCorners::execute`].
    pub fn process(vertices: &[Point2], ratio: f64) -> Result<Self> {
        RoundCorners::new(vertices, ratio).execute()
    }

    pub(crate) fn from_parts(points: Vec<PolygonPoint>, arcs: Vec<CornerArc>, ratio: f64) -> Self {
        Self {
            points,
            arcs,
            ratio,
        }
    }

    /// The source vertices with their interior angles.
    #[must_use]
    pub fn points(&self) -> &[PolygonPoint] {
        &self.points
    }

    /// One arc per source vertex, in vertex order.
    #[must_use]
    pub fn arcs(&self) -> &[CornerArc] {
        &self.arcs
    }

    /// The rounding ratio this polygon was built with.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Largest bisector offset over all arcs.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.arcs.iter().map(|a| a.offset).fold(0.0, f64::max)
    }

    /// Largest distance of a source vertex from the origin.
    ///
    /// Vertex lists produced for a viewport are centered on the origin, so
    /// this is the half extent the outline is meant to fill.
    #[must_use]
    pub fn half_extent(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.position.coords.norm())
            .fold(0.0, f64::max)
    }

    /// Uniform scale that re-expands the outline to [`Self::half_extent`],
    /// including the default safety margin.
    #[must_use]
    pub fn compensation_scale(&self) -> f64 {
        compensation_scale(self.half_extent(), self.max_offset(), COMPENSATION_MARGIN)
    }

    /// Serializes the outline with the compensation scale applied and the
    /// default precision.
    ///
    /// # Errors
    ///
    /// See [`PathWriter::write`].
    pub fn to_path(&self) -> Result<String> {
        PathWriter::new()
            .with_scale(self.compensation_scale())
            .write(self)
    }

    /// Serializes the outline with an explicit writer.
    ///
    /// # Errors
    ///
    /// See [`PathWriter::write`].
    pub fn to_path_with(&self, writer: &PathWriter) -> Result<String> {
        writer.write(self)
    }

    /// Bulge-encoded closed outline of this polygon.
    #[must_use]
    pub fn outline(&self) -> Outline {
        Outline::from_rounded(self)
    }
}
