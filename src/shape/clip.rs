use super::{star_vertices, IdGenerator, StarConfig};
use crate::error::{OperationError, Result};
use crate::geometry::RoundedPolygon;
use crate::math::Vector2;
use crate::path::{format_number, PathWriter};

/// A rounded star clip region, ready to be attached to a rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipPath {
    pub id: String,
    /// Path description (`d` attribute).
    pub d: String,
}

impl ClipPath {
    /// SVG `<clipPath>` element carrying the path.
    #[must_use]
    pub fn to_svg(&self) -> String {
        format!(
            r#"<clipPath id="{}"><path d="{}"/></clipPath>"#,
            self.id, self.d
        )
    }

    /// Value for a CSS `clip-path` property referencing [`Self::to_svg`].
    #[must_use]
    pub fn css_reference(&self) -> String {
        format!("url(#{})", self.id)
    }
}

/// Renders a [`StarConfig`] into a clip path filling a `width × height` box.
///
/// The star is built in a unit frame, rounded, re-expanded by the
/// compensation scale and mapped onto the box: scaled by half the shorter
/// side and translated to the box center.
#[derive(Debug)]
pub struct StarClip {
    config: StarConfig,
    width: f64,
    height: f64,
    precision: usize,
}

impl StarClip {
    #[must_use]
    pub fn new(config: StarConfig, width: f64, height: f64) -> Self {
        Self {
            config,
            width,
            height,
            precision: crate::path::DEFAULT_PRECISION,
        }
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Rounds the star without serializing it.
    ///
    /// # Errors
    ///
    /// See [`RoundedPolygon::process`].
    pub fn polygon(&self) -> Result<RoundedPolygon> {
        RoundedPolygon::process(&star_vertices(&self.config), self.config.rounding)
    }

    /// The writer mapping the unit frame of `polygon` onto the box.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the box is empty or not
    /// finite.
    pub fn writer(&self, polygon: &RoundedPolygon) -> Result<PathWriter> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(OperationError::InvalidInput(format!(
                "clip box must have a positive finite size, got {} x {}",
                self.width, self.height
            ))
            .into());
        }
        let half = self.width.min(self.height) * 0.5;
        Ok(PathWriter::new()
            .with_precision(self.precision)
            .with_scale(polygon.compensation_scale() * half)
            .with_translate(Vector2::new(self.width * 0.5, self.height * 0.5)))
    }

    /// Builds the clip path, taking a fresh identifier from `ids`.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the box is empty or not finite
    /// - any error of [`RoundedPolygon::process`]
    pub fn render(&self, ids: &IdGenerator) -> Result<ClipPath> {
        let polygon = self.polygon()?;
        let d = self.writer(&polygon)?.write(&polygon)?;
        let id = ids.next_id();
        tracing::debug!(%id, corners = self.config.corners, "rendered star clip");
        Ok(ClipPath { id, d })
    }

    /// The outline flattened into a CSS `polygon()` shape, for surfaces that
    /// only accept polygon clip shapes.
    ///
    /// `tolerance` is the largest chord deviation from an arc, in box units.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the box is empty or not finite, or
    ///   `tolerance` is not positive
    /// - any error of [`RoundedPolygon::process`]
    pub fn css_polygon(&self, tolerance: f64) -> Result<String> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "flattening tolerance must be positive, got {tolerance}"
            ))
            .into());
        }
        let polygon = self.polygon()?;
        let t = *self.writer(&polygon)?.transform();
        let points = polygon.outline().to_points(tolerance / t.scale);
        let coords: Vec<String> = points
            .iter()
            .map(|p| {
                let q = t.apply(p);
                format!(
                    "{} {}",
                    format_number(q.x, self.precision),
                    format_number(q.y, self.precision)
                )
            })
            .collect();
        tracing::debug!(points = coords.len(), "flattened star clip");
        Ok(format!("polygon({})", coords.join(", ")))
    }
}
