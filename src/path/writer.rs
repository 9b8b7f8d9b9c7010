use super::command::PathCommand;
use crate::error::{GeometryError, Result};
use crate::geometry::RoundedPolygon;
use crate::math::{Point2, Vector2};

/// Default number of decimal places in serialized coordinates.
pub const DEFAULT_PRECISION: usize = 3;

/// Uniform scale followed by a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathTransform {
    pub scale: f64,
    pub translate: Vector2,
}

impl Default for PathTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Vector2::zeros(),
        }
    }
}

impl PathTransform {
    /// Applies the scale first, then the translation.
    #[must_use]
    pub fn apply(&self, p: &Point2) -> Point2 {
        Point2::from(p.coords * self.scale + self.translate)
    }

    /// Lengths only see the scale.
    #[must_use]
    pub fn apply_length(&self, length: f64) -> f64 {
        length * self.scale.abs()
    }
}

/// Serializes a [`RoundedPolygon`] into a closed move/line/arc path.
///
/// The path starts at the first arc's incoming tangent point, draws every
/// arc followed by a line to the next arc, and ends with a line back to the
/// start. Output is deterministic: iteration follows vertex order and all
/// numbers go through the same rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathWriter {
    transform: PathTransform,
    precision: usize,
}

impl Default for PathWriter {
    fn default() -> Self {
        Self {
            transform: PathTransform::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl PathWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.transform.scale = scale;
        self
    }

    #[must_use]
    pub fn with_translate(mut self, translate: Vector2) -> Self {
        self.transform.translate = translate;
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: PathTransform) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn transform(&self) -> &PathTransform {
        &self.transform
    }

    #[must_use]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// The transformed command sequence for `polygon`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if the transform is not finite.
    pub fn commands(&self, polygon: &RoundedPolygon) -> Result<Vec<PathCommand>> {
        let t = &self.transform;
        if !t.scale.is_finite() || !t.translate.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::NonFinite("path transform").into());
        }

        let arcs = polygon.arcs();
        let Some(first) = arcs.first() else {
            return Ok(Vec::new());
        };

        let start = t.apply(&first.p1);
        let mut commands = Vec::with_capacity(arcs.len() * 2 + 2);
        commands.push(PathCommand::MoveTo(start));
        for (i, arc) in arcs.iter().enumerate() {
            if i > 0 {
                commands.push(PathCommand::LineTo(t.apply(&arc.p1)));
            }
            commands.push(PathCommand::ArcTo {
                radius: t.apply_length(arc.radius),
                sweep: arc.sweep,
                to: t.apply(&arc.p2),
            });
        }
        commands.push(PathCommand::LineTo(start));
        Ok(commands)
    }

    /// Writes the path description string for `polygon`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFinite` if the transform is not finite.
    pub fn write(&self, polygon: &RoundedPolygon) -> Result<String> {
        let commands = self.commands(polygon)?;
        let mut out = String::with_capacity(commands.len() * 24);
        for (i, cmd) in commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            cmd.write_to(&mut out, self.precision);
        }
        Ok(out)
    }
}
