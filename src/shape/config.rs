use serde::Deserialize;

/// Default number of star corners.
pub const DEFAULT_CORNERS: u32 = 4;
/// Default outer radius, as a fraction of the available half extent.
pub const DEFAULT_OUTER_RADIUS: f64 = 1.0;
/// Default inner-to-outer radius ratio.
pub const DEFAULT_INNER_RADIUS_RATIO: f64 = 0.5;
/// Default corner rounding ratio.
pub const DEFAULT_ROUNDING: f64 = 1.0;
/// Default tilt in degrees.
pub const DEFAULT_TILT: f64 = 0.0;

/// Smallest corner count that still produces a polygon.
pub const MIN_CORNERS: u32 = 3;
/// Largest accepted corner count.
pub const MAX_CORNERS: u32 = 1024;
/// Largest accepted tilt in degrees.
pub const MAX_TILT: f64 = 360.0;

/// User supplied star configuration. Every field is optional.
///
/// Canonical keys are `corners`, `outerRadius`, `innerRadiusRatio`,
/// `rounding` and `tilt`. The older `radius` and `ratio` keys are accepted as
/// aliases of `outerRadius` and `innerRadiusRatio`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStarConfig {
    pub corners: Option<f64>,
    #[serde(alias = "radius")]
    pub outer_radius: Option<f64>,
    #[serde(alias = "ratio")]
    pub inner_radius_ratio: Option<f64>,
    pub rounding: Option<f64>,
    pub tilt: Option<f64>,
}

/// A validated star configuration with every field inside its range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarConfig {
    pub corners: u32,
    pub outer_radius: f64,
    pub inner_radius_ratio: f64,
    pub rounding: f64,
    /// Rotation of the first outer vertex, in degrees.
    pub tilt: f64,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            corners: DEFAULT_CORNERS,
            outer_radius: DEFAULT_OUTER_RADIUS,
            inner_radius_ratio: DEFAULT_INNER_RADIUS_RATIO,
            rounding: DEFAULT_ROUNDING,
            tilt: DEFAULT_TILT,
        }
    }
}

/// A field whose value was replaced during validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampWarning {
    pub field: &'static str,
    pub given: f64,
    pub applied: f64,
}

/// Result of [`RawStarConfig::validate_and_clamp`].
#[derive(Debug, Clone, PartialEq)]
pub struct Clamped {
    pub config: StarConfig,
    pub warnings: Vec<ClampWarning>,
}

impl RawStarConfig {
    /// Fills in defaults and clamps every field into its valid range.
    ///
    /// Out-of-range values are never an error: they are clamped, and each
    /// replaced value is reported as a [`ClampWarning`]. Non-finite values
    /// fall back to the field default.
    #[must_use]
    pub fn validate_and_clamp(&self) -> Clamped {
        let mut warnings = Vec::new();

        let corners = clamp_field(
            "corners",
            self.corners,
            f64::from(DEFAULT_CORNERS),
            f64::from(MIN_CORNERS),
            f64::from(MAX_CORNERS),
            &mut warnings,
            f64::round,
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let corners = corners as u32;

        let config = StarConfig {
            corners,
            outer_radius: clamp_field(
                "outerRadius",
                self.outer_radius,
                DEFAULT_OUTER_RADIUS,
                0.0,
                1.0,
                &mut warnings,
                identity,
            ),
            inner_radius_ratio: clamp_field(
                "innerRadiusRatio",
                self.inner_radius_ratio,
                DEFAULT_INNER_RADIUS_RATIO,
                0.0,
                1.0,
                &mut warnings,
                identity,
            ),
            rounding: clamp_field(
                "rounding",
                self.rounding,
                DEFAULT_ROUNDING,
                0.0,
                1.0,
                &mut warnings,
                identity,
            ),
            tilt: clamp_field(
                "tilt",
                self.tilt,
                DEFAULT_TILT,
                0.0,
                MAX_TILT,
                &mut warnings,
                identity,
            ),
        };

        for w in &warnings {
            tracing::debug!(
                field = w.field,
                given = w.given,
                applied = w.applied,
                "config value clamped"
            );
        }

        Clamped { config, warnings }
    }
}

fn identity(v: f64) -> f64 {
    v
}

#[allow(clippy::too_many_arguments)]
fn clamp_field(
    field: &'static str,
    value: Option<f64>,
    default: f64,
    min: f64,
    max: f64,
    warnings: &mut Vec<ClampWarning>,
    snap: fn(f64) -> f64,
) -> f64 {
    let Some(given) = value else {
        return default;
    };
    let applied = if given.is_finite() {
        snap(given).clamp(min, max)
    } else {
        default
    };
    if applied.to_bits() != given.to_bits() {
        warnings.push(ClampWarning {
            field,
            given,
            applied,
        });
    }
    applied
}
