use crate::math::TOLERANCE;

/// Safety margin applied on top of the compensation scale so the
/// re-expanded outline never touches the edge of its viewport.
pub const COMPENSATION_MARGIN: f64 = 0.99;

/// Uniform scale that re-expands a rounded outline to its original extent.
///
/// Rounding pulls every corner inward along its bisector by the arc offset.
/// Scaling by `half_extent / (half_extent - max_offset)` moves the most
/// shrunken corner back out to `half_extent`; the result is multiplied by
/// `margin`.
///
/// When the offset swallows the whole extent no re-expansion is possible and
/// only `margin` is returned.
#[must_use]
pub fn compensation_scale(half_extent: f64, max_offset: f64, margin: f64) -> f64 {
    if max_offset.abs() < TOLERANCE {
        return margin;
    }
    let remaining = half_extent - max_offset;
    if remaining <= TOLERANCE || !remaining.is_finite() {
        tracing::warn!(half_extent, max_offset, "rounding offset exceeds extent, scale not compensated");
        return margin;
    }
    half_extent / remaining * margin
}
