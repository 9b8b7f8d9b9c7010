//! 2D vector helpers on top of nalgebra.
//!
//! Addition, subtraction, scaling, length and dot product come straight
//! from [`nalgebra::Vector2`]. The functions here cover the operations that
//! need an explicit failure on zero-length input instead of a silent `NaN`.

use super::{Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns the unit vector pointing along `v`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateVector` if `v` has (near) zero length.
pub fn normalize(v: Vector2) -> Result<Vector2> {
    let len = v.norm();
    if !len.is_finite() || len < TOLERANCE {
        return Err(GeometryError::DegenerateVector.into());
    }
    Ok(v / len)
}

/// Unsigned angle between `u` and `v`, in `[0, π]`.
///
/// The dot product of the unit vectors is clamped to `[-1, 1]` so that
/// near-parallel inputs never leave the domain of `acos`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateVector` if either input has zero length.
pub fn angle_between(u: Vector2, v: Vector2) -> Result<f64> {
    let u = normalize(u)?;
    let v = normalize(v)?;
    Ok(u.dot(&v).clamp(-1.0, 1.0).acos())
}

/// 2D scalar cross product `u.x * v.y - u.y * v.x`.
///
/// Positive when `v` lies counter-clockwise of `u` in a y-up frame.
#[must_use]
pub fn cross(u: Vector2, v: Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Rotates `v` by `angle` radians (counter-clockwise in a y-up frame).
#[must_use]
pub fn rotate(v: Vector2, angle: f64) -> Vector2 {
    let (s, c) = angle.sin_cos();
    Vector2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}
