//! Scalar/vector helpers shared by every entity.
//!
//! Angles are in degrees, measured counter-clockwise from the positive x-axis.

use super::{modulo, Vector2, FULL_TURN, TOLERANCE};

/// 2D cross product `u.x * v.y - u.y * v.x`.
#[inline]
#[must_use]
pub fn cross(u: &Vector2, v: &Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Returns `true` if `v` has (numerically) zero length.
#[must_use]
pub fn is_zero(v: &Vector2) -> bool {
    v.norm() < TOLERANCE
}

/// Returns the left-pointing normal (`v` rotated by +90°).
#[must_use]
pub fn left_normal(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Normalizes `v`, mapping the zero vector to itself.
#[must_use]
pub fn normalize_or_zero(v: &Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector2::zeros()
    } else {
        v / len
    }
}

/// Direction angle of `v` in `[0, 360)`. The zero vector has angle 0.
#[must_use]
pub fn angle_v(v: &Vector2) -> f64 {
    if is_zero(v) {
        return 0.0;
    }
    modulo(v.y.atan2(v.x).to_degrees(), FULL_TURN)
}

/// Unit vector pointing at `degrees`.
#[must_use]
pub fn unit_v(degrees: f64) -> Vector2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector2::new(cos, sin)
}

/// Rotates `v` counter-clockwise by `degrees`.
#[must_use]
pub fn rotate_v(v: &Vector2, degrees: f64) -> Vector2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vector2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Orthogonal projection of `v` onto the direction of `axis`.
///
/// Projection onto the zero vector is the zero vector.
#[must_use]
pub fn project(v: &Vector2, axis: &Vector2) -> Vector2 {
    let len_sq = axis.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return Vector2::zeros();
    }
    axis * (v.dot(axis) / len_sq)
}
