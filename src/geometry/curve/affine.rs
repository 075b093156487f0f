//! Shared implementation of the curve contract for `pivot + s * vector`.

use crate::math::distance_2d::{point_to_affine_dist, point_to_line_dist};
use crate::math::vector_2d::{is_zero, normalize_or_zero};
use crate::math::{equal_p, near_zero, Point2, Vector2};

use super::CurveDomain;

pub(super) fn point(pivot: &Point2, vector: &Vector2, s: f64) -> Point2 {
    pivot + vector * s
}

/// Orthogonal projection parameter of `p`; `0` when `vector` is zero.
pub(super) fn locus(pivot: &Point2, vector: &Vector2, p: &Point2) -> f64 {
    if is_zero(vector) {
        return 0.0;
    }
    (p - pivot).dot(vector) / vector.norm_squared()
}

/// Perpendicular-distance-zero test. A trivial curve's support is its pivot.
pub(super) fn equation(pivot: &Point2, vector: &Vector2, p: &Point2) -> bool {
    if is_zero(vector) {
        return equal_p(pivot, p);
    }
    let scale = pivot.coords.norm().max(p.coords.norm());
    near_zero(point_to_line_dist(p, pivot, vector), scale)
}

pub(super) fn tangent(vector: &Vector2) -> Vector2 {
    normalize_or_zero(vector)
}

pub(super) fn distance(pivot: &Point2, vector: &Vector2, domain: CurveDomain, p: &Point2) -> f64 {
    point_to_affine_dist(p, pivot, vector, domain.t_min, domain.t_max)
}
