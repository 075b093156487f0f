//! Point constructions. The point entity itself is [`Point2`].

use tracing::debug;

use crate::geometry::curve::{Curve, Ray};
use crate::math::vector_2d::angle_v;
use crate::math::{equal_p, infinity_point, is_infinity, Point2, HALF_TURN};
use crate::operations::query::Intersections;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Component-wise equality within tolerance.
#[must_use]
pub fn is_equal(a: &Point2, b: &Point2) -> bool {
    equal_p(a, b)
}

/// The point `a + t * (b - a)`.
#[must_use]
pub fn between(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// The point of `curve` at parameter `s`.
#[must_use]
pub fn on<C: Curve + ?Sized>(curve: &C, s: f64) -> Point2 {
    curve.point(s)
}

/// The point seen from `p1` at `a1` degrees counter-clockwise from the
/// direction `p1→p2`, and from `p2` at `a2` degrees clockwise from `p2→p1`.
///
/// Returns the infinity sentinel when the two sight rays are parallel,
/// overlap, or miss each other, and when `p1 == p2`.
#[must_use]
pub fn azimuth(p1: &Point2, a1: f64, p2: &Point2, a2: f64) -> Point2 {
    if equal_p(p1, p2) {
        debug!(?p1, "azimuth from coincident anchors");
        return infinity_point();
    }
    let base = angle_v(&(p2 - p1));
    let first = Ray::from_angle(*p1, base + a1);
    let second = Ray::from_angle(*p2, base + HALF_TURN - a2);
    match first.intersections(&second).as_slice() {
        [point] if !is_infinity(point) => *point,
        _ => {
            debug!(?p1, ?p2, a1, a2, "azimuth rays do not cross");
            infinity_point()
        }
    }
}
