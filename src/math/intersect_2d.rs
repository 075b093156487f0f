use tracing::trace;

use super::vector_2d::cross;
use super::{equal, infinity_point, near_zero, Point2, Vector2, TOLERANCE};

/// Outcome of solving two infinite lines `p1 + t * v1` and `p2 + u * v2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCrossing {
    /// The lines meet in exactly one point, at parameters `t` and `u`.
    Point { point: Point2, t: f64, u: f64 },
    /// Parallel and distinct: no common point.
    Parallel,
    /// Both lines are the same set of points.
    Coincident,
}

/// Parametric 2D line-line solve via the cross-product (determinant) method.
///
/// A zero direction vector is treated as parallel to everything; such a
/// "line" is coincident with the other one only if its pivot lies on it.
#[must_use]
pub fn solve_lines(p1: &Point2, v1: &Vector2, p2: &Point2, v2: &Vector2) -> LineCrossing {
    let det = cross(v1, v2);
    let w = p2 - p1;
    if det.abs() <= TOLERANCE * v1.norm() * v2.norm() {
        let scale = p1.coords.norm().max(p2.coords.norm());
        let dir = if v1.norm() >= v2.norm() { v1 } else { v2 };
        let len = dir.norm();
        let offset = if len < TOLERANCE {
            w.norm()
        } else {
            cross(&w, dir) / len
        };
        if near_zero(offset, scale) {
            trace!(?p1, ?p2, "coincident lines");
            return LineCrossing::Coincident;
        }
        return LineCrossing::Parallel;
    }
    let t = cross(&w, v2) / det;
    let u = cross(&w, v1) / det;
    LineCrossing::Point {
        point: p1 + v1 * t,
        t,
        u,
    }
}

/// Intersection point of two lines given as pivot + direction pairs.
///
/// Returns the infinity sentinel whenever the determinant vanishes, for
/// distinct parallels as well as for coincident lines. Use [`solve_lines`]
/// to tell those two apart.
#[must_use]
pub fn intersection_v(p1: &Point2, v1: &Vector2, p2: &Point2, v2: &Vector2) -> Point2 {
    match solve_lines(p1, v1, p2, v2) {
        LineCrossing::Point { point, .. } => point,
        LineCrossing::Parallel | LineCrossing::Coincident => infinity_point(),
    }
}

/// Returns the parametrization `s -> a + s * k * (b - a)` of the line
/// through `a` and `b`.
pub fn line_equation(a: Point2, b: Point2, k: f64) -> impl Fn(f64) -> Point2 {
    let v = (b - a) * k;
    move |s| a + v * s
}

/// Parameters at which the line `pivot + t * v` meets the circle
/// `|p - center| = radius`.
///
/// Returns no roots, one root (tangency, decided with [`TOLERANCE`]) or two
/// roots in increasing order.
#[must_use]
pub fn line_circle_params(pivot: &Point2, v: &Vector2, center: &Point2, radius: f64) -> Vec<f64> {
    let f = pivot - center;
    let len_sq = v.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return if equal(f.norm(), radius) {
            vec![0.0]
        } else {
            Vec::new()
        };
    }

    // Foot of the perpendicular from the center onto the line.
    let t0 = -f.dot(v) / len_sq;
    let d = (f + v * t0).norm();

    if equal(d, radius) {
        return vec![t0];
    }
    if d > radius {
        return Vec::new();
    }
    let h = (radius * radius - d * d).sqrt() / len_sq.sqrt();
    vec![t0 - h, t0 + h]
}

/// Outcome of intersecting two full circles.
#[derive(Debug, Clone, PartialEq)]
pub enum CircleCrossing {
    /// Zero, one (tangency) or two common points.
    Points(Vec<Point2>),
    /// Same center and radius.
    Coincident,
}

/// Intersection of two circles in 2D using the radical line.
#[must_use]
pub fn circle_circle_points(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> CircleCrossing {
    let delta = c2 - c1;
    let dist = delta.norm();
    let scale = c1.coords.norm().max(c2.coords.norm());

    if near_zero(dist, scale) {
        return if equal(r1, r2) {
            CircleCrossing::Coincident
        } else {
            CircleCrossing::Points(Vec::new())
        };
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    let tangent = equal(dist, sum) || equal(dist, diff);
    if !tangent && (dist > sum || dist < diff) {
        return CircleCrossing::Points(Vec::new());
    }

    // Distance from c1 along c1->c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist * dist) / (2.0 * dist);
    let dir = delta / dist;
    let mid = c1 + dir * a;
    if tangent {
        return CircleCrossing::Points(vec![mid]);
    }

    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let perp = Vector2::new(-dir.y, dir.x);
    CircleCrossing::Points(vec![mid + perp * h, mid - perp * h])
}
