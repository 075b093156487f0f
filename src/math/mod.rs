pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3x3 homogeneous matrix for 2D affine maps.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Comparisons scale it by the magnitude of the compared values, so it acts
/// as an absolute epsilon near zero and a relative one for large coordinates.
pub const TOLERANCE: f64 = 1e-10;

/// Modulus for oriented angles, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// Modulus for unoriented (line) angles, in degrees.
pub const HALF_TURN: f64 = 180.0;

/// Returns `true` if `a` and `b` are equal within [`TOLERANCE`].
#[must_use]
#[allow(clippy::float_cmp)]
pub fn equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    (a - b).abs() <= TOLERANCE * (1.0 + a.abs().max(b.abs()))
}

/// Returns `true` if `value` is zero within [`TOLERANCE`], relative to the
/// magnitude `scale` of the quantities it was computed from.
#[must_use]
pub fn near_zero(value: f64, scale: f64) -> bool {
    value.abs() <= TOLERANCE * (1.0 + scale.abs())
}

/// Euclidean remainder of `a` modulo `m`, always in `[0, m)`.
#[must_use]
pub fn modulo(a: f64, m: f64) -> f64 {
    let r = a.rem_euclid(m);
    if r >= m {
        0.0
    } else {
        r
    }
}

/// Returns `true` if `a` and `b` denote the same point on a circle of length `m`.
#[must_use]
pub fn equal_mod(m: f64, a: f64, b: f64) -> bool {
    let d = modulo(a - b, m);
    let scale = a.abs().max(b.abs());
    near_zero(d, scale) || near_zero(m - d, scale)
}

/// Component-wise [`equal`] for points.
#[must_use]
pub fn equal_p(a: &Point2, b: &Point2) -> bool {
    equal(a.x, b.x) && equal(a.y, b.y)
}

/// Component-wise [`equal`] for vectors.
#[must_use]
pub fn equal_v(a: &Vector2, b: &Vector2) -> bool {
    equal(a.x, b.x) && equal(a.y, b.y)
}

/// The point `(∞, ∞)` used to denote an indeterminate construction.
#[must_use]
pub fn infinity_point() -> Point2 {
    Point2::new(f64::INFINITY, f64::INFINITY)
}

/// Returns `true` if `p` is the indeterminate sentinel.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_infinity(p: &Point2) -> bool {
    p.x == f64::INFINITY && p.y == f64::INFINITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_is_scaled_by_magnitude() {
        assert!(equal(1.0, 1.0 + 1e-11));
        assert!(!equal(1.0, 1.0 + 1e-9));
        assert!(equal(1e6, 1e6 + 1e-5));
        assert!(!equal(0.0, 1e-9));
    }

    #[test]
    fn equal_handles_infinities() {
        assert!(equal(f64::INFINITY, f64::INFINITY));
        assert!(!equal(f64::INFINITY, 1.0));
        assert!(!equal(f64::NAN, f64::NAN));
    }

    #[test]
    fn modulo_is_non_negative() {
        assert!(equal(modulo(-30.0, FULL_TURN), 330.0));
        assert!(equal(modulo(400.0, FULL_TURN), 40.0));
        assert!(equal(modulo(360.0, FULL_TURN), 0.0));
        assert!(modulo(-1e-20, FULL_TURN) < FULL_TURN);
    }

    #[test]
    fn modulo_of_negation_matches_complement() {
        for a in [0.0, 1.0, 45.0, 179.5, 359.0] {
            assert!(equal(modulo(-a, FULL_TURN), modulo(FULL_TURN - a, FULL_TURN)));
        }
    }

    #[test]
    fn equal_mod_wraps_around() {
        assert!(equal_mod(FULL_TURN, 0.0, 360.0));
        assert!(equal_mod(FULL_TURN, 359.999_999_999_99, 0.0));
        assert!(equal_mod(HALF_TURN, 10.0, 190.0));
        assert!(!equal_mod(FULL_TURN, 10.0, 190.0));
    }

    #[test]
    fn sentinel_is_recognised() {
        assert!(is_infinity(&infinity_point()));
        assert!(!is_infinity(&Point2::new(f64::INFINITY, 0.0)));
        assert!(equal_p(&infinity_point(), &infinity_point()));
        assert!(!equal_p(&infinity_point(), &Point2::new(1.0, 2.0)));
        assert!(!equal_p(&Point2::new(1.0, 2.0), &infinity_point()));
    }
}
