use tracing::debug;

use crate::math::vector_2d::{is_zero, left_normal, unit_v};
use crate::math::{equal_mod, equal_p, Point2, Vector2, FULL_TURN};
use crate::operations::transform::{AffineMap, Transform};

use super::{affine, AffineCurve, Circle, Curve, CurveDomain};

/// A half-line `P(s) = start + s * vector`, `s >= 0`.
///
/// Unlike [`super::Line`], the direction is oriented (compared modulo 360°).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    start: Point2,
    vector: Vector2,
}

impl Ray {
    /// Creates a new ray from a start point and direction.
    #[must_use]
    pub fn new(start: Point2, vector: Vector2) -> Self {
        Self { start, vector }
    }

    /// A ray from `start` pointing at `degrees`, with a unit vector.
    #[must_use]
    pub fn from_angle(start: Point2, degrees: f64) -> Self {
        Self::new(start, unit_v(degrees))
    }

    /// The ray from `a` passing through `b` at parameter `1`.
    #[must_use]
    pub fn through(a: Point2, b: Point2) -> Self {
        Self::new(a, b - a)
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Same start, opposite direction.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self::new(self.start, -self.vector)
    }

    /// Same direction, starting at `start`.
    #[must_use]
    pub fn at(&self, start: Point2) -> Self {
        Self::new(start, self.vector)
    }

    /// Same start, pointing at `degrees` with a unit vector.
    #[must_use]
    pub fn at_angle(&self, degrees: f64) -> Self {
        Self::from_angle(self.start, degrees)
    }

    /// Same start, direction of `other`.
    #[must_use]
    pub fn parallel_to<C: AffineCurve + ?Sized>(&self, other: &C) -> Self {
        Self::new(self.start, other.vector())
    }

    /// Same start, direction of `other` turned by +90°.
    #[must_use]
    pub fn perpendicular_to<C: AffineCurve + ?Sized>(&self, other: &C) -> Self {
        Self::new(self.start, left_normal(&other.vector()))
    }

    /// The ray from the start point towards the tangency point on `circle`.
    /// See [`super::Line::tangent_to`] for the meaning of `sign`.
    #[must_use]
    pub fn tangent_to(&self, circle: &Circle, sign: f64) -> Self {
        let vector = circle.tangent_vector(&self.start, sign).unwrap_or_else(|| {
            debug!(start = ?self.start, "tangent requested from inside a circle");
            Vector2::zeros()
        });
        Self::new(self.start, vector)
    }

    /// Same start and same oriented direction.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        if !equal_p(&self.start, &other.start) {
            return false;
        }
        match (self.is_trivial(), other.is_trivial()) {
            (true, true) => true,
            (false, false) => equal_mod(FULL_TURN, self.angle(), other.angle()),
            _ => false,
        }
    }

    /// All non-trivial rays are congruent, as are all trivial ones.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        self.is_trivial() == other.is_trivial()
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Point2::origin(), Vector2::x())
    }
}

impl Curve for Ray {
    fn point(&self, s: f64) -> Point2 {
        affine::point(&self.start, &self.vector, s)
    }

    fn locus(&self, p: &Point2) -> f64 {
        affine::locus(&self.start, &self.vector, p)
    }

    fn equation(&self, p: &Point2) -> bool {
        affine::equation(&self.start, &self.vector, p)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::POSITIVE
    }

    fn is_trivial(&self) -> bool {
        is_zero(&self.vector)
    }

    fn tangent_v(&self, _s: f64) -> Vector2 {
        affine::tangent(&self.vector)
    }

    fn distance(&self, p: &Point2) -> f64 {
        affine::distance(&self.start, &self.vector, self.domain(), p)
    }
}

impl AffineCurve for Ray {
    fn pivot(&self) -> Point2 {
        self.start
    }

    fn vector(&self) -> Vector2 {
        self.vector
    }
}

impl Transform for Ray {
    fn transform(&self, map: &AffineMap) -> Self {
        Self::new(map.transform_point(&self.start), map.transform_vector(&self.vector))
    }

    fn default_center(&self) -> Point2 {
        self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{equal, equal_v};

    fn ray1() -> Ray {
        Ray::through(Point2::new(1.0, 2.0), Point2::new(5.0, 6.0))
    }

    #[test]
    fn containment_follows_domain() {
        let r = ray1();
        assert!(r.is_containing(&r.start()));
        assert!(r.is_containing(&r.point(2.0)));
        assert!(!r.is_containing(&r.point(-2.0)));
        assert!(!r.is_containing(&Point2::origin()));
        for s in [-3.5, -0.01, 0.0, 0.01, 7.0, 1e4] {
            assert_eq!(r.is_containing(&r.point(s)), s >= 0.0, "s={s}");
            assert!(!r.is_containing(&(r.point(s) + r.normal_v(0.0))));
        }
    }

    #[test]
    fn equality() {
        let r = ray1();
        assert!(r.is_equal(&r));
        assert!(!r.is_equal(&Ray::default()));
        assert!(r.is_equal(&Ray::default().at(r.start()).parallel_to(&r)));
        assert!(!r.is_equal(&r.flip()));
        assert!(r.is_equal(&Ray::from_angle(r.start(), 45.0)));
        assert!(r.is_similar(&r.flip()));
        assert!(!r.is_similar(&Ray::through(r.start(), r.start())));
    }

    #[test]
    fn flipping() {
        let r = ray1();
        assert!(r.is_equal(&r.flip().flip()));
        assert!(equal_p(&r.start(), &r.flip().start()));
        assert!(equal_v(&r.tangent_v(0.0), &(-r.flip().tangent_v(0.0))));
    }

    #[test]
    fn trivial_ray() {
        let t = Ray::through(Point2::new(1.0, 2.0), Point2::new(1.0, 2.0));
        assert_eq!(t.vector(), Vector2::zeros());
        assert!(t.is_trivial());
        assert!(equal(t.locus(&t.point(12.0)), 0.0));
        assert!(t.is_containing(&t.start()));
    }

    #[test]
    fn distance_behind_start_is_to_start() {
        let r = Ray::default();
        assert!(equal(r.distance(&Point2::new(-3.0, 4.0)), 5.0));
        assert!(equal(r.distance(&Point2::new(3.0, 4.0)), 4.0));
    }

    #[test]
    fn rotate_defaults_to_start() {
        let r = ray1().rotate(90.0);
        assert!(equal_p(&r.start(), &ray1().start()));
        assert!(equal(r.angle(), 135.0));
    }
}
