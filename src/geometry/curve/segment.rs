use tracing::debug;

use crate::math::intersect_2d::{solve_lines, LineCrossing};
use crate::math::vector_2d::{is_zero, left_normal, normalize_or_zero, project};
use crate::math::{equal, equal_p, Point2, Vector2};
use crate::operations::transform::{AffineMap, Transform};

use super::{affine, AffineCurve, Circle, Curve, CurveDomain};

/// A bounded segment `P(s) = start + s * (end - start)`, `s ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
}

impl Segment {
    /// Creates a new segment between two points.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    /// Returns `|end - start|`.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn middle(&self) -> Point2 {
        self.point(0.5)
    }

    /// Same endpoints, swapped.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Keeps the start and moves the end to `point(k)`.
    #[must_use]
    pub fn extend(&self, k: f64) -> Self {
        Self::new(self.start, self.point(k))
    }

    /// The segment from `point(a)` to `point(b)`.
    #[must_use]
    pub fn extend_between(&self, a: f64, b: f64) -> Self {
        Self::new(self.point(a), self.point(b))
    }

    /// Keeps start and direction, sets the length to `|length|`.
    /// A trivial segment has no direction and stays trivial.
    #[must_use]
    pub fn extend_to_length(&self, length: f64) -> Self {
        let dir = normalize_or_zero(&self.vector());
        Self::new(self.start, self.start + dir * length.abs())
    }

    /// Keeps the start and moves the end onto the support of `axis`.
    ///
    /// Unchanged when the supports are parallel.
    #[must_use]
    pub fn extend_to_line<C: AffineCurve + ?Sized>(&self, axis: &C) -> Self {
        match solve_lines(&self.start, &self.vector(), &axis.pivot(), &axis.vector()) {
            LineCrossing::Point { point, .. } => Self::new(self.start, point),
            LineCrossing::Parallel | LineCrossing::Coincident => {
                debug!(start = ?self.start, "segment parallel to target line");
                *self
            }
        }
    }

    /// The perpendicular dropped from the start point onto the support of `axis`.
    #[must_use]
    pub fn height_to<C: AffineCurve + ?Sized>(&self, axis: &C) -> Self {
        let pivot = axis.pivot();
        Self::new(self.start, pivot + project(&(self.start - pivot), &axis.vector()))
    }

    /// The segment from the start point to the tangency point on `circle`.
    /// See [`super::Line::tangent_to`] for the meaning of `sign`.
    #[must_use]
    pub fn tangent_to(&self, circle: &Circle, sign: f64) -> Self {
        let vector = circle.tangent_vector(&self.start, sign).unwrap_or_else(|| {
            debug!(start = ?self.start, "tangent requested from inside a circle");
            Vector2::zeros()
        });
        Self::new(self.start, self.start + vector)
    }

    /// Same vector, starting at `start`.
    #[must_use]
    pub fn at(&self, start: Point2) -> Self {
        Self::new(start, start + self.vector())
    }

    /// Same start and length, direction of `other` turned by +90°.
    #[must_use]
    pub fn perpendicular_to<C: AffineCurve + ?Sized>(&self, other: &C) -> Self {
        let dir = normalize_or_zero(&left_normal(&other.vector()));
        Self::new(self.start, self.start + dir * self.length())
    }

    /// Same endpoints, in order.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        equal_p(&self.start, &other.start) && equal_p(&self.end, &other.end)
    }

    /// Same length.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        equal(self.length(), other.length())
    }
}

impl Default for Segment {
    fn default() -> Self {
        Self::new(Point2::origin(), Point2::new(1.0, 0.0))
    }
}

impl Curve for Segment {
    fn point(&self, s: f64) -> Point2 {
        affine::point(&self.start, &self.vector(), s)
    }

    fn locus(&self, p: &Point2) -> f64 {
        affine::locus(&self.start, &self.vector(), p)
    }

    fn equation(&self, p: &Point2) -> bool {
        affine::equation(&self.start, &self.vector(), p)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::UNIT
    }

    fn is_trivial(&self) -> bool {
        is_zero(&self.vector())
    }

    fn tangent_v(&self, _s: f64) -> Vector2 {
        affine::tangent(&self.vector())
    }

    fn distance(&self, p: &Point2) -> f64 {
        affine::distance(&self.start, &self.vector(), self.domain(), p)
    }
}

impl AffineCurve for Segment {
    fn pivot(&self) -> Point2 {
        self.start
    }

    fn vector(&self) -> Vector2 {
        self.end - self.start
    }
}

impl Transform for Segment {
    fn transform(&self, map: &AffineMap) -> Self {
        Self::new(map.transform_point(&self.start), map.transform_point(&self.end))
    }

    fn default_center(&self) -> Point2 {
        self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::curve::Line;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn seg1() -> Segment {
        Segment::new(p(1.0, 2.0), p(6.0, 6.0))
    }

    fn ten() -> Segment {
        Segment::default().extend_to_length(10.0)
    }

    #[test]
    fn containment_follows_domain() {
        let s = seg1();
        assert!(s.is_containing(&s.point(0.0)));
        assert!(s.is_containing(&s.point(0.5)));
        assert!(s.is_containing(&s.point(1.0)));
        assert!(!s.is_containing(&s.point(1.4)));
        assert!(!s.is_containing(&s.point(-1.4)));
        assert!(!s.is_containing(&Point2::origin()));
        for t in [-2.0, -0.001, 0.25, 0.999, 1.001, 3.0] {
            assert_eq!(s.is_containing(&s.point(t)), (0.0..=1.0).contains(&t), "t={t}");
        }
    }

    #[test]
    fn containment_on_axis() {
        let s = ten();
        assert!(s.is_containing(&p(0.0, 0.0)));
        assert!(s.is_containing(&p(5.0, 0.0)));
        assert!(s.is_containing(&p(10.0, 0.0)));
        assert!(!s.is_containing(&p(15.0, 0.0)));
        assert!(!s.is_containing(&p(-10.0, 0.0)));
        assert!(!s.is_containing(&p(-11.0, 0.0)));
        assert!(!s.is_containing(&p(-9.0, 0.0)));
        assert!(!s.is_containing(&p(5.0, 1.0)));
    }

    #[test]
    fn length_and_middle() {
        let s = Segment::new(p(0.0, 0.0), p(3.0, 4.0));
        assert!(equal(s.length(), 5.0));
        assert!(equal_p(&s.middle(), &p(1.5, 2.0)));
    }

    #[test]
    fn similarity() {
        let s = seg1();
        assert!(s.is_similar(&s.rotate(30.0)));
        assert!(!s.is_similar(&s.scale(2.0)));
        assert!(s.is_similar(&s.flip()));
        assert!(!s.is_equal(&s.rotate(30.0)));
    }

    #[test]
    fn extension() {
        let s = seg1();
        assert!(s.extend_between(0.0, 1.0).is_equal(&s));
        assert!(equal(s.extend_between(0.0, 2.0).length(), s.length() * 2.0));
        assert!(equal(s.extend_between(-2.0, 0.0).length(), s.length() * 2.0));
        assert!(s.extend_between(0.0, 2.0).is_containing(&s.point(1.4)));
        assert!(s.extend(1.0).is_equal(&s));
        assert!(s.extend(2.0).is_equal(&s.extend_between(0.0, 2.0)));
        for n in [-3.0, -0.5, 0.0, 0.5, 2.0, 7.5] {
            assert!(equal(s.extend(n).length(), f64::abs(n) * s.length()));
            assert!(equal(s.extend(n).extend(n).length(), n * n * s.length()));
        }
        assert!(s.extend(0.0).is_trivial());
        assert!(s.extend_to_length(0.0).is_trivial());
    }

    #[test]
    fn extend_to_length() {
        let s = seg1();
        assert!(s.extend_to_length(s.length()).is_similar(&s));
        assert!(equal(s.extend_to_length(-1.0).length(), 1.0));
        assert!(equal(s.extend_to_length(25.0).length(), 25.0));
        let trivial = Segment::new(p(2.0, 2.0), p(2.0, 2.0));
        assert!(equal(trivial.extend_to_length(4.0).length(), 0.0));
    }

    #[test]
    fn extend_to_line() {
        let s = seg1();
        let e = s.extend_to_line(&Line::ox());
        assert!(e.start().eq(&s.start()));
        assert!(Line::ox().is_containing(&e.end()));
        assert!(e.is_parallel_to(&s));
        assert!(s.extend_to_line(&s.support().translate(Vector2::new(0.0, 1.0))).is_equal(&s));
    }

    #[test]
    fn height_to() {
        let s = seg1();
        let lin1 = Line::through(p(1.0, 2.0), p(4.0, 6.0));
        let lin2 = Line::through(p(-2.0, 3.0), p(4.0, -6.0));
        assert!(equal(s.height_to(&Line::ox()).length(), s.start().y));
        assert!(equal(s.height_to(&Line::oy()).length(), s.start().x));
        assert!(equal(s.height_to(&lin1).length(), 0.0));
        assert!(s.height_to(&lin2).is_perpendicular_to(&lin2));
    }

    #[test]
    fn tangent_segment_touches_circle() {
        let c = Circle::new(p(1.0, 2.0), 3.0).unwrap_or_default();
        let t = Segment::default().at(p(5.0, 0.0)).tangent_to(&c, 1.0);
        assert!(c.is_containing(&t.end()));
        assert!(t.is_perpendicular_to(&Line::through(c.center(), t.end())));

        let on = c.point(0.25);
        let at = Segment::default().at(on).tangent_to(&c, 1.0);
        assert!(at.is_perpendicular_to(&Line::through(c.center(), on)));
    }

    #[test]
    fn perpendicular_keeps_length() {
        let s = seg1();
        let q = s.perpendicular_to(&Line::ox());
        assert!(equal(q.length(), s.length()));
        assert!(q.is_perpendicular_to(&Line::ox()));
    }

    #[test]
    fn transformations() {
        let s = seg1();
        let moved = s.translate(Vector2::new(5.0, 6.0));
        assert!(equal_p(&moved.start(), &p(6.0, 8.0)));
        assert!(equal_p(&moved.end(), &p(11.0, 12.0)));
        assert!(moved.is_parallel_to(&s));
        assert!(equal(s.rotate(77.0).length(), s.length()));
        assert!(equal(s.reflect(12.0).length(), s.length()));
    }
}
