use tracing::debug;

use crate::geometry::angle::Angle;
use crate::math::vector_2d::{is_zero, left_normal, unit_v};
use crate::math::{equal_p, Point2, Vector2};
use crate::operations::transform::{AffineMap, Transform};

use super::{affine, AffineCurve, Circle, Curve, CurveDomain, Segment};

/// An infinite line defined by a pivot point and a direction vector.
///
/// The parametric form is: `P(s) = pivot + s * vector`. The direction is
/// unoriented: lines are compared modulo 180°. A zero vector gives a
/// trivial line that degenerates to its pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pivot: Point2,
    vector: Vector2,
}

impl Line {
    /// Creates a new line from a pivot and direction.
    #[must_use]
    pub fn new(pivot: Point2, vector: Vector2) -> Self {
        Self { pivot, vector }
    }

    /// The line with `point(0) == a` and `point(1) == b`.
    #[must_use]
    pub fn through(a: Point2, b: Point2) -> Self {
        Self::new(a, b - a)
    }

    /// The x-axis.
    #[must_use]
    pub fn ox() -> Self {
        Self::new(Point2::origin(), Vector2::x())
    }

    /// The y-axis.
    #[must_use]
    pub fn oy() -> Self {
        Self::new(Point2::origin(), Vector2::y())
    }

    /// Same direction, moved to pass through `pivot`.
    #[must_use]
    pub fn at(&self, pivot: Point2) -> Self {
        Self::new(pivot, self.vector)
    }

    /// Same pivot, direction set to `degrees`. The vector keeps its length;
    /// a trivial line gets a unit vector.
    #[must_use]
    pub fn at_angle(&self, degrees: f64) -> Self {
        let len = if is_zero(&self.vector) {
            1.0
        } else {
            self.vector.norm()
        };
        Self::new(self.pivot, unit_v(degrees) * len)
    }

    /// Same pivot, direction of `other`.
    #[must_use]
    pub fn parallel_to<C: AffineCurve + ?Sized>(&self, other: &C) -> Self {
        Self::new(self.pivot, other.vector())
    }

    /// Same pivot, direction orthogonal to `other`.
    #[must_use]
    pub fn perpendicular_to<C: AffineCurve + ?Sized>(&self, other: &C) -> Self {
        Self::new(self.pivot, left_normal(&other.vector()))
    }

    /// The line through the pivot touching `circle`.
    ///
    /// From an outside point `sign >= 0` selects the tangent whose touching
    /// point is counter-clockwise from the center-to-pivot direction. From a
    /// point inside the circle the result is trivial.
    #[must_use]
    pub fn tangent_to(&self, circle: &Circle, sign: f64) -> Self {
        let vector = circle.tangent_vector(&self.pivot, sign).unwrap_or_else(|| {
            debug!(pivot = ?self.pivot, "tangent requested from inside a circle");
            Vector2::zeros()
        });
        Self::new(self.pivot, vector)
    }

    /// The bisector of `angle`, through its vertex.
    #[must_use]
    pub fn bisectrisse(angle: &Angle) -> Self {
        Self::new(angle.vertex(), unit_v(angle.start() + angle.value() / 2.0))
    }

    /// The perpendicular bisector of `segment`.
    #[must_use]
    pub fn mid_perpendicular(segment: &Segment) -> Self {
        Self::new(segment.middle(), left_normal(&segment.vector()))
    }

    /// Same point set. Trivial lines are equal only to trivial lines with
    /// the same pivot.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self.is_trivial(), other.is_trivial()) {
            (true, true) => equal_p(&self.pivot, &other.pivot),
            (false, false) => self.is_parallel_to(other) && other.equation(&self.pivot),
            _ => false,
        }
    }

    /// All non-trivial lines are congruent, as are all trivial ones.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        self.is_trivial() == other.is_trivial()
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::ox()
    }
}

impl Curve for Line {
    fn point(&self, s: f64) -> Point2 {
        affine::point(&self.pivot, &self.vector, s)
    }

    fn locus(&self, p: &Point2) -> f64 {
        affine::locus(&self.pivot, &self.vector, p)
    }

    fn equation(&self, p: &Point2) -> bool {
        affine::equation(&self.pivot, &self.vector, p)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::REAL
    }

    fn is_trivial(&self) -> bool {
        is_zero(&self.vector)
    }

    fn tangent_v(&self, _s: f64) -> Vector2 {
        affine::tangent(&self.vector)
    }

    fn distance(&self, p: &Point2) -> f64 {
        affine::distance(&self.pivot, &self.vector, self.domain(), p)
    }
}

impl AffineCurve for Line {
    fn pivot(&self) -> Point2 {
        self.pivot
    }

    fn vector(&self) -> Vector2 {
        self.vector
    }
}

impl Transform for Line {
    fn transform(&self, map: &AffineMap) -> Self {
        Self::new(map.transform_point(&self.pivot), map.transform_vector(&self.vector))
    }

    fn default_center(&self) -> Point2 {
        self.pivot
    }
}
