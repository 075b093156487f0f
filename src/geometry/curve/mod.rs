mod affine;
mod circle;
mod line;
mod ray;
mod segment;

pub use circle::Circle;
pub use line::Line;
pub use ray::Ray;
pub use segment::Segment;

use crate::math::vector_2d::{angle_v, cross, left_normal};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// All of ℝ (lines).
    pub const REAL: Self = Self::new(f64::NEG_INFINITY, f64::INFINITY);

    /// `[0, ∞)` (rays).
    pub const POSITIVE: Self = Self::new(0.0, f64::INFINITY);

    /// `[0, 1]` (segments, and one period of closed curves).
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Creates a new curve domain.
    #[must_use]
    pub const fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns `true` if `t` lies in the domain, endpoints included up to
    /// [`TOLERANCE`].
    #[must_use]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.t_min - TOLERANCE && t <= self.t_max + TOLERANCE
    }

    /// Clamps `t` into the domain.
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        t.clamp(self.t_min, self.t_max)
    }
}

/// The contract shared by every curve of the kernel.
///
/// `point` and `locus` are mutually inverse on the curve: for a non-trivial
/// curve `locus(point(s)) == s` (modulo the period for closed curves) and
/// `point(locus(p)) == p` for every `p` on the curve. Trivial curves collapse
/// every locus to `0`.
pub trait Curve {
    /// Forward parametrization.
    fn point(&self, s: f64) -> Point2;

    /// Inverse parametrization. Constant `0` for trivial curves.
    fn locus(&self, p: &Point2) -> f64;

    /// Returns `true` if `p` satisfies the implicit equation of the curve's
    /// unrestricted support.
    fn equation(&self, p: &Point2) -> bool;

    /// Returns the valid locus-parameter domain.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed (periodic parameter).
    fn is_closed(&self) -> bool {
        false
    }

    /// Returns `true` if the curve has collapsed to a point.
    fn is_trivial(&self) -> bool;

    /// Unit tangent at parameter `s`; zero for trivial affine curves.
    fn tangent_v(&self, s: f64) -> Vector2;

    /// Unit normal at `s`: the tangent rotated by +90°.
    fn normal_v(&self, s: f64) -> Vector2 {
        left_normal(&self.tangent_v(s))
    }

    /// Returns `true` if `p` lies on the curve restricted to its domain.
    fn is_containing(&self, p: &Point2) -> bool {
        self.equation(p) && self.domain().contains(self.locus(p))
    }

    /// Distance from `p` to the curve restricted to its domain.
    fn distance(&self, p: &Point2) -> f64;
}

/// Curves of the form `pivot + s * vector`: [`Line`], [`Ray`], [`Segment`].
///
/// They differ only in their [`CurveDomain`].
pub trait AffineCurve: Curve {
    /// Point at parameter `0`.
    fn pivot(&self) -> Point2;

    /// Direction vector; the point at parameter `1` is `pivot + vector`.
    fn vector(&self) -> Vector2;

    /// Direction angle of the vector, in `[0, 360)`.
    fn angle(&self) -> f64 {
        angle_v(&self.vector())
    }

    /// The infinite line carrying this curve.
    fn support(&self) -> Line {
        Line::new(self.pivot(), self.vector())
    }

    /// Returns `true` if both curves are non-trivial with parallel directions.
    fn is_parallel_to<C: AffineCurve + ?Sized>(&self, other: &C) -> bool {
        let (u, v) = (self.vector(), other.vector());
        if self.is_trivial() || other.is_trivial() {
            return false;
        }
        cross(&u, &v).abs() <= TOLERANCE * u.norm() * v.norm()
    }

    /// Returns `true` if both curves are non-trivial with orthogonal directions.
    fn is_perpendicular_to<C: AffineCurve + ?Sized>(&self, other: &C) -> bool {
        let (u, v) = (self.vector(), other.vector());
        if self.is_trivial() || other.is_trivial() {
            return false;
        }
        u.dot(&v).abs() <= TOLERANCE * u.norm() * v.norm()
    }
}
