use std::f64::consts::{PI, TAU};

use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{angle_v, is_zero, left_normal, rotate_v};
use crate::math::{equal, equal_p, modulo, Point2, Vector2, FULL_TURN};
use crate::operations::transform::{AffineMap, Transform};

use super::{Curve, CurveDomain};

/// A full circle in the plane.
///
/// `P(s) = center + radius * (cos 2πs, sin 2πs)`. The parameter has period
/// `1`, so `point(0) == point(1) == point(2)`. A zero radius is a valid
/// trivial circle that behaves as its centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative, or if the radius or the
    /// centre is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !radius.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "circle radius",
                value: radius,
            }
            .into());
        }
        if radius < 0.0 {
            return Err(GeometryError::NegativeRadius(radius).into());
        }
        for value in [center.x, center.y] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite {
                    what: "circle center",
                    value,
                }
                .into());
            }
        }
        Ok(Self { center, radius })
    }

    /// The unit circle centred on the origin.
    #[must_use]
    pub fn unit() -> Self {
        Self {
            center: Point2::origin(),
            radius: 1.0,
        }
    }

    /// Same centre, new radius.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Circle::new`].
    pub fn with_radius(&self, radius: f64) -> Result<Self> {
        Self::new(self.center, radius)
    }

    /// Same radius, centred at `center`.
    #[must_use]
    pub fn at(&self, center: Point2) -> Self {
        Self {
            center,
            radius: self.radius,
        }
    }

    /// Returns the centre of the circle.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Enclosed area `πR²`.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Perimeter `2πR`.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Returns `true` if `p` lies inside the closed disc.
    #[must_use]
    pub fn is_enclosing(&self, p: &Point2) -> bool {
        let d = (p - self.center).norm();
        d <= self.radius || equal(d, self.radius)
    }

    /// Vector from `from` to the tangency point of a tangent through `from`.
    ///
    /// From an exterior point, `sign >= 0` selects the tangency point lying
    /// counter-clockwise from the centre→`from` direction, `sign < 0` the
    /// clockwise one. On the circle the result is the unit tangent at
    /// `from`, oriented by `sign`. Returns `None` from strictly inside, or
    /// when `from` is the centre of a trivial circle.
    #[must_use]
    pub fn tangent_vector(&self, from: &Point2, sign: f64) -> Option<Vector2> {
        let w = from - self.center;
        let d = w.norm();
        let orientation = if sign >= 0.0 { 1.0 } else { -1.0 };
        if is_zero(&w) {
            return None;
        }
        if equal(d, self.radius) {
            return Some(left_normal(&w) / d * orientation);
        }
        if d < self.radius {
            trace!(?from, radius = self.radius, "point strictly inside circle");
            return None;
        }
        let ratio = self.radius / d;
        let alpha = ratio.acos().to_degrees();
        let touch = self.center + rotate_v(&w, orientation * alpha) * ratio;
        Some(touch - from)
    }

    /// Same centre and radius.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        equal_p(&self.center, &other.center) && equal(self.radius, other.radius)
    }

    /// Same radius.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        equal(self.radius, other.radius)
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::unit()
    }
}

impl Curve for Circle {
    fn point(&self, s: f64) -> Point2 {
        let (sin, cos) = (TAU * modulo(s, 1.0)).sin_cos();
        self.center + Vector2::new(cos, sin) * self.radius
    }

    fn locus(&self, p: &Point2) -> f64 {
        if self.is_trivial() {
            return 0.0;
        }
        modulo(angle_v(&(p - self.center)) / FULL_TURN, 1.0)
    }

    fn equation(&self, p: &Point2) -> bool {
        equal((p - self.center).norm(), self.radius)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::UNIT
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn is_trivial(&self) -> bool {
        equal(self.radius, 0.0)
    }

    fn tangent_v(&self, s: f64) -> Vector2 {
        if self.is_trivial() {
            return Vector2::zeros();
        }
        let (sin, cos) = (TAU * modulo(s, 1.0)).sin_cos();
        Vector2::new(-sin, cos)
    }

    fn is_containing(&self, p: &Point2) -> bool {
        self.equation(p)
    }

    fn distance(&self, p: &Point2) -> f64 {
        ((p - self.center).norm() - self.radius).abs()
    }
}

impl Transform for Circle {
    fn transform(&self, map: &AffineMap) -> Self {
        Self {
            center: map.transform_point(&self.center),
            radius: self.radius * map.length_scale(),
        }
    }
}
