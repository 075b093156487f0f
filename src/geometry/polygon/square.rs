use std::ops::Deref;

use crate::error::Result;
use crate::geometry::curve::{AffineCurve, Curve, Segment};
use crate::math::vector_2d::{left_normal, normalize_or_zero};
use crate::math::{Point2, Vector2};
use crate::operations::transform::{AffineMap, Transform};

use super::{validate, Polygon};

/// A polygon with four equal sides and four right angles.
///
/// Built from its first side; the rest of the square lies on the left of
/// that side (counter-clockwise) unless it was built clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Square(Polygon);

impl Square {
    /// The axis-aligned square of side `|side|` centred on the origin,
    /// counter-clockwise from its lower-left corner.
    #[must_use]
    pub fn new(side: f64) -> Self {
        let h = side.abs() / 2.0;
        Self::from_side(Point2::new(-h, -h), Point2::new(h, -h), false)
    }

    /// The square whose first side runs from `p1` to `p2`, lying on its left.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn through(p1: Point2, p2: Point2) -> Result<Self> {
        validate(&[p1, p2], "square", 2)?;
        Ok(Self::from_side(p1, p2, false))
    }

    /// The square built on `segment` as its first side.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn on(segment: &Segment) -> Result<Self> {
        Self::through(segment.start(), segment.end())
    }

    /// Rebuilds a square from its first side and orientation.
    pub(crate) fn from_side(p1: Point2, p2: Point2, clockwise: bool) -> Self {
        let normal = left_normal(&(p2 - p1));
        let normal = if clockwise { -normal } else { normal };
        Self(Polygon::from_vertices(vec![p1, p2, p2 + normal, p1 + normal]))
    }

    /// Same first vertex and direction, new side length `|length|`.
    #[must_use]
    pub fn with_side_length(&self, length: f64) -> Self {
        let first = self.side(1);
        let dir = if first.is_trivial() {
            Vector2::x()
        } else {
            normalize_or_zero(&first.vector())
        };
        let start = first.start();
        Self::from_side(start, start + dir * length.abs(), self.is_clockwise())
    }

    #[must_use]
    pub fn side_length(&self) -> f64 {
        self.side(1).length()
    }

    /// Returns `true` if the vertices run clockwise.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        self.signed_area() < 0.0
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Deref for Square {
    type Target = Polygon;

    fn deref(&self) -> &Polygon {
        &self.0
    }
}

impl From<Square> for Polygon {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl Transform for Square {
    fn transform(&self, map: &AffineMap) -> Self {
        let clockwise = self.is_clockwise() != map.is_reversing();
        Self::from_side(
            map.transform_point(&self.vertex(1)),
            map.transform_point(&self.vertex(2)),
            clockwise,
        )
    }
}
