use std::ops::Deref;

use crate::error::Result;
use crate::geometry::curve::Segment;
use crate::math::Point2;
use crate::operations::transform::{AffineMap, Transform};

use super::{validate, Polygon};

/// A polygon with four vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrilateral(Polygon);

impl Quadrilateral {
    /// Creates a quadrilateral.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn new(a: Point2, b: Point2, c: Point2, d: Point2) -> Result<Self> {
        let vertices = vec![a, b, c, d];
        validate(&vertices, "quadrilateral", 4)?;
        Ok(Self(Polygon::from_vertices(vertices)))
    }

    /// The diagonals `1→3` and `2→4`.
    #[must_use]
    pub fn diagonals(&self) -> (Segment, Segment) {
        (
            Segment::new(self.vertex(1), self.vertex(3)),
            Segment::new(self.vertex(2), self.vertex(4)),
        )
    }
}

impl Deref for Quadrilateral {
    type Target = Polygon;

    fn deref(&self) -> &Polygon {
        &self.0
    }
}

impl From<Quadrilateral> for Polygon {
    fn from(quad: Quadrilateral) -> Self {
        quad.0
    }
}

impl Transform for Quadrilateral {
    fn transform(&self, map: &AffineMap) -> Self {
        Self(self.0.transform(map))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{equal, equal_p};
    use crate::operations::query::Intersections;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn diagonals_of_a_kite() {
        let q = Quadrilateral::new(p(0.0, 0.0), p(2.0, -1.0), p(4.0, 0.0), p(2.0, 3.0)).unwrap();
        let (d1, d2) = q.diagonals();
        assert!(equal(d1.length(), 4.0));
        assert!(equal(d2.length(), 4.0));
        let cross = d1.intersections(&d2);
        assert_eq!(cross.len(), 1);
        assert!(equal_p(&cross[0], &p(2.0, 0.0)));
    }

    #[test]
    fn new_validates() {
        assert!(Quadrilateral::new(p(0.0, 0.0), p(1.0, 0.0), p(1.0, f64::NAN), p(0.0, 1.0)).is_err());
    }
}
