use std::ops::Deref;

use crate::error::Result;
use crate::geometry::curve::Segment;
use crate::math::{Point2, TOLERANCE};
use crate::operations::transform::{AffineMap, Transform};

use super::{validate, Polygon};

/// A polygon with three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle(Polygon);

impl Triangle {
    /// Creates a triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is not finite.
    pub fn new(a: Point2, b: Point2, c: Point2) -> Result<Self> {
        let vertices = vec![a, b, c];
        validate(&vertices, "triangle", 3)?;
        Ok(Self(Polygon::from_vertices(vertices)))
    }

    /// Segment from vertex `i` to the midpoint of the opposite side.
    #[must_use]
    pub fn median(&self, i: usize) -> Segment {
        Segment::new(self.vertex(i), self.side(i + 1).middle())
    }

    /// Perpendicular from vertex `i` to the support of the opposite side.
    #[must_use]
    pub fn altitude(&self, i: usize) -> Segment {
        let v = self.vertex(i);
        Segment::new(v, v).height_to(&self.side(i + 1))
    }

    /// Internal bisector from vertex `i`, ending on the opposite side.
    #[must_use]
    pub fn bisectrisse(&self, i: usize) -> Segment {
        let (a, b, c) = (self.vertex(i), self.vertex(i + 1), self.vertex(i + 2));
        let (ab, ac) = ((b - a).norm(), (c - a).norm());
        if ab + ac < TOLERANCE {
            return Segment::new(a, a);
        }
        Segment::new(a, b + (c - b) * (ab / (ab + ac)))
    }
}

impl Deref for Triangle {
    type Target = Polygon;

    fn deref(&self) -> &Polygon {
        &self.0
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        triangle.0
    }
}

impl Transform for Triangle {
    fn transform(&self, map: &AffineMap) -> Self {
        Self(self.0.transform(map))
    }
}
