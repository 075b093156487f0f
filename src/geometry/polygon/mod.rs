mod quadrilateral;
mod square;
mod triangle;

pub use quadrilateral::Quadrilateral;
pub use square::Square;
pub use triangle::Triangle;

use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Curve, CurveDomain, Segment};
use crate::math::polygon_2d::{rotate_to_start, signed_area_2d, winding_number_2d};
use crate::math::vector_2d::cross;
use crate::math::{equal, equal_mod, equal_p, modulo, near_zero, Point2, Vector2, FULL_TURN};
use crate::operations::transform::{AffineMap, Transform};

/// A closed polygon given by its ordered vertices.
///
/// Sides are derived: side `k` runs from vertex `k` to vertex `k + 1`, the
/// last one closing the loop. Vertex and side indices are 1-based and wrap
/// around. As a curve, the boundary is parametrized with period `1`, side
/// `k` covering `[(k - 1) / n, k / n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from at least three finite vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three vertices are given or any
    /// coordinate is not finite.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        validate(&vertices, "polygon", 3)?;
        Ok(Self { vertices })
    }

    /// Wraps vertices already known to be valid.
    pub(crate) fn from_vertices(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false` for a validated polygon.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The `i`-th vertex, 1-based, wrapping around.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Point2 {
        let n = self.vertices.len();
        self.vertices[(i % n + n - 1) % n]
    }

    /// The `i`-th side, from vertex `i` to vertex `i + 1`.
    #[must_use]
    pub fn side(&self, i: usize) -> Segment {
        let i = i % self.vertices.len();
        Segment::new(self.vertex(i), self.vertex(i + 1))
    }

    /// All sides in order.
    #[must_use]
    pub fn sides(&self) -> Vec<Segment> {
        (1..=self.vertices.len()).map(|i| self.side(i)).collect()
    }

    /// Sum of the side lengths.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.sides().iter().map(Segment::length).sum()
    }

    /// Shoelace area, positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Unsigned enclosed area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns `true` if two vertices coincide or all vertices are collinear.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let n = self.vertices.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if equal_p(&self.vertices[i], &self.vertices[j]) {
                    return true;
                }
            }
        }
        let perimeter = self.perimeter();
        near_zero(self.area(), perimeter * perimeter)
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn is_enclosing(&self, p: &Point2) -> bool {
        self.is_containing(p) || winding_number_2d(p, &self.vertices) != 0
    }

    /// Same vertices in the same order.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(a, b)| equal_p(a, b))
    }

    /// Congruence: same side lengths and turns up to a cyclic shift,
    /// reversal or mirror image.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        let n = self.vertices.len();
        if n != other.vertices.len() {
            return false;
        }
        let target = signature(&other.vertices);
        let mirrored: Vec<Point2> = self.vertices.iter().map(|p| Point2::new(-p.x, p.y)).collect();
        let mut reversed = self.vertices.clone();
        reversed.reverse();
        let mut mirrored_reversed = mirrored.clone();
        mirrored_reversed.reverse();

        let candidates = [&self.vertices, &reversed, &mirrored, &mirrored_reversed];
        candidates
            .iter()
            .map(|vs| signature(vs))
            .any(|sig| (0..n).any(|k| same_signature(&rotate_to_start(&sig, k), &target)))
    }

    /// The side holding parameter `s` and the local parameter on it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn locate(&self, s: f64) -> (Segment, f64) {
        let n = self.vertices.len();
        let u = modulo(s, 1.0) * n as f64;
        let k = (u.floor() as usize).min(n - 1);
        (self.side(k + 1), u - k as f64)
    }

    /// Index (0-based) of the side nearest to `p`, and its distance.
    fn nearest_side(&self, p: &Point2) -> (usize, Segment) {
        let sides = self.sides();
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (k, side) in sides.iter().enumerate() {
            let d = side.distance(p);
            if d < best_dist {
                best = k;
                best_dist = d;
            }
        }
        (best, sides[best])
    }
}

impl Curve for Polygon {
    fn point(&self, s: f64) -> Point2 {
        let (side, t) = self.locate(s);
        side.point(t)
    }

    #[allow(clippy::cast_precision_loss)]
    fn locus(&self, p: &Point2) -> f64 {
        if self.is_trivial() {
            return 0.0;
        }
        let (k, side) = self.nearest_side(p);
        if !side.is_containing(p) {
            debug!(?p, "locus of a point off the polygon boundary");
        }
        let t = side.domain().clamp(side.locus(p));
        modulo((k as f64 + t) / self.vertices.len() as f64, 1.0)
    }

    fn equation(&self, p: &Point2) -> bool {
        self.sides().iter().any(|side| side.is_containing(p))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::UNIT
    }

    fn is_closed(&self) -> bool {
        true
    }

    fn is_trivial(&self) -> bool {
        self.sides().iter().all(Curve::is_trivial)
    }

    fn tangent_v(&self, s: f64) -> Vector2 {
        let (side, t) = self.locate(s);
        side.tangent_v(t)
    }

    fn is_containing(&self, p: &Point2) -> bool {
        self.equation(p)
    }

    fn distance(&self, p: &Point2) -> f64 {
        let (_, side) = self.nearest_side(p);
        side.distance(p)
    }
}

impl Transform for Polygon {
    fn transform(&self, map: &AffineMap) -> Self {
        Self::from_vertices(self.vertices.iter().map(|p| map.transform_point(p)).collect())
    }
}

/// Checks the vertex count and finiteness shared by every polygon builder.
fn validate(vertices: &[Point2], shape: &'static str, expected: usize) -> Result<()> {
    if vertices.len() < expected {
        return Err(GeometryError::TooFewVertices {
            shape,
            expected,
            found: vertices.len(),
        }
        .into());
    }
    for value in vertices.iter().flat_map(|p| [p.x, p.y]) {
        if !value.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "polygon vertex",
                value,
            }
            .into());
        }
    }
    Ok(())
}

/// Side length and turn angle (degrees) at the start of every side.
fn signature(vertices: &[Point2]) -> Vec<(f64, f64)> {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let prev = vertices[i] - vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n] - vertices[i];
            let turn = cross(&prev, &next).atan2(prev.dot(&next)).to_degrees();
            (next.norm(), turn)
        })
        .collect()
}

fn same_signature(a: &[(f64, f64)], b: &[(f64, f64)]) -> bool {
    a.iter()
        .zip(b)
        .all(|((la, ta), (lb, tb))| equal(*la, *lb) && equal_mod(FULL_TURN, *ta, *tb))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Line;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn pol1() -> Polygon {
        Polygon::new(vec![p(1.0, 2.0), p(3.0, 4.0), p(0.0, 0.0), p(3.5, 4.0)]).unwrap()
    }

    fn unit_square() -> Polygon {
        Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]).unwrap()
    }

    #[test]
    fn new_validates_vertices() {
        assert!(Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0)]).is_err());
        assert!(Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(f64::NAN, 1.0)]).is_err());
        assert_eq!(pol1().len(), 4);
    }

    #[test]
    fn indexing_wraps() {
        let poly = unit_square();
        assert!(equal_p(&poly.vertex(1), &p(0.0, 0.0)));
        assert!(equal_p(&poly.vertex(5), &p(0.0, 0.0)));
        assert!(equal_p(&poly.vertex(0), &p(0.0, 1.0)));
        assert!(poly.side(4).is_equal(&Segment::new(p(0.0, 1.0), p(0.0, 0.0))));
        assert_eq!(poly.sides().len(), 4);
        assert!(equal_p(&poly.vertex(usize::MAX), &p(1.0, 1.0)));
        assert!(poly.side(usize::MAX).is_equal(&Segment::new(p(1.0, 1.0), p(0.0, 1.0))));
    }

    #[test]
    fn measures() {
        let poly = unit_square();
        assert!(equal(poly.perimeter(), 4.0));
        assert!(equal(poly.area(), 1.0));
        assert!(poly.signed_area() > 0.0);
        assert!(!poly.is_degenerate());
        let flat = Polygon::new(vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)]).unwrap();
        assert!(flat.is_degenerate());
        let doubled = Polygon::new(vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]).unwrap();
        assert!(doubled.is_degenerate());
    }

    #[test]
    fn enclosure_includes_boundary() {
        let poly = unit_square();
        assert!(poly.is_enclosing(&p(0.5, 0.5)));
        assert!(poly.is_enclosing(&p(1.0, 0.5)));
        assert!(poly.is_enclosing(&p(0.0, 0.0)));
        assert!(!poly.is_enclosing(&p(1.5, 0.5)));
        assert!(!poly.is_enclosing(&p(-0.1, -0.1)));
    }

    #[test]
    fn boundary_parametrization() {
        let poly = unit_square();
        assert!(equal_p(&poly.point(0.0), &p(0.0, 0.0)));
        assert!(equal_p(&poly.point(0.125), &p(0.5, 0.0)));
        assert!(equal_p(&poly.point(0.5), &p(1.0, 1.0)));
        assert!(equal_p(&poly.point(1.0), &p(0.0, 0.0)));
        for s in [0.0, 0.1, 0.3, 0.55, 0.9] {
            assert!(equal(poly.locus(&poly.point(s)), s), "s={s}");
            assert!(poly.is_containing(&poly.point(s)));
        }
        assert!(!poly.is_containing(&p(0.5, 0.5)));
        assert!(equal(poly.distance(&p(0.5, 0.75)), 0.25));
    }

    #[test]
    fn equality_and_congruence() {
        let poly = unit_square();
        assert!(poly.is_equal(&poly.clone()));
        assert!(!poly.is_equal(&poly.translate(Vector2::new(1.0, 0.0))));
        assert!(poly.is_similar(&poly.rotate(33.0).translate(Vector2::new(4.0, -2.0))));
        assert!(poly.is_similar(&poly.reflect(10.0)));
        let shifted = Polygon::new(rotate_to_start(poly.vertices(), 2)).unwrap();
        assert!(poly.is_similar(&shifted));
        assert!(!poly.is_similar(&poly.scale(2.0)));
        assert!(!poly.is_similar(&poly.scale_xy(1.0, 2.0)));
        assert!(pol1().is_similar(&pol1().reflect_in(&Line::ox())));
    }

    #[test]
    fn transform_maps_vertices() {
        let poly = unit_square().rotate(90.0);
        assert!(equal_p(&poly.vertex(2), &p(0.0, 1.0)));
        assert!(equal(poly.area(), 1.0));
        assert!(unit_square().reflect(0.0).signed_area() < 0.0);
    }
}
