use crate::geometry::curve::{AffineCurve, Ray};
use crate::math::intersect_2d::{solve_lines, LineCrossing};
use crate::math::vector_2d::{angle_v, unit_v};
use crate::math::{equal, equal_mod, equal_p, modulo, Point2, FULL_TURN, HALF_TURN};
use crate::operations::transform::{AffineMap, Transform};

/// A directed angle: two rays sharing a vertex.
///
/// `start` and `end` are direction angles in degrees, kept in `[0, 360)`.
/// The value is the counter-clockwise sweep `mod(end - start, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    vertex: Point2,
    start: f64,
    end: f64,
}

impl Angle {
    /// An angle of `value` degrees at the origin, starting from the x-axis.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self::from_parts(Point2::origin(), 0.0, value)
    }

    /// Builds an angle from its vertex and side directions.
    #[must_use]
    pub fn from_parts(vertex: Point2, start: f64, end: f64) -> Self {
        Self {
            vertex,
            start: modulo(start, FULL_TURN),
            end: modulo(end, FULL_TURN),
        }
    }

    /// The directed angle at `vertex` from the ray towards `p1` to the ray
    /// towards `p2`. Zero if either point coincides with the vertex.
    #[must_use]
    pub fn within(p1: &Point2, vertex: &Point2, p2: &Point2) -> Self {
        let start = angle_v(&(p1 - vertex));
        if equal_p(p1, vertex) || equal_p(p2, vertex) {
            return Self::from_parts(*vertex, start, start);
        }
        Self::from_parts(*vertex, start, angle_v(&(p2 - vertex)))
    }

    /// The unsigned angle between the supports of two curves, in `[0, 180)`.
    ///
    /// The vertex is the crossing point of the supports, or the first pivot
    /// when they do not cross.
    #[must_use]
    pub fn between<A, B>(first: &A, second: &B) -> Self
    where
        A: AffineCurve + ?Sized,
        B: AffineCurve + ?Sized,
    {
        let vertex = match solve_lines(&first.pivot(), &first.vector(), &second.pivot(), &second.vector()) {
            LineCrossing::Point { point, .. } => point,
            LineCrossing::Parallel | LineCrossing::Coincident => first.pivot(),
        };
        let start = first.angle();
        let value = modulo(second.angle() - start, HALF_TURN);
        Self::from_parts(vertex, start, start + value)
    }

    /// Same sides, moved to `vertex`.
    #[must_use]
    pub fn at(&self, vertex: Point2) -> Self {
        Self::from_parts(vertex, self.start, self.end)
    }

    /// Same value, laid on `curve`: vertex at its pivot, start side along it.
    #[must_use]
    pub fn on<C: AffineCurve + ?Sized>(&self, curve: &C) -> Self {
        let start = curve.angle();
        Self::from_parts(curve.pivot(), start, start + self.value())
    }

    /// Same vertex and start side, end side moved to give `value`.
    #[must_use]
    pub fn with_value(&self, value: f64) -> Self {
        Self::from_parts(self.vertex, self.start, self.start + value)
    }

    /// Common start point of both sides.
    #[must_use]
    pub fn vertex(&self) -> Point2 {
        self.vertex
    }

    /// Direction of the start side, in `[0, 360)`.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Direction of the end side, in `[0, 360)`.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Counter-clockwise sweep from start to end, in `[0, 360)`.
    #[must_use]
    pub fn value(&self) -> f64 {
        modulo(self.end - self.start, FULL_TURN)
    }

    /// The same pair of sides traversed the other way: `360 - value`.
    #[must_use]
    pub fn complement(&self) -> Self {
        Self::from_parts(self.vertex, self.end, self.start)
    }

    /// The supplementary angle sharing the end side: `180 - value`.
    #[must_use]
    pub fn adjacent(&self) -> Self {
        Self::from_parts(self.vertex, self.end, self.start + HALF_TURN)
    }

    /// Both sides reversed; the value is unchanged.
    #[must_use]
    pub fn vertical(&self) -> Self {
        Self::from_parts(self.vertex, self.start + HALF_TURN, self.end + HALF_TURN)
    }

    /// Returns `true` for a value of 90 degrees.
    #[must_use]
    pub fn is_right(&self) -> bool {
        equal(self.value(), 90.0)
    }

    /// Unit ray along the start side.
    #[must_use]
    pub fn start_ray(&self) -> Ray {
        Ray::from_angle(self.vertex, self.start)
    }

    /// Unit ray along the end side.
    #[must_use]
    pub fn end_ray(&self) -> Ray {
        Ray::from_angle(self.vertex, self.end)
    }

    /// Same vertex and same side directions.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        equal_p(&self.vertex, &other.vertex)
            && equal_mod(FULL_TURN, self.start, other.start)
            && equal_mod(FULL_TURN, self.end, other.end)
    }

    /// Same value.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        equal_mod(FULL_TURN, self.value(), other.value())
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Transform for Angle {
    fn transform(&self, map: &AffineMap) -> Self {
        let side = |degrees: f64| angle_v(&map.transform_vector(&unit_v(degrees)));
        Self::from_parts(map.transform_point(&self.vertex), side(self.start), side(self.end))
    }
}
