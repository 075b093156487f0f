use tracing::trace;

use crate::geometry::curve::{AffineCurve, Circle, Curve, CurveDomain, Line, Ray, Segment};
use crate::geometry::polygon::{Polygon, Quadrilateral, Square, Triangle};
use crate::math::intersect_2d::{circle_circle_points, line_circle_params, solve_lines, CircleCrossing, LineCrossing};
use crate::math::{equal_p, infinity_point, Point2, Vector2, TOLERANCE};

/// A borrowed curve of any kind, the closed set the intersection engine
/// dispatches over. A point takes part as a degenerate curve.
#[derive(Debug, Clone, Copy)]
pub enum CurveRef<'a> {
    Point(&'a Point2),
    Line(&'a Line),
    Ray(&'a Ray),
    Segment(&'a Segment),
    Circle(&'a Circle),
    Polygon(&'a Polygon),
}

impl CurveRef<'_> {
    /// Returns `true` if `p` lies on the curve restricted to its domain.
    #[must_use]
    pub fn is_containing(&self, p: &Point2) -> bool {
        match self {
            Self::Point(q) => equal_p(q, p),
            Self::Line(c) => c.is_containing(p),
            Self::Ray(c) => c.is_containing(p),
            Self::Segment(c) => c.is_containing(p),
            Self::Circle(c) => c.is_containing(p),
            Self::Polygon(c) => c.is_containing(p),
        }
    }

    fn affine(&self) -> Option<Affine> {
        match self {
            Self::Line(c) => Some(Affine::of(*c)),
            Self::Ray(c) => Some(Affine::of(*c)),
            Self::Segment(c) => Some(Affine::of(*c)),
            Self::Point(_) | Self::Circle(_) | Self::Polygon(_) => None,
        }
    }
}

/// Pivot, vector and domain of an affine operand.
#[derive(Debug, Clone, Copy)]
struct Affine {
    pivot: Point2,
    vector: Vector2,
    domain: CurveDomain,
    trivial: bool,
}

impl Affine {
    fn of<C: AffineCurve>(curve: &C) -> Self {
        Self {
            pivot: curve.pivot(),
            vector: curve.vector(),
            domain: curve.domain(),
            trivial: curve.is_trivial(),
        }
    }

    fn point(&self, t: f64) -> Point2 {
        self.pivot + self.vector * t
    }
}

/// Computes the intersection points of two curves.
///
/// The result is empty when the curves do not meet, holds the infinity
/// sentinel when they share a whole stretch, and otherwise lists every
/// common point once, in a deterministic order.
pub struct Intersect<'a> {
    first: CurveRef<'a>,
    second: CurveRef<'a>,
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` query.
    #[must_use]
    pub fn new(first: CurveRef<'a>, second: CurveRef<'a>) -> Self {
        Self { first, second }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        intersect_refs(self.first, self.second)
    }
}

/// Shorthand for `Intersect::new(first, second).execute()`.
#[must_use]
pub fn intersect(first: CurveRef<'_>, second: CurveRef<'_>) -> Vec<Point2> {
    Intersect::new(first, second).execute()
}

/// Entities that take part in the intersection engine.
pub trait Intersections {
    /// Borrows `self` as an engine operand.
    fn as_curve(&self) -> CurveRef<'_>;

    /// Intersection points with `other`. See [`Intersect`].
    fn intersections<O: Intersections + ?Sized>(&self, other: &O) -> Vec<Point2> {
        intersect(self.as_curve(), other.as_curve())
    }
}

impl Intersections for Point2 {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Point(self)
    }
}

impl Intersections for Line {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Line(self)
    }
}

impl Intersections for Ray {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Ray(self)
    }
}

impl Intersections for Segment {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Segment(self)
    }
}

impl Intersections for Circle {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Circle(self)
    }
}

impl Intersections for Polygon {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Polygon(self)
    }
}

impl Intersections for Triangle {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Polygon(self)
    }
}

impl Intersections for Quadrilateral {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Polygon(self)
    }
}

impl Intersections for Square {
    fn as_curve(&self) -> CurveRef<'_> {
        CurveRef::Polygon(self)
    }
}

fn intersect_refs(first: CurveRef<'_>, second: CurveRef<'_>) -> Vec<Point2> {
    match (first, second) {
        (CurveRef::Point(p), other) | (other, CurveRef::Point(p)) => on_curve(p, other),
        (CurveRef::Polygon(poly), other) | (other, CurveRef::Polygon(poly)) => polygon_with(poly, other),
        (CurveRef::Circle(a), CurveRef::Circle(b)) => circle_circle(a, b),
        (CurveRef::Circle(c), other) | (other, CurveRef::Circle(c)) => match other.affine() {
            Some(affine) => affine_circle(&affine, c),
            None => Vec::new(),
        },
        (a, b) => match (a.affine(), b.affine()) {
            (Some(a), Some(b)) => affine_affine(&a, &b),
            _ => Vec::new(),
        },
    }
}

fn on_curve(p: &Point2, curve: CurveRef<'_>) -> Vec<Point2> {
    if curve.is_containing(p) {
        vec![*p]
    } else {
        Vec::new()
    }
}

fn polygon_with(poly: &Polygon, other: CurveRef<'_>) -> Vec<Point2> {
    let mut points: Vec<Point2> = Vec::new();
    for side in poly.sides() {
        for q in intersect_refs(CurveRef::Segment(&side), other) {
            if !points.iter().any(|p| equal_p(p, &q)) {
                points.push(q);
            }
        }
    }
    points
}

fn circle_circle(a: &Circle, b: &Circle) -> Vec<Point2> {
    if a.is_trivial() {
        return on_curve(&a.center(), CurveRef::Circle(b));
    }
    if b.is_trivial() {
        return on_curve(&b.center(), CurveRef::Circle(a));
    }
    match circle_circle_points(&a.center(), a.radius(), &b.center(), b.radius()) {
        CircleCrossing::Points(points) => points,
        CircleCrossing::Coincident => {
            trace!(center = ?a.center(), "coincident circles");
            vec![infinity_point()]
        }
    }
}

fn affine_circle(line: &Affine, circle: &Circle) -> Vec<Point2> {
    if circle.is_trivial() {
        return affine_point(line, &circle.center());
    }
    line_circle_params(&line.pivot, &line.vector, &circle.center(), circle.radius())
        .into_iter()
        .filter(|t| line.domain.contains(*t))
        .map(|t| line.point(t))
        .collect()
}

fn affine_contains(curve: &Affine, p: &Point2) -> bool {
    if curve.trivial {
        return equal_p(&curve.pivot, p);
    }
    curve.domain.contains((p - curve.pivot).dot(&curve.vector) / curve.vector.norm_squared())
}

fn affine_affine(a: &Affine, b: &Affine) -> Vec<Point2> {
    if a.trivial {
        return affine_point(b, &a.pivot);
    }
    if b.trivial {
        return affine_point(a, &b.pivot);
    }
    match solve_lines(&a.pivot, &a.vector, &b.pivot, &b.vector) {
        LineCrossing::Point { point, t, u } => {
            if a.domain.contains(t) && b.domain.contains(u) {
                vec![point]
            } else {
                Vec::new()
            }
        }
        LineCrossing::Parallel => Vec::new(),
        LineCrossing::Coincident => collinear_overlap(a, b),
    }
}

fn affine_point(curve: &Affine, p: &Point2) -> Vec<Point2> {
    let on_support = if curve.trivial {
        equal_p(&curve.pivot, p)
    } else {
        Line::new(curve.pivot, curve.vector).equation(p)
    };
    if on_support && affine_contains(curve, p) {
        vec![*p]
    } else {
        Vec::new()
    }
}

/// Overlap of two collinear operands, measured in the parameter of `a`.
fn collinear_overlap(a: &Affine, b: &Affine) -> Vec<Point2> {
    let len_sq = a.vector.norm_squared();
    let offset = (b.pivot - a.pivot).dot(&a.vector) / len_sq;
    let rate = b.vector.dot(&a.vector) / len_sq;
    let map = |s: f64| offset + rate * s;
    let (e0, e1) = (map(b.domain.t_min), map(b.domain.t_max));
    let lo = e0.min(e1).max(a.domain.t_min);
    let hi = e0.max(e1).min(a.domain.t_max);

    if hi < lo - TOLERANCE {
        return Vec::new();
    }
    if hi - lo <= TOLERANCE {
        return vec![a.point((lo + hi) / 2.0)];
    }
    trace!(pivot = ?a.pivot, "overlapping collinear curves");
    vec![infinity_point()]
}
