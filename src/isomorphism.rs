//! Lossless conversion between entities and plain coordinate tuples.
//!
//! `from_canonical(to_canonical(x))` is equal to `x` for every entity, and
//! `to_canonical(from_canonical(t))` reproduces `t` up to tolerance for every
//! well-formed tuple.

use crate::error::{CanonicalError, Result};
use crate::geometry::angle::Angle;
use crate::geometry::curve::{AffineCurve, Circle, Curve, Line, Ray, Segment};
use crate::geometry::group::{Group, Metadata};
use crate::geometry::polygon::{Polygon, Quadrilateral, Square, Triangle};
use crate::geometry::shape::Shape;
use crate::math::{Point2, Vector2};

/// A point or vector as `[x, y]`.
pub type Xy = [f64; 2];

/// Conversion to and from a canonical tuple.
pub trait Isomorphism: Sized {
    type Canonical;

    fn to_canonical(&self) -> Self::Canonical;

    /// Rebuilds the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the tuple holds non-finite numbers or violates a
    /// constructor contract.
    fn from_canonical(canonical: Self::Canonical) -> Result<Self>;
}

/// Canonical form of a [`Shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum Canonical {
    Point(Xy),
    Line((Xy, Xy)),
    Ray((Xy, Xy)),
    Segment((Xy, Xy)),
    Circle((Xy, f64)),
    Angle((Xy, f64, f64)),
    Polygon(Vec<Xy>),
}

fn xy(p: &Point2) -> Xy {
    [p.x, p.y]
}

fn xy_v(v: &Vector2) -> Xy {
    [v.x, v.y]
}

fn finite(kind: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(value) => Err(CanonicalError::Invalid {
            kind,
            reason: format!("non-finite component {value}"),
        }
        .into()),
        None => Ok(()),
    }
}

fn point(kind: &'static str, [x, y]: Xy) -> Result<Point2> {
    finite(kind, &[x, y])?;
    Ok(Point2::new(x, y))
}

fn vector(kind: &'static str, [x, y]: Xy) -> Result<Vector2> {
    finite(kind, &[x, y])?;
    Ok(Vector2::new(x, y))
}

fn points(kind: &'static str, coords: &[Xy]) -> Result<Vec<Point2>> {
    coords.iter().map(|&c| point(kind, c)).collect()
}

impl Isomorphism for Point2 {
    type Canonical = Xy;

    fn to_canonical(&self) -> Xy {
        xy(self)
    }

    fn from_canonical(canonical: Xy) -> Result<Self> {
        point("point", canonical)
    }
}

impl Isomorphism for Line {
    type Canonical = (Xy, Xy);

    fn to_canonical(&self) -> (Xy, Xy) {
        (xy(&self.point(0.0)), xy(&self.point(1.0)))
    }

    fn from_canonical((a, b): (Xy, Xy)) -> Result<Self> {
        Ok(Self::through(point("line", a)?, point("line", b)?))
    }
}

impl Isomorphism for Ray {
    type Canonical = (Xy, Xy);

    fn to_canonical(&self) -> (Xy, Xy) {
        (xy(&self.start()), xy_v(&self.vector()))
    }

    fn from_canonical((start, v): (Xy, Xy)) -> Result<Self> {
        Ok(Self::new(point("ray", start)?, vector("ray", v)?))
    }
}

impl Isomorphism for Segment {
    type Canonical = (Xy, Xy);

    fn to_canonical(&self) -> (Xy, Xy) {
        (xy(&self.start()), xy(&self.end()))
    }

    fn from_canonical((a, b): (Xy, Xy)) -> Result<Self> {
        Ok(Self::new(point("segment", a)?, point("segment", b)?))
    }
}

impl Isomorphism for Circle {
    type Canonical = (Xy, f64);

    fn to_canonical(&self) -> (Xy, f64) {
        (xy(&self.center()), self.radius())
    }

    fn from_canonical((center, radius): (Xy, f64)) -> Result<Self> {
        finite("circle", &[radius])?;
        Self::new(point("circle", center)?, radius)
    }
}

impl Isomorphism for Angle {
    type Canonical = (Xy, f64, f64);

    fn to_canonical(&self) -> (Xy, f64, f64) {
        (xy(&self.vertex()), self.start(), self.end())
    }

    fn from_canonical((vertex, start, end): (Xy, f64, f64)) -> Result<Self> {
        finite("angle", &[start, end])?;
        Ok(Self::from_parts(point("angle", vertex)?, start, end))
    }
}

impl Isomorphism for Polygon {
    type Canonical = Vec<Xy>;

    fn to_canonical(&self) -> Vec<Xy> {
        self.vertices().iter().map(xy).collect()
    }

    fn from_canonical(canonical: Vec<Xy>) -> Result<Self> {
        Self::new(points("polygon", &canonical)?)
    }
}

impl Isomorphism for Triangle {
    type Canonical = [Xy; 3];

    fn to_canonical(&self) -> [Xy; 3] {
        [xy(&self.vertex(1)), xy(&self.vertex(2)), xy(&self.vertex(3))]
    }

    fn from_canonical([a, b, c]: [Xy; 3]) -> Result<Self> {
        Self::new(point("triangle", a)?, point("triangle", b)?, point("triangle", c)?)
    }
}

impl Isomorphism for Quadrilateral {
    type Canonical = [Xy; 4];

    fn to_canonical(&self) -> [Xy; 4] {
        [
            xy(&self.vertex(1)),
            xy(&self.vertex(2)),
            xy(&self.vertex(3)),
            xy(&self.vertex(4)),
        ]
    }

    fn from_canonical([a, b, c, d]: [Xy; 4]) -> Result<Self> {
        let kind = "quadrilateral";
        Self::new(point(kind, a)?, point(kind, b)?, point(kind, c)?, point(kind, d)?)
    }
}

impl Isomorphism for Square {
    type Canonical = (Xy, Xy, bool);

    fn to_canonical(&self) -> (Xy, Xy, bool) {
        (xy(&self.vertex(1)), xy(&self.vertex(2)), self.is_clockwise())
    }

    fn from_canonical((a, b, clockwise): (Xy, Xy, bool)) -> Result<Self> {
        Ok(Self::from_side(point("square", a)?, point("square", b)?, clockwise))
    }
}

impl Isomorphism for Shape {
    type Canonical = Canonical;

    fn to_canonical(&self) -> Canonical {
        match self {
            Self::Point(p) => Canonical::Point(p.to_canonical()),
            Self::Line(c) => Canonical::Line(c.to_canonical()),
            Self::Ray(c) => Canonical::Ray(c.to_canonical()),
            Self::Segment(c) => Canonical::Segment(c.to_canonical()),
            Self::Circle(c) => Canonical::Circle(c.to_canonical()),
            Self::Angle(a) => Canonical::Angle(a.to_canonical()),
            Self::Polygon(c) => Canonical::Polygon(c.to_canonical()),
        }
    }

    fn from_canonical(canonical: Canonical) -> Result<Self> {
        Ok(match canonical {
            Canonical::Point(t) => Self::Point(Point2::from_canonical(t)?),
            Canonical::Line(t) => Self::Line(Line::from_canonical(t)?),
            Canonical::Ray(t) => Self::Ray(Ray::from_canonical(t)?),
            Canonical::Segment(t) => Self::Segment(Segment::from_canonical(t)?),
            Canonical::Circle(t) => Self::Circle(Circle::from_canonical(t)?),
            Canonical::Angle(t) => Self::Angle(Angle::from_canonical(t)?),
            Canonical::Polygon(t) => Self::Polygon(Polygon::from_canonical(t)?),
        })
    }
}

impl Isomorphism for Group {
    type Canonical = Vec<(Canonical, Metadata)>;

    fn to_canonical(&self) -> Self::Canonical {
        self.iter()
            .map(|(shape, meta)| (shape.to_canonical(), meta.cloned().unwrap_or_default()))
            .collect()
    }

    fn from_canonical(canonical: Self::Canonical) -> Result<Self> {
        let mut group = Self::new();
        for (element, meta) in canonical {
            let id = group.push(Shape::from_canonical(element)?);
            for (key, value) in &meta {
                group.set_option(id, key, value);
            }
        }
        Ok(group)
    }
}
