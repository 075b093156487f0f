use crate::geometry::angle::Angle;
use crate::geometry::curve::{Circle, Line, Ray, Segment};
use crate::geometry::polygon::{Polygon, Quadrilateral, Square, Triangle};
use crate::math::{equal_p, Point2};
use crate::operations::query::{intersect, CurveRef};
use crate::operations::transform::{AffineMap, Transform};

/// Any entity of the kernel.
///
/// Triangles, quadrilaterals and squares are stored as their polygon and
/// keep no refinement: a square held here may stop being a square under
/// [`Transform::scale_xy`], and its canonical form is the vertex list.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(Point2),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Circle(Circle),
    Angle(Angle),
    Polygon(Polygon),
}

impl Shape {
    /// Lower-case name of the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Line(_) => "line",
            Self::Ray(_) => "ray",
            Self::Segment(_) => "segment",
            Self::Circle(_) => "circle",
            Self::Angle(_) => "angle",
            Self::Polygon(_) => "polygon",
        }
    }

    /// Borrows the shape as an intersection operand. Angles are not curves.
    #[must_use]
    pub fn as_curve(&self) -> Option<CurveRef<'_>> {
        match self {
            Self::Point(p) => Some(CurveRef::Point(p)),
            Self::Line(c) => Some(CurveRef::Line(c)),
            Self::Ray(c) => Some(CurveRef::Ray(c)),
            Self::Segment(c) => Some(CurveRef::Segment(c)),
            Self::Circle(c) => Some(CurveRef::Circle(c)),
            Self::Polygon(c) => Some(CurveRef::Polygon(c)),
            Self::Angle(_) => None,
        }
    }

    /// Same variant and [`is_equal`](Line::is_equal) on the payloads.
    #[must_use]
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Point(a), Self::Point(b)) => equal_p(a, b),
            (Self::Line(a), Self::Line(b)) => a.is_equal(b),
            (Self::Ray(a), Self::Ray(b)) => a.is_equal(b),
            (Self::Segment(a), Self::Segment(b)) => a.is_equal(b),
            (Self::Circle(a), Self::Circle(b)) => a.is_equal(b),
            (Self::Angle(a), Self::Angle(b)) => a.is_equal(b),
            (Self::Polygon(a), Self::Polygon(b)) => a.is_equal(b),
            _ => false,
        }
    }

    /// Same variant and [`is_similar`](Line::is_similar) on the payloads.
    /// All points are similar.
    #[must_use]
    pub fn is_similar(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Point(_), Self::Point(_)) => true,
            (Self::Line(a), Self::Line(b)) => a.is_similar(b),
            (Self::Ray(a), Self::Ray(b)) => a.is_similar(b),
            (Self::Segment(a), Self::Segment(b)) => a.is_similar(b),
            (Self::Circle(a), Self::Circle(b)) => a.is_similar(b),
            (Self::Angle(a), Self::Angle(b)) => a.is_similar(b),
            (Self::Polygon(a), Self::Polygon(b)) => a.is_similar(b),
            _ => false,
        }
    }

    /// Returns `true` if `p` lies on the shape. Always `false` for angles.
    #[must_use]
    pub fn is_containing(&self, p: &Point2) -> bool {
        self.as_curve().is_some_and(|c| c.is_containing(p))
    }

    /// Intersection points with `other`; empty when either is an angle.
    #[must_use]
    pub fn intersections(&self, other: &Self) -> Vec<Point2> {
        match (self.as_curve(), other.as_curve()) {
            (Some(a), Some(b)) => intersect(a, b),
            _ => Vec::new(),
        }
    }
}

impl Transform for Shape {
    fn transform(&self, map: &AffineMap) -> Self {
        match self {
            Self::Point(p) => Self::Point(p.transform(map)),
            Self::Line(c) => Self::Line(c.transform(map)),
            Self::Ray(c) => Self::Ray(c.transform(map)),
            Self::Segment(c) => Self::Segment(c.transform(map)),
            Self::Circle(c) => Self::Circle(c.transform(map)),
            Self::Angle(a) => Self::Angle(a.transform(map)),
            Self::Polygon(c) => Self::Polygon(c.transform(map)),
        }
    }
}

macro_rules! shape_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Shape {
                fn from(value: $ty) -> Self {
                    Self::$variant(value.into())
                }
            }
        )*
    };
}

shape_from! {
    Point2 => Point,
    Line => Line,
    Ray => Ray,
    Segment => Segment,
    Circle => Circle,
    Angle => Angle,
    Polygon => Polygon,
    Triangle => Polygon,
    Quadrilateral => Polygon,
    Square => Polygon,
}
