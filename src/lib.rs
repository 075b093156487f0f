//! A tolerant 2-D Euclidean geometry kernel.
//!
//! Points, lines, rays, segments, circles, angles and polygons share one
//! curve contract, one intersection engine and one set of affine
//! transformations. Every comparison goes through [`math::TOLERANCE`].

pub mod error;
pub mod geometry;
pub mod isomorphism;
pub mod math;
pub mod operations;

pub use error::{CanonicalError, GeometryError, PlanimetryError, Result};
pub use geometry::{
    AffineCurve, Angle, Circle, Curve, CurveDomain, Group, Line, Polygon, Quadrilateral, Ray, Segment, Shape, Square,
    Triangle,
};
pub use isomorphism::{Canonical, Isomorphism};
pub use math::{Point2, Vector2};
pub use operations::{intersect, AffineMap, Intersections, Transform};
