pub mod angle;
pub mod curve;
pub mod group;
pub mod point;
pub mod polygon;
pub mod shape;

pub use angle::Angle;
pub use curve::{AffineCurve, Circle, Curve, CurveDomain, Line, Ray, Segment};
pub use group::{ElementId, Group, Metadata};
pub use polygon::{Polygon, Quadrilateral, Square, Triangle};
pub use shape::Shape;
