mod intersect;

pub use intersect::{intersect, CurveRef, Intersect, Intersections};
