pub mod query;
pub mod transform;

pub use query::{intersect, CurveRef, Intersect, Intersections};
pub use transform::{AffineMap, Transform};
