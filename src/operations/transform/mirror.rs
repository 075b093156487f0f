use tracing::trace;

use crate::geometry::curve::AffineCurve;
use crate::math::{Matrix3, Point2};

use super::AffineMap;

impl AffineMap {
    /// Reflection in the line through the origin at `degrees`.
    ///
    /// Equivalent to `p' = 2 * proj_axis(p) - p` for the unit axis.
    #[must_use]
    pub fn reflection(degrees: f64) -> Self {
        let (s, c) = (2.0 * degrees).to_radians().sin_cos();

        #[rustfmt::skip]
        let m = Matrix3::new(
            c,   s,   0.0,
            s,  -c,   0.0,
            0.0, 0.0, 1.0,
        );
        Self::new(m)
    }

    /// Reflection in the line through `point` at `degrees`.
    #[must_use]
    pub fn reflection_at(point: &Point2, degrees: f64) -> Self {
        Self::reflection(degrees).about(point)
    }

    /// Half-turn about `center`.
    #[must_use]
    pub fn point_reflection(center: &Point2) -> Self {
        Self::scaling_at(center, -1.0, -1.0)
    }

    /// Reflection in the support of `axis`; a point reflection in its pivot
    /// when the axis is trivial.
    #[must_use]
    pub fn reflection_in<C: AffineCurve + ?Sized>(axis: &C) -> Self {
        if axis.is_trivial() {
            trace!(pivot = ?axis.pivot(), "reflection in a trivial axis");
            return Self::point_reflection(&axis.pivot());
        }
        Self::reflection_at(&axis.pivot(), axis.angle())
    }
}
