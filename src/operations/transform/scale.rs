use crate::math::{Matrix3, Point2, Vector2};

use super::AffineMap;

impl AffineMap {
    /// Anisotropic scale about the origin.
    #[must_use]
    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self::new(Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)))
    }

    /// Anisotropic scale about `center`.
    #[must_use]
    pub fn scaling_at(center: &Point2, sx: f64, sy: f64) -> Self {
        Self::scaling(sx, sy).about(center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::equal_p;

    #[test]
    fn center_is_fixed() {
        let c = Point2::new(2.0, 3.0);
        let map = AffineMap::scaling_at(&c, 4.0, -0.5);
        assert!(equal_p(&map.transform_point(&c), &c));
        assert!(equal_p(&map.transform_point(&Point2::new(3.0, 5.0)), &Point2::new(6.0, 2.0)));
    }
}
