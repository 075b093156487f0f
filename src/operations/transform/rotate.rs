use crate::math::{Matrix3, Point2};

use super::AffineMap;

impl AffineMap {
    /// Counter-clockwise rotation about the origin, angle in degrees.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        Self::new(rotation_matrix(degrees))
    }

    /// Counter-clockwise rotation about `center`, angle in degrees.
    #[must_use]
    pub fn rotation_at(center: &Point2, degrees: f64) -> Self {
        Self::rotation(degrees).about(center)
    }
}

/// Builds a homogeneous rotation matrix.
fn rotation_matrix(degrees: f64) -> Matrix3 {
    let (s, c) = degrees.to_radians().sin_cos();

    #[rustfmt::skip]
    let m = Matrix3::new(
        c,  -s,  0.0,
        s,   c,  0.0,
        0.0, 0.0, 1.0,
    );
    m
}
