use crate::math::{Matrix3, Point2, Vector2};

/// A 2-D affine map stored as a 3x3 homogeneous matrix.
///
/// Points are mapped as `(x, y, 1)` and vectors as `(x, y, 0)`, so
/// translations move points but leave directions untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    matrix: Matrix3,
}

impl AffineMap {
    /// Wraps a homogeneous matrix. The last row is expected to be `(0, 0, 1)`.
    #[must_use]
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// The identity map.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Matrix3::identity())
    }

    /// Returns the homogeneous matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// The map that applies `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        Self::new(next.matrix * self.matrix)
    }

    /// Conjugates `self` by the translation to `center`, so that `center`
    /// plays the role of the origin.
    #[must_use]
    pub fn about(&self, center: &Point2) -> Self {
        Self::translation(&-center.coords)
            .then(self)
            .then(&Self::translation(&center.coords))
    }

    /// Maps a point (homogeneous coordinates).
    #[must_use]
    pub fn transform_point(&self, point: &Point2) -> Point2 {
        let v = self.matrix * nalgebra::Vector3::new(point.x, point.y, 1.0);
        Point2::new(v.x, v.y)
    }

    /// Maps a direction vector (ignoring translation).
    #[must_use]
    pub fn transform_vector(&self, vector: &Vector2) -> Vector2 {
        let v = self.matrix * nalgebra::Vector3::new(vector.x, vector.y, 0.0);
        Vector2::new(v.x, v.y)
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let m = &self.matrix;
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
    }

    /// Length scale factor `sqrt(|det|)`: exact for similarities, the
    /// geometric mean of the axis factors otherwise.
    #[must_use]
    pub fn length_scale(&self) -> f64 {
        self.determinant().abs().sqrt()
    }

    /// Returns `true` if the map flips orientation.
    #[must_use]
    pub fn is_reversing(&self) -> bool {
        self.determinant() < 0.0
    }
}

impl Default for AffineMap {
    fn default() -> Self {
        Self::identity()
    }
}
