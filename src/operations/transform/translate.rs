use crate::math::{Matrix3, Vector2};

use super::AffineMap;

impl AffineMap {
    /// Translation by `displacement`.
    #[must_use]
    pub fn translation(displacement: &Vector2) -> Self {
        Self::new(Matrix3::new_translation(displacement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{equal_p, Point2};

    #[test]
    fn opposite_translations_cancel() {
        let v = Vector2::new(-2.5, 7.0);
        let map = AffineMap::translation(&v).then(&AffineMap::translation(&-v));
        let p = Point2::new(1.0, 2.0);
        assert!(equal_p(&map.transform_point(&p), &p));
    }
}
