//! Affine transformations shared by every entity of the kernel.
//!
//! Each entity implements [`Transform::transform`] once, mapping its
//! defining points and vectors through an [`AffineMap`]. The named
//! operations (`translate`, `rotate`, ...) are provided methods that build
//! the matching map and delegate to it.

mod general;
mod mirror;
mod rotate;
mod scale;
mod translate;

pub use general::AffineMap;

use crate::geometry::curve::AffineCurve;
use crate::math::{Point2, Vector2};

/// An entity that can be mapped through a 2-D affine transformation.
///
/// All operations return a new value of the same type; the receiver is
/// never modified.
pub trait Transform: Sized {
    /// Applies `map` to the defining points and vectors.
    #[must_use]
    fn transform(&self, map: &AffineMap) -> Self;

    /// Centre used by [`Transform::rotate`]. Affine curves rotate about
    /// their pivot, everything else about the origin.
    fn default_center(&self) -> Point2 {
        Point2::origin()
    }

    /// Shifts by `v`.
    #[must_use]
    fn translate(&self, v: Vector2) -> Self {
        self.transform(&AffineMap::translation(&v))
    }

    /// Uniform scale about the origin.
    #[must_use]
    fn scale(&self, factor: f64) -> Self {
        self.scale_xy(factor, factor)
    }

    /// Anisotropic scale about the origin.
    #[must_use]
    fn scale_xy(&self, sx: f64, sy: f64) -> Self {
        self.transform(&AffineMap::scaling(sx, sy))
    }

    /// Anisotropic scale about `center`.
    #[must_use]
    fn scale_at(&self, center: &Point2, sx: f64, sy: f64) -> Self {
        self.transform(&AffineMap::scaling_at(center, sx, sy))
    }

    /// Counter-clockwise rotation by `degrees` about [`Transform::default_center`].
    #[must_use]
    fn rotate(&self, degrees: f64) -> Self {
        self.rotate_at(&self.default_center(), degrees)
    }

    /// Counter-clockwise rotation by `degrees` about `center`.
    #[must_use]
    fn rotate_at(&self, center: &Point2, degrees: f64) -> Self {
        self.transform(&AffineMap::rotation_at(center, degrees))
    }

    /// Reflection in the line through the origin at `degrees`.
    #[must_use]
    fn reflect(&self, degrees: f64) -> Self {
        self.reflect_at(&Point2::origin(), degrees)
    }

    /// Reflection in the line through `point` at `degrees`.
    #[must_use]
    fn reflect_at(&self, point: &Point2, degrees: f64) -> Self {
        self.transform(&AffineMap::reflection_at(point, degrees))
    }

    /// Half-turn about `center`.
    #[must_use]
    fn reflect_in_point(&self, center: &Point2) -> Self {
        self.transform(&AffineMap::point_reflection(center))
    }

    /// Reflection in the support of `axis`. A trivial axis acts as a point.
    #[must_use]
    fn reflect_in<C: AffineCurve + ?Sized>(&self, axis: &C) -> Self {
        self.transform(&AffineMap::reflection_in(axis))
    }

    /// The translation that carries `from` onto `to`.
    #[must_use]
    fn superpose(&self, from: &Point2, to: &Point2) -> Self {
        self.translate(to - from)
    }
}

impl Transform for Point2 {
    fn transform(&self, map: &AffineMap) -> Self {
        map.transform_point(self)
    }
}
