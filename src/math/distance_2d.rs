use super::vector_2d::cross;
use super::{Point2, Vector2, TOLERANCE};

/// Returns the minimum distance from `p` to the affine curve
/// `pivot + t * v`, `t` restricted to `[t_min, t_max]`.
///
/// Infinite bounds describe lines and rays. A zero `v` degenerates to the
/// point-to-point distance.
#[must_use]
pub fn point_to_affine_dist(p: &Point2, pivot: &Point2, v: &Vector2, t_min: f64, t_max: f64) -> f64 {
    let len_sq = v.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return (p - pivot).norm();
    }

    // Project onto the infinite line, clamp to the domain.
    let t = ((p - pivot).dot(v) / len_sq).clamp(t_min, t_max);
    (p - (pivot + v * t)).norm()
}

/// Perpendicular distance from `p` to the infinite line `pivot + t * v`.
#[must_use]
pub fn point_to_line_dist(p: &Point2, pivot: &Point2, v: &Vector2) -> f64 {
    let len = v.norm();
    if len < TOLERANCE {
        return (p - pivot).norm();
    }
    cross(v, &(p - pivot)).abs() / len
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn segment_dist(q: &Point2, a: &Point2, b: &Point2) -> f64 {
        point_to_affine_dist(q, a, &(b - a), 0.0, 1.0)
    }

    #[test]
    fn segment_dist_perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let d = segment_dist(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_endpoint_closest() {
        let d = segment_dist(&p(-1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!((d - 1.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        // Zero-length segment: distance is point-to-point.
        let d = segment_dist(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn ray_dist_behind_start() {
        let v = Vector2::new(1.0, 0.0);
        let d = point_to_affine_dist(&p(-3.0, 4.0), &p(0.0, 0.0), &v, 0.0, f64::INFINITY);
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn line_dist_ignores_direction_length() {
        let d1 = point_to_line_dist(&p(0.0, 3.0), &p(0.0, 0.0), &Vector2::new(1.0, 0.0));
        let d2 = point_to_line_dist(&p(0.0, 3.0), &p(5.0, 0.0), &Vector2::new(-7.0, 0.0));
        assert!((d1 - 3.0).abs() < TOL);
        assert!((d2 - 3.0).abs() < TOL);
    }
}
