use super::vector_2d::cross;
use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Winding number of `p` with respect to the closed polygon `verts`.
///
/// Non-zero => inside, zero => outside. Boundary points are not treated
/// specially; callers test the boundary first.
#[must_use]
pub fn winding_number_2d(p: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = &verts[i];
        let b = &verts[(i + 1) % n];
        let side = cross(&(b - a), &(p - a));

        if a.y <= p.y {
            if b.y > p.y && side > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && side < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Rotates a closed polygon so it starts at index `start`.
#[must_use]
pub fn rotate_to_start<T: Clone>(items: &[T], start: usize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let start = start % items.len();
    let mut rotated = Vec::with_capacity(items.len());
    rotated.extend_from_slice(&items[start..]);
    rotated.extend_from_slice(&items[..start]);
    rotated
}
