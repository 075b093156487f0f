#![allow(clippy::unwrap_used)]

use std::sync::Once;

use approx::assert_relative_eq;
use planimetry::geometry::group::LABEL;
use planimetry::geometry::point::{azimuth, distance};
use planimetry::math::intersect_2d::{intersection_v, line_equation};
use planimetry::math::{equal, equal_p, is_infinity};
use planimetry::{
    AffineCurve, Angle, Circle, Curve, Group, Intersections, Isomorphism, Line, Point2, Polygon, Ray, Segment, Shape,
    Square, Transform, Triangle, Vector2,
};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

fn equal_mod_360(a: f64, b: f64) -> bool {
    planimetry::math::equal_mod(planimetry::math::FULL_TURN, a, b)
}

fn has_point(points: &[Point2], q: Point2) -> bool {
    points.iter().any(|x| equal_p(x, &q))
}

#[test]
fn line_equation_endpoints() {
    let f = line_equation(p(0.0, 0.0), p(1.0, 2.0), 1.0);
    assert!(equal_p(&f(0.0), &p(0.0, 0.0)));
    assert!(equal_p(&f(1.0), &p(1.0, 2.0)));
}

#[test]
fn direction_solve() {
    let x = intersection_v(&p(0.0, 0.0), &Vector2::new(1.0, 2.0), &p(0.0, 0.0), &Vector2::new(2.0, 1.0));
    assert!(equal_p(&x, &p(0.0, 0.0)));
    let y = intersection_v(&p(1.0, 2.0), &Vector2::new(1.0, 2.0), &p(3.0, 4.0), &Vector2::new(2.0, 4.0));
    assert!(is_infinity(&y));
}

#[test]
fn lines_cross_once() {
    init_tracing();
    let a = Line::through(p(2.0, 3.0), p(5.0, 8.0));
    let b = Line::through(p(10.0, 13.0), p(5.0, 8.0));
    let xs = a.intersections(&b);
    assert_eq!(xs.len(), 1);
    assert!(equal_p(&xs[0], &p(5.0, 8.0)));
}

#[test]
fn circle_against_axis() {
    init_tracing();
    let circle = Circle::unit();
    let xs = circle.intersections(&Line::ox());
    assert_eq!(xs.len(), 2);
    assert!(has_point(&xs, p(1.0, 0.0)) && has_point(&xs, p(-1.0, 0.0)));

    let touching = circle.translate(Vector2::new(0.0, 1.0));
    let xs = touching.intersections(&Line::ox());
    assert_eq!(xs.len(), 1);
    assert!(equal_p(&xs[0], &p(0.0, 0.0)));

    let apart = circle.translate(Vector2::new(0.0, 1.5));
    assert!(apart.intersections(&Line::ox()).is_empty());
}

#[test]
fn square_encloses_boundary() {
    let sq = Square::new(2.0);
    assert!(sq.is_enclosing(&p(0.0, 0.0)));
    assert!(sq.is_enclosing(&p(1.0, 0.0)));
    assert!(!sq.is_enclosing(&p(2.0, 0.0)));
}

#[test]
fn parametrization_inverse() {
    let line = Line::through(p(1.0, 2.0), p(4.0, 6.0));
    let ray = Ray::through(p(-1.0, 0.5), p(2.0, 2.0));
    let seg = Segment::new(p(1.0, 2.0), p(6.0, 6.0));
    for s in [0.0, 0.3, 0.75, 1.0, 2.5] {
        assert_relative_eq!(line.locus(&line.point(s)), s, epsilon = 1e-9);
        assert_relative_eq!(ray.locus(&ray.point(s)), s, epsilon = 1e-9);
        assert_relative_eq!(seg.locus(&seg.point(s)), s, epsilon = 1e-9);
    }
    let circle = Circle::new(p(1.0, 2.0), 3.0).unwrap();
    for s in [0.0, 0.1, 0.5, 0.9] {
        assert_relative_eq!(circle.locus(&circle.point(s)), s, epsilon = 1e-9);
    }
    let q = circle.point(0.3);
    assert!(equal_p(&circle.point(circle.locus(&q)), &q));
}

#[test]
fn trivial_line_collapses() {
    init_tracing();
    let q = p(3.0, -2.0);
    let line = Line::through(q, q);
    assert!(line.is_trivial());
    for s in [-4.0, 0.0, 1.0, 7.5] {
        assert!(equal(line.locus(&line.point(s)), 0.0));
    }
    assert!(line.is_containing(&q));
    assert!(!line.is_containing(&p(0.0, 0.0)));
}

#[test]
fn distance_symmetry() {
    let (a, b) = (p(1.5, -2.0), p(-3.0, 4.0));
    assert!(equal(distance(&a, &b), distance(&b, &a)));
    assert!(equal(distance(&a, &a), 0.0));
}

#[test]
fn domain_clipping() {
    let seg = Segment::new(p(1.0, 2.0), p(6.0, 6.0));
    let ray = Ray::through(p(1.0, 2.0), p(5.0, 6.0));
    for t in [-1.0, -0.01, 0.0, 0.5, 1.0, 1.01, 3.0] {
        assert_eq!(seg.is_containing(&seg.point(t)), (0.0..=1.0).contains(&t));
        assert_eq!(ray.is_containing(&ray.point(t)), t >= 0.0);
    }
}

#[test]
fn azimuth_sentinel() {
    init_tracing();
    assert!(is_infinity(&azimuth(&p(1.0, 2.0), 0.0, &p(3.0, 4.0), 0.0)));
    let x = azimuth(&p(0.0, 0.0), 45.0, &p(2.0, 0.0), 45.0);
    assert!(equal_p(&x, &p(1.0, 1.0)));
}

#[test]
fn collinear_segments() {
    let a = Segment::new(p(0.0, 0.0), p(2.0, 0.0));
    let touching = Segment::new(p(2.0, 0.0), p(3.0, 0.0));
    let overlapping = Segment::new(p(1.0, 0.0), p(3.0, 0.0));
    let apart = Segment::new(p(3.0, 0.0), p(4.0, 0.0));
    let xs = a.intersections(&touching);
    assert_eq!(xs.len(), 1);
    assert!(equal_p(&xs[0], &p(2.0, 0.0)));
    let xs = a.intersections(&overlapping);
    assert!(xs.len() == 1 && is_infinity(&xs[0]));
    assert!(a.intersections(&apart).is_empty());
}

#[test]
fn rotations_keep_measures() {
    let seg = Segment::new(p(1.0, 2.0), p(6.0, 6.0));
    let turned = seg.rotate(37.0);
    assert!(equal(turned.length(), seg.length()));
    assert!(equal_p(&turned.start(), &seg.start()));
    assert!(equal_mod_360(turned.angle(), seg.angle() + 37.0));

    let tri = Triangle::new(p(0.0, 0.0), p(4.0, 0.0), p(1.0, 3.0)).unwrap();
    let mirrored = tri.reflect_in(&Line::through(p(0.0, 5.0), p(5.0, 0.0)));
    assert!(equal(mirrored.area(), tri.area()));
    assert!(mirrored.is_similar(&tri));
}

#[test]
fn group_round_trip() {
    init_tracing();
    let line = Line::through(p(1.0, 2.0), p(4.0, 6.0));
    let group = Group::new()
        .with(p(1.0, 2.0))
        .with_label("A")
        .with(line)
        .with(Circle::new(p(1.0, 2.0), 3.0).unwrap())
        .with(Angle::new(30.0).on(&line))
        .with(Polygon::new(vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(0.0, 2.0)]).unwrap())
        .with(Square::new(2.0));
    let back = Group::from_canonical(group.to_canonical()).unwrap();
    assert!(back.is_equal(&group));
    assert_eq!(back.option(1, LABEL), Some("A"));
    assert!(matches!(back.element(6), Some(Shape::Polygon(_))));

    let moved = group.rotate_at(&p(1.0, 1.0), 90.0).rotate_at(&p(1.0, 1.0), -90.0);
    assert!(moved.is_equal(&group));
}
