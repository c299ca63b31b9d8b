use super::*;
use std::collections::HashSet;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, SQRT_2};

use proptest::prelude::*;

use crate::sample::{random_points, Bounds2, ReplayToken};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn circle(x: f64, y: f64, r: f64) -> Circle {
    Circle::new(p(x, y), r).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn close_pt(a: Point, b: Point) -> bool {
    close(a.x, b.x) && close(a.y, b.y)
}

#[test]
fn point_distance_and_midpoint() {
    assert_eq!(p(0.0, 0.0).distance(p(3.0, 4.0)), 5.0);
    assert_eq!(p(-1.0, 2.0).distance(p(-1.0, 2.0)), 0.0);
    assert_eq!(p(0.0, 0.0).midpoint(p(3.0, -4.0)), p(1.5, -2.0));
    let v: nalgebra::Vector2<f64> = p(1.0, 2.0).into();
    assert_eq!(Point::from(v), p(1.0, 2.0));
}

#[test]
fn point_hash_ignores_zero_sign() {
    let set: HashSet<Point> = [p(0.0, 1.0), p(-0.0, 1.0)].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn segment_equality_ignores_endpoint_order() {
    let s = Segment::new(p(1.0, 2.0), p(3.0, -1.0));
    let r = Segment::new(p(3.0, -1.0), p(1.0, 2.0));
    assert_eq!(s, r);
    assert_ne!(s, Segment::new(p(1.0, 2.0), p(3.0, 1.0)));
    let set: HashSet<Segment> = [s, r].into_iter().collect();
    assert_eq!(set.len(), 1);
    assert_eq!(Segment::new(p(0.0, 0.0), p(0.0, 2.0)).length(), 2.0);
}

#[test]
fn triangle_is_an_unordered_set() {
    let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0));
    let t = Triangle::new(a, b, c).unwrap();
    assert_eq!(t, Triangle::new(b, c, a).unwrap());
    assert_eq!(t, Triangle::new(c, a, b).unwrap());
    assert_eq!(t, Triangle::new(c, b, a).unwrap());
    let set: HashSet<Triangle> = [
        t,
        Triangle::new(b, c, a).unwrap(),
        Triangle::new(c, a, b).unwrap(),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 1);
    assert!(matches!(
        Triangle::new(a, b, a),
        Err(GeometryError::CoincidentPoints { .. })
    ));
}

#[test]
fn triangle_area_and_containment() {
    let t = Triangle::new(p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0)).unwrap();
    assert_eq!(t.half_perimeter(), 6.0);
    assert_eq!(t.area(), 6.0);
    // Vertex and hypotenuse midpoint: all sub-triangle sides are exact.
    assert!(t.contains(p(0.0, 0.0)));
    assert!(t.contains(p(2.0, 1.5)));
    assert!(!t.contains(p(4.0, 3.0)));
    assert!(!t.contains(p(-1.0, -1.0)));
    // Collinear vertices are accepted and have zero area.
    let flat = Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)).unwrap();
    assert_eq!(flat.area(), 0.0);
}

#[test]
fn circle_distance_and_containment() {
    let a = circle(0.0, 0.0, 1.0);
    let b = circle(10.0, 0.0, 1.0);
    assert_eq!(a.distance(&b), 8.0);
    assert_eq!(a.distance(&circle(1.0, 0.0, 1.0)), 0.0);
    assert_eq!(a.distance(&circle(2.0, 0.0, 1.0)), 0.0);

    let c = circle(0.0, 0.0, 5.0);
    assert!(c.contains(p(3.0, 4.0)));
    assert!(c.contains(p(0.0, 0.0)));
    assert!(!c.contains(p(3.1, 4.0)));
    assert!(c.contains_eps(p(3.0, 4.000000001), 1e-6));
}

#[test]
fn circle_rejects_bad_radius() {
    assert_eq!(
        Circle::new(p(0.0, 0.0), -1.0),
        Err(GeometryError::InvalidRadius { radius: -1.0 })
    );
    assert!(Circle::new(p(0.0, 0.0), f64::NAN).is_err());
    assert!(Circle::new(p(0.0, 0.0), f64::INFINITY).is_err());
    assert_eq!(Circle::new(p(1.0, 1.0), 0.0).unwrap(), Circle::point(p(1.0, 1.0)));
}

#[test]
fn diameter_picks_farthest_pair() {
    let pts = [p(0.0, 0.0), p(1.0, 5.0), p(-2.0, 1.0), p(4.0, -3.0)];
    let d = diameter(&pts).unwrap();
    assert_eq!(d, Segment::new(p(1.0, 5.0), p(4.0, -3.0)));
}

#[test]
fn diameter_tie_keeps_first_pair() {
    let pts = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)];
    let d = diameter(&pts).unwrap();
    assert_eq!(d.begin, p(0.0, 0.0));
    assert_eq!(d.end, p(1.0, 1.0));
}

#[test]
fn diameter_needs_two_points() {
    let err = diameter(&[p(1.0, 1.0)]).unwrap_err();
    assert_eq!(err, GeometryError::TooFewPoints { needed: 2, got: 1 });
    assert!(err.is_invalid_argument());
    assert!(diameter(&[]).is_err());
}

#[test]
fn circle_by_diameter_uses_midpoint() {
    let s = Segment::new(p(0.0, 0.0), p(4.0, 0.0));
    let c = circle_by_diameter(&s);
    assert_eq!(c.center(), p(2.0, 0.0));
    assert_eq!(c.radius(), 2.0);
    assert!(c.contains(s.begin));
    assert!(c.contains(s.end));
}

#[test]
fn line_by_points_horizontal_vertical_diagonal() {
    let h = line_by_points(p(0.0, 2.0), p(5.0, 2.0)).unwrap();
    assert_eq!(h.angle(), 0.0);
    assert_eq!(h.b(), 2.0);

    let v = line_by_points(p(2.0, 0.0), p(2.0, 5.0)).unwrap();
    assert_eq!(v.angle(), FRAC_PI_2);
    assert!(close(v.b(), -2.0));

    let d = line_by_points(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
    assert!(close(d.angle(), FRAC_PI_4));

    // Falling line: slope -1 normalizes to 3π/4.
    let f = line_by_points(p(0.0, 1.0), p(1.0, 0.0)).unwrap();
    assert!(close(f.angle(), 3.0 * FRAC_PI_4));

    assert!(matches!(
        line_by_points(p(1.0, 1.0), p(1.0, 1.0)),
        Err(GeometryError::CoincidentPoints { .. })
    ));
}

#[test]
fn line_by_segment_matches_line_by_points() {
    let (a, b) = (p(-1.0, 3.0), p(2.0, 7.0));
    assert_eq!(
        line_by_segment(&Segment::new(a, b)).unwrap(),
        line_by_points(a, b).unwrap()
    );
}

#[test]
fn line_new_validates_angle() {
    assert!(Line::new(p(0.0, 0.0), 0.0).is_ok());
    for bad in [std::f64::consts::PI, -0.1, 4.0, f64::NAN] {
        let err = Line::new(p(0.0, 0.0), bad).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidAngle { .. }));
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn line_equality_is_exact() {
    let a = Line::new(p(0.0, 1.0), 0.5).unwrap();
    let b = Line::new(p(0.0, 1.0), 0.5).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, Line::new(p(0.0, 1.0), 0.5 + 1e-15).unwrap());
    assert_eq!(
        Line::new(p(0.0, 2.0), 0.0).unwrap().to_string(),
        "Line(1 * y = 0 * x + 2)"
    );
}

#[test]
fn bisector_is_perpendicular_through_midpoint() {
    // Horizontal pair -> vertical bisector x = 1.
    let v = bisector_by_points(p(0.0, 0.0), p(2.0, 0.0)).unwrap();
    assert!(close(v.angle(), FRAC_PI_2));
    // Vertical pair -> horizontal bisector y = 1.
    let h = bisector_by_points(p(0.0, 0.0), p(0.0, 2.0)).unwrap();
    assert_eq!(h.angle(), 0.0);
    assert_eq!(h.b(), 1.0);
    assert!(close_pt(v.cross_point(&h).unwrap(), p(1.0, 1.0)));
    assert!(bisector_by_points(p(3.0, 3.0), p(3.0, 3.0)).is_err());
}

#[test]
fn cross_point_of_diagonals_and_parallels() {
    let up = line_by_points(p(0.0, 0.0), p(1.0, 1.0)).unwrap();
    let down = line_by_points(p(0.0, 2.0), p(2.0, 0.0)).unwrap();
    assert!(close_pt(up.cross_point(&down).unwrap(), p(1.0, 1.0)));
    assert!(close_pt(down.cross_point(&up).unwrap(), p(1.0, 1.0)));

    let vertical = line_by_points(p(3.0, 0.0), p(3.0, 1.0)).unwrap();
    assert!(close_pt(up.cross_point(&vertical).unwrap(), p(3.0, 3.0)));

    let a = Line::new(p(0.0, 0.0), 0.3).unwrap();
    let b = Line::new(p(0.0, 1.0), 0.3).unwrap();
    assert_eq!(a.cross_point(&b), Err(GeometryError::ParallelLines));
    assert!(!GeometryError::ParallelLines.is_invalid_argument());
}

#[test]
fn circumcircle_of_right_triangle() {
    let (a, b, c) = (p(0.0, 0.0), p(2.0, 0.0), p(0.0, 2.0));
    let circ = circle_by_three_points(a, b, c).unwrap();
    assert!(close_pt(circ.center(), p(1.0, 1.0)));
    assert!(close(circ.radius(), SQRT_2));
    for q in [a, b, c] {
        assert!(close(circ.center().distance(q), circ.radius()));
    }
}

#[test]
fn circumcircle_rejects_collinear_and_repeated_points() {
    assert_eq!(
        circle_by_three_points(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)),
        Err(GeometryError::CollinearPoints)
    );
    assert!(matches!(
        circle_by_three_points(p(0.0, 0.0), p(0.0, 0.0), p(2.0, 2.0)),
        Err(GeometryError::CoincidentPoints { .. })
    ));
}

#[test]
fn circumcircle_rejects_nearly_collinear_points() {
    // 0.1 * 0.6 and 0.3 * 0.2 differ only by rounding.
    assert_eq!(
        circle_by_three_points(p(0.0, 0.0), p(0.1, 0.3), p(0.2, 0.6)),
        Err(GeometryError::CollinearPoints)
    );
    assert_eq!(
        circle_by_three_points(p(1e9, 1e9), p(1e9 + 1.0, 1e9 + 1.0), p(1e9 + 2.0, 1e9 + 2.0)),
        Err(GeometryError::CollinearPoints)
    );
}

#[test]
fn nearest_circle_pair() {
    let far = [circle(0.0, 0.0, 1.0), circle(10.0, 0.0, 1.0)];
    let (a, b) = find_nearest_circle_pair(&far).unwrap();
    assert_eq!(a.distance(&b), 8.0);

    let mixed = [
        circle(0.0, 0.0, 1.0),
        circle(10.0, 0.0, 1.0),
        circle(20.0, 0.0, 1.0),
        circle(10.5, 0.5, 1.0),
    ];
    let (a, b) = find_nearest_circle_pair(&mixed).unwrap();
    assert_eq!((a, b), (mixed[1], mixed[3]));
    assert_eq!(a.distance(&b), 0.0);

    assert_eq!(
        find_nearest_circle_pair(&far[..1]),
        Err(GeometryError::TooFewCircles { needed: 2, got: 1 })
    );
}

#[test]
fn enclosing_circle_small_cases() {
    assert_eq!(
        min_containing_circle(&[]),
        Err(GeometryError::TooFewPoints { needed: 1, got: 0 })
    );
    let one = min_containing_circle(&[p(5.0, 5.0)]).unwrap();
    assert_eq!(one.center(), p(5.0, 5.0));
    assert_eq!(one.radius(), 0.0);

    let two = min_containing_circle(&[p(0.0, 0.0), p(0.0, 6.0)]).unwrap();
    assert_eq!(two.center(), p(0.0, 3.0));
    assert_eq!(two.radius(), 3.0);
}

#[test]
fn enclosing_circle_of_square() {
    let pts = [p(0.0, 0.0), p(0.0, 2.0), p(2.0, 0.0), p(2.0, 2.0)];
    let c = min_containing_circle(&pts).unwrap();
    assert!(close_pt(c.center(), p(1.0, 1.0)));
    assert!(close(c.radius(), SQRT_2));
}

#[test]
fn enclosing_circle_of_three_points() {
    // Obtuse: the long side is a diameter, the circumcircle would be larger.
    let obtuse = [p(0.0, 0.0), p(4.0, 0.0), p(2.0, 1.0)];
    let c = min_containing_circle(&obtuse).unwrap();
    assert!(close_pt(c.center(), p(2.0, 0.0)));
    assert!(close(c.radius(), 2.0));

    // Acute: circumcircle.
    let acute = [p(0.0, 0.0), p(2.0, 0.0), p(1.0, 1.5)];
    let c = min_containing_circle(&acute).unwrap();
    let circ = circle_by_three_points(acute[0], acute[1], acute[2]).unwrap();
    assert!(close_pt(c.center(), circ.center()));
    assert!(close(c.radius(), circ.radius()));

    // Collinear: outer pair.
    let line = [p(0.0, 0.0), p(3.0, 0.0), p(1.0, 0.0)];
    let c = min_containing_circle(&line).unwrap();
    assert!(close_pt(c.center(), p(1.5, 0.0)));
}

#[test]
fn enclosing_circle_far_from_origin() {
    let acute = [(0.0, 0.0), (2.0, 0.0), (1.0, 1.5)];
    for offset in [1e7, 1e9] {
        let shift = |(x, y): (f64, f64)| p(x + offset, y + offset);
        let three: Vec<Point> = acute.iter().copied().map(shift).collect();
        let mut four = three.clone();
        four.push(shift((1.0, 0.5)));
        for pts in [three, four] {
            let c = min_containing_circle(&pts).unwrap();
            assert!((c.radius() - 13.0 / 12.0).abs() < 1e-5, "offset {offset}: {c}");
            assert!(c.center().distance(shift((1.0, 5.0 / 12.0))) < 1e-5);
            assert!(pts.iter().all(|&q| c.contains(q)));
        }
    }
}

#[test]
fn enclosing_circle_rejects_non_finite_points() {
    let pts = [p(0.0, 0.0), p(1.0, 0.0), p(f64::INFINITY, 0.0)];
    assert_eq!(min_containing_circle(&pts), Err(GeometryError::NoEnclosingCircle));
    let pts = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(f64::NAN, 0.0)];
    assert_eq!(min_containing_circle(&pts), Err(GeometryError::NoEnclosingCircle));
}

#[test]
fn enclosing_circle_with_duplicates() {
    let pts = [p(1.0, 1.0); 5];
    let c = min_containing_circle(&pts).unwrap();
    assert_eq!(c.center(), p(1.0, 1.0));
    assert_eq!(c.radius(), 0.0);
}

#[test]
fn enclosing_circle_randomized_seeded() {
    let bounds = Bounds2::square(50.0);
    for index in 0..8 {
        let pts = random_points(12, bounds, ReplayToken { seed: 7, index });
        let c = min_containing_circle(&pts).unwrap();
        assert!(pts.iter().all(|&q| c.contains_eps(q, 1e-7)));
        // Two or three points sit on the boundary.
        let on_boundary = pts
            .iter()
            .filter(|&&q| (c.center().distance(q) - c.radius()).abs() < 1e-6)
            .count();
        assert!(on_boundary >= 2, "only {on_boundary} boundary points");
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        GeometryError::TooFewPoints { needed: 2, got: 0 }.to_string(),
        "need at least 2 points, got 0"
    );
    assert_eq!(
        GeometryError::CoincidentPoints { point: p(1.0, 2.0) }.to_string(),
        "points coincide at (1, 2)"
    );
}

fn coord() -> impl Strategy<Value = f64> {
    -1e3..1e3f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn prop_distance_symmetric(a in point(), b in point()) {
        prop_assert_eq!(a.distance(b), b.distance(a));
        prop_assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn prop_segment_order_independent(a in point(), b in point()) {
        prop_assert_eq!(Segment::new(a, b), Segment::new(b, a));
    }

    #[test]
    fn prop_triangle_rotations_equal(a in point(), b in point(), c in point()) {
        prop_assume!(a != b && b != c && c != a);
        let t = Triangle::new(a, b, c).unwrap();
        prop_assert_eq!(t, Triangle::new(b, c, a).unwrap());
        prop_assert_eq!(t, Triangle::new(c, a, b).unwrap());
    }

    #[test]
    fn prop_circle_by_diameter_covers_endpoints(a in point(), b in point()) {
        let c = circle_by_diameter(&Segment::new(a, b));
        prop_assert!(c.contains_eps(a, 1e-9));
        prop_assert!(c.contains_eps(b, 1e-9));
        prop_assert!(close_pt(c.center(), a.midpoint(b)));
    }

    #[test]
    fn prop_circumcircle_equidistant(
        a in (-100.0..100.0f64, -100.0..100.0f64),
        b in (-100.0..100.0f64, -100.0..100.0f64),
        c in (-100.0..100.0f64, -100.0..100.0f64)
    ) {
        let (a, b, c) = (Point::from(a), Point::from(b), Point::from(c));
        let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
        prop_assume!(cross.abs() > 100.0);
        let circ = circle_by_three_points(a, b, c).unwrap();
        let tol = 1e-6 * (1.0 + circ.radius());
        for q in [a, b, c] {
            prop_assert!((circ.center().distance(q) - circ.radius()).abs() < tol);
        }
    }

    #[test]
    fn prop_enclosing_circle_bounds(pts in prop::collection::vec(point(), 4..9)) {
        let c = min_containing_circle(&pts).unwrap();
        prop_assert!(pts.iter().all(|&q| c.contains_eps(q, 1e-6)));
        // Half the diameter <= R <= diameter / sqrt(3) (Jung).
        let d = diameter(&pts).unwrap().length();
        prop_assert!(c.radius() >= d / 2.0 - 1e-9);
        prop_assert!(c.radius() <= d / 3f64.sqrt() + 1e-6);
    }
}
